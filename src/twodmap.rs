// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, addressable, shrinkable two-dimensional field.
//!
//! One container serves every grid in the crate: the pixel colors the
//! carver owns, the edge-to pointers of the seam search, and any
//! precomputed energy map a caller wants to search directly.

use std::ops::{Index, IndexMut};

/// A row-major `width` x `height` field of `P`.  The width is the
/// stride, so removing a column restrides the whole buffer while
/// removing a row only shortens it.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A field of the given size, every cell at `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the
    /// buffer is the wrong size for the dimensions given.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        cq!(
            cells.len() == width as usize * height as usize,
            Some(TwoDimensionalMap { width, height, cells }),
            None
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw cells, row by row.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    /// True if `(x, y)` addresses a cell.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Delete the cell at column `seam[y]` from every row `y`, closing
    /// the gap by sliding the rest of the row left.  The seam must
    /// already have been validated against this field.
    pub(crate) fn remove_column(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.height as usize);
        debug_assert!(self.width > 0);
        let width = self.width as usize;
        let mut index = 0;
        // Row-major order is preserved by retain, and the cells that
        // survive are exactly the new (width - 1)-stride layout.
        self.cells.retain(|_| {
            let (x, y) = (index % width, index / width);
            index += 1;
            x != seam[y] as usize
        });
        self.width -= 1;
    }

    /// Delete the cell at row `seam[x]` from every column `x`, closing
    /// the gap by sliding the rest of the column up.  The seam must
    /// already have been validated against this field.
    pub(crate) fn remove_row(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.width as usize);
        debug_assert!(self.height > 0);
        let (width, height) = (self.width as usize, self.height as usize);
        for (x, &row) in seam.iter().enumerate() {
            for y in (row as usize)..(height - 1) {
                self.cells[y * width + x] = self.cells[(y + 1) * width + x];
            }
        }
        self.cells.truncate(width * (height - 1));
        self.height -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 4 x 3, each cell holding 10 * row + column.
    fn numbered() -> TwoDimensionalMap<u32> {
        let cells = (0..3).flat_map(|y| (0..4).map(move |x| 10 * y + x)).collect();
        TwoDimensionalMap::from_vec(4, 3, cells).unwrap()
    }

    #[test]
    fn addressing_is_row_major() {
        let map = numbered();
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(3, 0)], 3);
        assert_eq!(map[(1, 2)], 21);
        assert!(map.contains(3, 2));
        assert!(!map.contains(4, 0));
        assert!(!map.contains(0, 3));
    }

    #[test]
    fn mismatched_buffer_is_refused() {
        assert!(TwoDimensionalMap::from_vec(2, 2, vec![0u32; 3]).is_none());
        assert!(TwoDimensionalMap::from_vec(2, 2, vec![0u32; 4]).is_some());
    }

    #[test]
    fn writes_land_where_reads_find_them() {
        let mut map: TwoDimensionalMap<u32> = TwoDimensionalMap::new(3, 2);
        map[(2, 1)] = 7;
        assert_eq!(map.as_slice(), &[0, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn column_removal_shifts_rows_left() {
        let mut map = numbered();
        map.remove_column(&[0, 1, 3]);
        assert_eq!(map.dimensions(), (3, 3));
        assert_eq!(map.as_slice(), &[1, 2, 3, 10, 12, 13, 20, 21, 22]);
    }

    #[test]
    fn row_removal_shifts_columns_up() {
        let mut map = numbered();
        map.remove_row(&[0, 1, 2, 1]);
        assert_eq!(map.dimensions(), (4, 2));
        assert_eq!(map.as_slice(), &[10, 1, 2, 3, 20, 21, 12, 23]);
    }

    #[test]
    fn removal_down_to_a_single_cell() {
        let mut map = numbered();
        map.remove_column(&[0, 0, 0]);
        map.remove_column(&[2, 2, 2]);
        map.remove_column(&[0, 1, 1]);
        assert_eq!(map.dimensions(), (1, 3));
        assert_eq!(map.as_slice(), &[2, 11, 21]);
        map.remove_row(&[1]);
        map.remove_row(&[0]);
        assert_eq!(map.dimensions(), (1, 1));
        assert_eq!(map.as_slice(), &[21]);
    }
}
