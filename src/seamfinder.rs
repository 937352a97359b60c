// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy field
//!
//! The field is treated as a layered graph: every row is a layer, and
//! every pixel is reachable from the (up to) three pixels touching it
//! in the row above.  One pass down the rows gives the cheapest way to
//! reach every pixel; one pass back up the recorded edges gives the
//! seam.  Horizontal seams are the same pass run over a `Flipper`.

use crate::flipper::{EnergyField, Flipper};
use crate::twodmap::TwoDimensionalMap;
use tracing::trace;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// carvers as well as caching.
pub trait SeamFinder {
    /// A left-to-right seam: one row index per column, so its length
    /// is the image's width.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// A top-to-bottom seam: one column index per row, so its length
    /// is the image's height.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

// The first candidate holds its place unless a later one is strictly
// cheaper, so among equals the lowest index always wins.
fn cheapest(costs: &[f64]) -> (usize, f64) {
    costs
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, costs[0]), |best, (i, &c)| cq!(c < best.1, (i, c), best))
}

/// Given an energy field, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel of the cheapest top-to-bottom seam.  An empty field has no
/// seam.
pub fn find_seam<F: EnergyField + ?Sized>(field: &F) -> Vec<u32> {
    let (width, height) = field.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    // Only the row above is ever consulted, so the running costs live
    // in two rows that trade places.  The edge-to table has to keep
    // every row for the walk back up.
    let mut edge_to: TwoDimensionalMap<u32> = TwoDimensionalMap::new(width, height);
    let mut above: Vec<f64> = (0..width).map(|x| field.energy_at(x, 0)).collect();
    let mut current = vec![0.0; width as usize];

    let maxwidth = width - 1;
    for y in 1..height {
        for x in 0..width {
            let (low, high) = (cq!(x == 0, 0, x - 1), cq!(x == maxwidth, maxwidth, x + 1));
            let (offset, cost) = cheapest(&above[low as usize..=high as usize]);
            current[x as usize] = field.energy_at(x, y) + cost;
            edge_to[(x, y)] = low + offset as u32;
        }
        std::mem::swap(&mut above, &mut current);
    }

    // Find the x coordinate of the bottommost seam with the least
    // energy, then walk the edges back up, reverse and return.
    let (last, total) = cheapest(&above);
    trace!(width, height, total, "found seam");
    let mut seam_col = last as u32;
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = edge_to[(seam_col, y)];
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// The cheapest top-to-bottom seam; see `find_seam`.
pub fn energy_to_vertical_seam<F: EnergyField + ?Sized>(field: &F) -> Vec<u32> {
    find_seam(field)
}

/// Given an energy field, return the list of y-coordinates that, when
/// mapped with the range (0..width), give the XY coordinates for each
/// pixel of the cheapest left-to-right seam.
pub fn energy_to_horizontal_seam<F: EnergyField + ?Sized>(field: &F) -> Vec<u32> {
    find_seam(&Flipper::new(field))
}
