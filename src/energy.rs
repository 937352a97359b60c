// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel
//!
//! Uses the dual-gradient energy function: the color distance between
//! a pixel's left and right neighbors, plus the distance between its
//! upper and lower neighbors, square-rooted.  Pixels on the frame of
//! the image have no full set of neighbors and get a fixed, large
//! energy instead.
//!
//! Energy is never stored alongside the grid.  It is derived from the
//! current colors every time it is asked for, so it always reflects
//! whatever seams have already been removed.

use crate::color::Color;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// The energy of every pixel on the outer frame of the image.
pub const BORDER_ENERGY: f64 = 1000.0;

/// The dual-gradient energy of the pixel at `(x, y)`.  The caller
/// guarantees the coordinate is on the grid.
pub(crate) fn dual_gradient(grid: &TwoDimensionalMap<Color>, x: u32, y: u32) -> f64 {
    let (width, height) = grid.dimensions();
    if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
        return BORDER_ENERGY;
    }

    let (left, right) = (grid[(x - 1, y)], grid[(x + 1, y)]);
    let (up, down) = (grid[(x, y - 1)], grid[(x, y + 1)]);
    f64::from(right.gradient(&left) + down.gradient(&up)).sqrt()
}

/// Compute the energy of every pixel in the grid.  This is a snapshot;
/// it goes stale the moment a seam is removed.
pub(crate) fn calculate_energy(grid: &TwoDimensionalMap<Color>) -> TwoDimensionalMap<f64> {
    let (width, height) = grid.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = dual_gradient(grid, x, y);
    }
    emap
}
