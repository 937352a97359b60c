// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy fields, and a dimensional flipper for them.
//!
//! The seam search only knows how to walk an energy field from top to
//! bottom.  A horizontal seam is a vertical seam through the same
//! field turned on its side, so rather than carry two copies of the
//! search we hand it a proxy that maps the width to the original
//! height, and every x to y, and vice versa.

use crate::twodmap::TwoDimensionalMap;

/// Anything the seam search can walk: a rectangle with a
/// non-negative energy at every point.
pub trait EnergyField {
    /// `(width, height)` of the field.
    fn dimensions(&self) -> (u32, u32);

    /// The energy at `(x, y)`.  Only ever called with coordinates
    /// inside `dimensions()`.
    fn energy_at(&self, x: u32, y: u32) -> f64;
}

/// A precomputed energy map is the simplest field of all.
impl EnergyField for TwoDimensionalMap<f64> {
    fn dimensions(&self) -> (u32, u32) {
        TwoDimensionalMap::dimensions(self)
    }

    fn energy_at(&self, x: u32, y: u32) -> f64 {
        self[(x, y)]
    }
}

/// A transposed view of an energy field.
pub struct Flipper<'a, F: EnergyField + ?Sized> {
    pub field: &'a F,
}

impl<'a, F: EnergyField + ?Sized> Flipper<'a, F> {
    pub fn new(field: &'a F) -> Self {
        Flipper { field }
    }
}

impl<'a, F: EnergyField + ?Sized> EnergyField for Flipper<'a, F> {
    fn dimensions(&self) -> (u32, u32) {
        let (width, height) = self.field.dimensions();
        (height, width)
    }

    fn energy_at(&self, x: u32, y: u32) -> f64 {
        self.field.energy_at(y, x)
    }
}
