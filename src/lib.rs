// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking by seam carving.
//!
//! A `SeamCarver` owns a copy of an image's colors.  Ask it for the
//! lowest-energy vertical or horizontal seam, hand that seam back to
//! have it removed, and the image is one pixel narrower or shorter
//! with its most visually important content intact.

#[macro_use]
mod ternary;

pub mod color;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use color::Color;
pub use energy::BORDER_ENERGY;
pub use error::SeamError;
pub use flipper::{EnergyField, Flipper};
pub use seamcarver::SeamCarver;
pub use seamfinder::{energy_to_horizontal_seam, energy_to_vertical_seam, find_seam, SeamFinder};
pub use twodmap::TwoDimensionalMap;
