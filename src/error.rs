// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong when talking to a SeamCarver.
//!
//! All of these are the caller's fault: a bad coordinate, a seam of
//! the wrong shape, or an image with nothing in it.  None of them are
//! transient, and every check runs before the grid is touched.

use thiserror::Error;

/// The error type for every fallible SeamCarver operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeamError {
    /// The source image had no pixels to carve.
    #[error("cannot carve an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A pixel buffer did not match the dimensions it was handed with.
    #[error("pixel buffer holds {actual} values, but {width}x{height} needs {expected}")]
    BadBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A pixel coordinate fell outside the current grid.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },

    /// A seam did not span the dimension it was meant to cross.
    #[error("seam has {actual} entries, expected {expected}")]
    SeamLength { expected: usize, actual: usize },

    /// A seam entry pointed past the edge of the grid.
    #[error("seam entry {position} is {index}, which is not below {bound}")]
    SeamIndex { position: usize, index: u32, bound: u32 },

    /// Two adjacent seam entries were not neighbors.
    #[error("seam jumps from {from} to {to} at entry {position}")]
    SeamStep { position: usize, from: u32, to: u32 },

    /// The seam is well-formed, but removing it would leave nothing.
    #[error("cannot remove a seam from a grid only {extent} pixel across")]
    CannotShrink { extent: u32 },
}
