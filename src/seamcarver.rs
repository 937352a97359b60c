// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the engine
//!
//! A SeamCarver takes a private copy of an image's colors, answers
//! energy and seam queries about it, and shrinks it one seam at a
//! time.  The stored width and height are the grid's width and
//! height; the only things that change them are the two removal
//! operations, and those either succeed completely or leave the grid
//! exactly as it was.

use crate::color::Color;
use crate::energy::{calculate_energy, dual_gradient};
use crate::error::SeamError;
use crate::flipper::EnergyField;
use crate::seamfinder::{energy_to_horizontal_seam, energy_to_vertical_seam, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, ImageBuffer, Pixel, RgbImage};
use itertools::iproduct;
use tracing::debug;

// Which way a removal shrinks the image.  Removing a vertical seam
// makes the image narrower; a horizontal one makes it shorter.
#[derive(Debug, PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

/// An image being carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    pixels: TwoDimensionalMap<Color>,
}

impl SeamCarver {
    /// Creates a new SeamCarver from a snapshot of an image.  Images
    /// with no pixels are refused.
    pub fn new<I, P>(image: &I) -> Result<Self, SeamError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { width, height });
        }
        let mut pixels = TwoDimensionalMap::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            pixels[(x, y)] = Color::from_pixel(&image.get_pixel(x, y));
        }
        debug!(width, height, "seam carver ready");
        Ok(SeamCarver { pixels })
    }

    /// Creates a new SeamCarver from a row-major list of colors.
    pub fn from_colors(width: u32, height: u32, colors: Vec<Color>) -> Result<Self, SeamError> {
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage { width, height });
        }
        let actual = colors.len();
        let pixels = TwoDimensionalMap::from_vec(width, height, colors).ok_or(SeamError::BadBuffer {
            width,
            height,
            expected: width as usize * height as usize,
            actual,
        })?;
        Ok(SeamCarver { pixels })
    }

    /// The current width of the image.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// The current height of the image.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn check_pixel(&self, x: u32, y: u32) -> Result<(), SeamError> {
        cq!(
            self.pixels.contains(x, y),
            Ok(()),
            Err(SeamError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        )
    }

    /// The color currently at `(x, y)`.
    pub fn color(&self, x: u32, y: u32) -> Result<Color, SeamError> {
        self.check_pixel(x, y)?;
        Ok(self.pixels[(x, y)])
    }

    /// The dual-gradient energy of the pixel at `(x, y)`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64, SeamError> {
        self.check_pixel(x, y)?;
        Ok(dual_gradient(&self.pixels, x, y))
    }

    /// A snapshot of every pixel's energy, as it stands right now.
    pub fn energy_map(&self) -> TwoDimensionalMap<f64> {
        calculate_energy(&self.pixels)
    }

    /// The current state of the image, as a new RGB image.
    pub fn picture(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self.pixels[(x, y)].into())
    }

    /// Remove a top-to-bottom seam, one column index per row.  The
    /// image becomes one pixel narrower.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<(), SeamError> {
        self.validate(seam, Carve::Width)?;
        self.pixels.remove_column(seam);
        debug!(width = self.width(), height = self.height(), "removed vertical seam");
        Ok(())
    }

    /// Remove a left-to-right seam, one row index per column.  The
    /// image becomes one pixel shorter.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<(), SeamError> {
        self.validate(seam, Carve::Height)?;
        self.pixels.remove_row(seam);
        debug!(width = self.width(), height = self.height(), "removed horizontal seam");
        Ok(())
    }

    // Length, then every entry's range, then continuity, then whether
    // there is anything left to remove.  Nothing here touches the grid.
    fn validate(&self, seam: &[u32], direction: Carve) -> Result<(), SeamError> {
        let (span, bound) = cq!(
            direction == Carve::Width,
            (self.height(), self.width()),
            (self.width(), self.height())
        );

        if seam.len() != span as usize {
            return Err(SeamError::SeamLength {
                expected: span as usize,
                actual: seam.len(),
            });
        }

        if let Some((position, &index)) = seam.iter().enumerate().find(|&(_, &i)| i >= bound) {
            return Err(SeamError::SeamIndex {
                position,
                index,
                bound,
            });
        }

        let jump = |pair: &[u32]| (i64::from(pair[0]) - i64::from(pair[1])).abs() > 1;
        if let Some(before) = seam.windows(2).position(jump) {
            return Err(SeamError::SeamStep {
                position: before + 1,
                from: seam[before],
                to: seam[before + 1],
            });
        }

        if bound <= 1 {
            return Err(SeamError::CannotShrink { extent: bound });
        }
        Ok(())
    }
}

impl EnergyField for SeamCarver {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn energy_at(&self, x: u32, y: u32) -> f64 {
        dual_gradient(&self.pixels, x, y)
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        energy_to_horizontal_seam(self)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        energy_to_vertical_seam(self)
    }
}
