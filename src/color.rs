// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The color of a single pixel
//!
//! The carver only ever needs the red, green and blue channels of a
//! pixel, so every incoming pixel is boiled down to those three bytes
//! when the grid is built.  Alpha never participates in the energy.

use image::{Pixel, Rgb};

/// A pixel's color, as three 0-255 components.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Extract the color of any 8-bit pixel.  Grey pixels expand to
    /// three equal channels; alpha is dropped.
    pub fn from_pixel<P>(pixel: &P) -> Self
    where
        P: Pixel<Subpixel = u8>,
    {
        let Rgb([red, green, blue]) = pixel.to_rgb();
        Color { red, green, blue }
    }

    // Takes the channels from two pixels, maps the difference
    // between each channel, squares it, and sums them up:
    //
    //        |Δ|² = (Δr)²+(Δg)²+(Δb)²
    //
    // 3 * 255² comfortably fits in a u32.
    /// The squared RGB distance between two colors.
    pub fn gradient(&self, other: &Color) -> u32 {
        let d = |a: u8, b: u8| {
            let c = i32::from(a) - i32::from(b);
            (c * c) as u32
        };
        d(self.red, other.red) + d(self.green, other.green) + d(self.blue, other.blue)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Color::from_pixel(&pixel)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.red, color.green, color.blue])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgba};

    #[test]
    fn alpha_is_discarded() {
        let color = Color::from_pixel(&Rgba([10u8, 20, 30, 0]));
        assert_eq!(color, Color::new(10, 20, 30));
    }

    #[test]
    fn grey_expands_to_three_channels() {
        assert_eq!(Color::from_pixel(&Luma([77u8])), Color::new(77, 77, 77));
    }

    #[test]
    fn rgb_survives_the_trip() {
        let pixel = Rgb([255u8, 0, 128]);
        assert_eq!(Rgb::<u8>::from(Color::from(pixel)), pixel);
    }

    #[test]
    fn gradient_is_symmetric_squared_distance() {
        let a = Color::new(255, 101, 51);
        let b = Color::new(255, 153, 255);
        assert_eq!(a.gradient(&b), 52 * 52 + 204 * 204);
        assert_eq!(b.gradient(&a), a.gradient(&b));
        assert_eq!(a.gradient(&a), 0);
    }

    #[test]
    fn gradient_extremes() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        assert_eq!(black.gradient(&white), 3 * 255 * 255);
    }
}
