// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns iteration counts into colors.  Points that escape cycle
//! through a fixed set of bands, which makes the boundary of the set
//! stand out; points that never escape get the interior color.

use image::Rgba;

use errors::MandelError;

/// The color of the "lake," the points that never escape.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A set of colors allegedly taken from the Ultra Fractal program.
pub const ULTRA_FRACTAL: [Rgba<u8>; 16] = [
    Rgba([66, 30, 15, 255]),
    Rgba([25, 7, 26, 255]),
    Rgba([9, 1, 47, 255]),
    Rgba([4, 4, 73, 255]),
    Rgba([0, 7, 100, 255]),
    Rgba([12, 44, 138, 255]),
    Rgba([24, 82, 177, 255]),
    Rgba([57, 125, 209, 255]),
    Rgba([134, 181, 229, 255]),
    Rgba([211, 236, 248, 255]),
    Rgba([241, 233, 191, 255]),
    Rgba([248, 201, 95, 255]),
    Rgba([255, 170, 0, 255]),
    Rgba([204, 128, 0, 255]),
    Rgba([153, 87, 0, 255]),
    Rgba([106, 52, 3, 255]),
];

/// An interior color and the bands used for escaping points.  The
/// interior color is kept apart from the bands, so it can never be
/// picked for a point that escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    interior: Rgba<u8>,
    bands: Vec<Rgba<u8>>,
}

impl Palette {
    /// Build a palette.  There must be at least one band.
    pub fn new(interior: Rgba<u8>, bands: Vec<Rgba<u8>>) -> Result<Palette, MandelError> {
        if bands.is_empty() {
            return Err(MandelError::EmptyPalette);
        }
        Ok(Palette { interior, bands })
    }

    /// The color of points that never escaped.
    pub fn interior(&self) -> Rgba<u8> {
        self.interior
    }

    /// The escape colors, in cycle order.
    pub fn bands(&self) -> &[Rgba<u8>] {
        &self.bands
    }

    /// The color for a point that took `iterations` steps to escape,
    /// out of a possible `limit`.  Counts of 0 and of `limit` or more
    /// are treated as the interior.
    pub fn color_for(&self, iterations: usize, limit: usize) -> Rgba<u8> {
        if iterations > 0 && iterations < limit {
            self.bands[iterations % self.bands.len()]
        } else {
            self.interior
        }
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            interior: BLACK,
            bands: ULTRA_FRACTAL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_lake_is_black() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0, 10), Rgba([0, 0, 0, 255]));
        assert_eq!(palette.color_for(10, 10), Rgba([0, 0, 0, 255]));
        assert_eq!(palette.color_for(11, 10), BLACK);
    }

    #[test]
    fn escaping_points_cycle_through_the_bands() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(4, 10), Rgba([0, 7, 100, 255]));
        assert_eq!(palette.color_for(1, 1000), Rgba([25, 7, 26, 255]));
        assert_eq!(palette.color_for(16, 1000), Rgba([66, 30, 15, 255]));
        assert_eq!(palette.color_for(20, 1000), palette.color_for(4, 1000));
    }

    #[test]
    fn escaping_points_never_get_the_interior_color() {
        let red = Rgba([255, 0, 0, 255]);
        let palette = Palette::new(BLACK, vec![red]).unwrap();
        for v in 1..50 {
            assert_eq!(palette.color_for(v, 50), red);
        }
    }

    #[test]
    fn empty_palettes_are_refused() {
        assert_eq!(Palette::new(BLACK, vec![]), Err(MandelError::EmptyPalette));
    }
}
