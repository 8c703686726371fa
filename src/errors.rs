// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one thing that can go wrong with a Mandelbrot render is being
//! asked for a nonsensical one.  Everything downstream of a
//! `Viewport` assumes its dimensions, zoom and limit are sane, so we
//! refuse bad arguments at construction time.

/// Describes why a set of rendering parameters was refused.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum MandelError {
    /// The pixel grid has no columns.
    #[fail(display = "Image width must be greater than zero")]
    ZeroWidth,

    /// The pixel grid has no rows.
    #[fail(display = "Image height must be greater than zero")]
    ZeroHeight,

    /// Zero, negative, or non-finite zoom factor.
    #[fail(display = "Magnification must be a positive, finite number, got {}", _0)]
    BadMagnification(f64),

    /// An iteration limit of zero would color every point as the interior.
    #[fail(display = "Iteration limit must be greater than zero")]
    ZeroLimit,

    /// The center of the view is not a finite point on the plane.
    #[fail(display = "Center must be a finite point, got {},{}", _0, _1)]
    BadCenter(f64, f64),

    /// The RGBA buffer for a grid this size cannot be addressed.
    #[fail(display = "An image of {}x{} pixels is too large to render", _0, _1)]
    TooLarge(u32, u32),

    /// A palette needs at least one color for escaping points.
    #[fail(display = "A palette needs at least one escape color")]
    EmptyPalette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            MandelError::BadMagnification(-2.0).to_string(),
            "Magnification must be a positive, finite number, got -2"
        );
        assert_eq!(
            MandelError::TooLarge(4294967295, 4294967295).to_string(),
            "An image of 4294967295x4294967295 pixels is too large to render"
        );
    }
}
