//! Contains the Viewport, which describes a rectangle of pixels on the
//! integral plane with an origin at 0,0, and where that rectangle
//! lands on the complex plane: a center point and a magnification.
//! The PlaneMapper turns one into the other, and the Area walks every
//! pixel of the grid in row-major order.
use itertools::iproduct;
use itertools::structs::Product;
use num::Complex;
use std::ops::Range;

use errors::MandelError;
use escape::Point;

/// The span of the complex plane that fits across the shorter side of
/// the image at a magnification of 1.0.
pub const UNIT_SPAN: f64 = 4.0;

/// Describes the x, y of a pixel in the integral plane.  Rows grow
/// downward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel(pub u32, pub u32);

/// Everything needed to decide what a render looks like.  Once
/// constructed, the parameters are known to be sane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    center: Point,
    magnification: f64,
    limit: usize,
}

impl Viewport {
    /// Requires the width and height of the image in pixels, the point
    /// on the complex plane that will sit in the middle of the image,
    /// the zoom factor, and the number of iterations to attempt on
    /// each point before deciding it's in the set.
    pub fn new(
        width: u32,
        height: u32,
        center: Point,
        magnification: f64,
        limit: usize,
    ) -> Result<Viewport, MandelError> {
        if width == 0 {
            return Err(MandelError::ZeroWidth);
        }
        if height == 0 {
            return Err(MandelError::ZeroHeight);
        }
        if !(magnification.is_finite() && magnification > 0.0) {
            return Err(MandelError::BadMagnification(magnification));
        }
        if limit == 0 {
            return Err(MandelError::ZeroLimit);
        }
        if !(center.re.is_finite() && center.im.is_finite()) {
            return Err(MandelError::BadCenter(center.re, center.im));
        }
        let fits = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .is_some();
        if !fits {
            return Err(MandelError::TooLarge(width, height));
        }

        Ok(Viewport {
            width,
            height,
            center,
            magnification,
            limit,
        })
    }

    /// Width of the image in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the image in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The point in the middle of the image.
    pub fn center(&self) -> Point {
        self.center
    }

    /// The zoom factor.
    pub fn magnification(&self) -> f64 {
        self.magnification
    }

    /// The iteration limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The distance on the complex plane covered by one pixel.
    pub fn pixel_step(&self) -> f64 {
        UNIT_SPAN / f64::from(self.width.min(self.height)) / self.magnification
    }

    /// The total number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size in bytes of the RGBA buffer for this grid.
    pub fn buffer_len(&self) -> usize {
        self.len() * 4
    }
}

/// Maps pixels of the integral plane to points on the complex plane.
/// The image's Y axis points down and the complex plane's points up,
/// so stepping down a row subtracts from the imaginary part.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaneMapper {
    // The point under the upper-left pixel.
    origin: Point,
    // How far apart adjacent pixels are.
    step: f64,
    width: u32,
    height: u32,
}

impl PlaneMapper {
    /// Derive the mapping for a viewport.
    pub fn new(viewport: &Viewport) -> PlaneMapper {
        let step = viewport.pixel_step();
        let center = viewport.center();
        PlaneMapper {
            origin: Complex::new(
                center.re - f64::from(viewport.width()) / 2.0 * step,
                center.im + f64::from(viewport.height()) / 2.0 * step,
            ),
            step,
            width: viewport.width(),
            height: viewport.height(),
        }
    }

    /// The point under the upper-left pixel.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Given a pixel on the integral plane, return the point it maps
    /// to on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Point {
        Complex::new(
            self.origin.re + f64::from(pixel.0) * self.step,
            self.origin.im - f64::from(pixel.1) * self.step,
        )
    }

    /// The linear offset of a pixel in a row-major grid, if the pixel
    /// is on the grid at all.
    pub fn pixel_to_offset(&self, pixel: &Pixel) -> Option<usize> {
        if pixel.0 >= self.width || pixel.1 >= self.height {
            return None;
        }
        Some(pixel.1 as usize * self.width as usize + pixel.0 as usize)
    }

    /// Walk every pixel of the grid.
    pub fn area(&self) -> Area {
        Area::new(*self)
    }
}

/// A lazy, row-major walk over every pixel in a grid, yielding the
/// linear index, the pixel, and the point it maps to.  Restart it by
/// asking the PlaneMapper for another one.
#[derive(Clone)]
pub struct Area {
    mapper: PlaneMapper,
    pixels: Product<Range<u32>, Range<u32>>,
    index: usize,
    len: usize,
}

impl Area {
    fn new(mapper: PlaneMapper) -> Area {
        Area {
            pixels: iproduct!(0..mapper.height, 0..mapper.width),
            index: 0,
            len: mapper.width as usize * mapper.height as usize,
            mapper,
        }
    }
}

impl Iterator for Area {
    type Item = (usize, Pixel, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let (y, x) = self.pixels.next()?;
        let pixel = Pixel(x, y);
        let index = self.index;
        self.index += 1;
        Some((index, pixel, self.mapper.pixel_to_point(&pixel)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Area {}
