//! An image that isn't there.  MandelbrotImage holds only the
//! parameters of a render, and computes the color of any pixel when
//! asked for it.  It plugs into the `image` crate as a
//! GenericImageView, so encoders and buffers can pull pixels from it
//! one at a time.  Nothing is cached: ask for a pixel twice, and it
//! gets computed twice.

use image::{GenericImageView, Rgba};

use escape::iterations;
use palette::Palette;
use planes::{Pixel, PlaneMapper, Viewport};

/// A Mandelbrot image with each pixel computed on demand.
#[derive(Clone, Debug)]
pub struct MandelbrotImage {
    viewport: Viewport,
    mapper: PlaneMapper,
    palette: Palette,
}

impl MandelbrotImage {
    /// An on-demand image using the Ultra Fractal palette.
    pub fn new(viewport: Viewport) -> MandelbrotImage {
        MandelbrotImage::with_palette(viewport, Palette::default())
    }

    /// An on-demand image using a palette of the caller's choosing.
    pub fn with_palette(viewport: Viewport, palette: Palette) -> MandelbrotImage {
        trace!("On-demand image over {:?}", viewport);
        MandelbrotImage {
            mapper: PlaneMapper::new(&viewport),
            viewport,
            palette,
        }
    }

    /// The parameters of this image.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The color of the pixel at (x, y).  (0, 0) is the upper-left
    /// pixel; (width - 1, height - 1) the lower-right.
    pub fn color_at(&self, x: u32, y: u32) -> Rgba<u8> {
        let limit = self.viewport.limit();
        let point = self.mapper.pixel_to_point(&Pixel(x, y));
        self.palette.color_for(iterations(point, limit), limit)
    }
}

impl GenericImageView for MandelbrotImage {
    type Pixel = Rgba<u8>;
    type InnerImageView = Self;

    fn dimensions(&self) -> (u32, u32) {
        (self.viewport.width(), self.viewport.height())
    }

    fn bounds(&self) -> (u32, u32, u32, u32) {
        (0, 0, self.viewport.width(), self.viewport.height())
    }

    /// Panics if (x, y) is off the grid, as every other image does.
    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        assert!(
            self.in_bounds(x, y),
            "pixel ({}, {}) is outside a {}x{} image",
            x,
            y,
            self.viewport.width(),
            self.viewport.height()
        );
        self.color_at(x, y)
    }

    fn inner(&self) -> &Self::InnerImageView {
        self
    }
}
