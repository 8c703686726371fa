// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The eager renderer.  Walks every pixel of the viewport once,
//! iterates the point under it, colors the result, and packs the
//! colors into a single RGBA buffer, row-major, four bytes a pixel.

use image::{Pixel as ImagePixel, RgbaImage};
use num::Complex;

use errors::MandelError;
use escape::iterations;
use palette::Palette;
use planes::{PlaneMapper, Viewport};

/// Holds the parameters by which a Mandelbrot image is generated.
/// Once set, this object is not mutable.
#[derive(Clone, Debug)]
pub struct Renderer {
    viewport: Viewport,
    palette: Palette,
}

impl Renderer {
    /// A renderer using the Ultra Fractal palette.
    pub fn new(viewport: Viewport) -> Renderer {
        Renderer::with_palette(viewport, Palette::default())
    }

    /// A renderer using a palette of the caller's choosing.
    pub fn with_palette(viewport: Viewport, palette: Palette) -> Renderer {
        Renderer { viewport, palette }
    }

    /// The parameters of this render.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Produce the RGBA buffer.  Identical renderers always produce
    /// identical buffers.
    pub fn render(&self) -> Vec<u8> {
        let mut buffer = vec![0u8; self.viewport.buffer_len()];
        self.fill(&mut buffer);
        buffer
    }

    /// Produce the image directly, ready for encoding.
    pub fn render_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.viewport.width(), self.viewport.height());
        self.fill(&mut img);
        img
    }

    // The buffer must be exactly `buffer_len()` bytes.
    fn fill(&self, buffer: &mut [u8]) {
        let limit = self.viewport.limit();
        debug!(
            "Rendering {}x{} at {} (x{}), limit {}",
            self.viewport.width(),
            self.viewport.height(),
            self.viewport.center(),
            self.viewport.magnification(),
            limit
        );

        for (index, _pixel, point) in PlaneMapper::new(&self.viewport).area() {
            let color = self.palette.color_for(iterations(point, limit), limit);
            let offset = index * 4;
            buffer[offset..offset + 4].copy_from_slice(color.channels());
        }

        debug!("Rendered {} bytes", buffer.len());
    }
}

/// Render a Mandelbrot image into a row-major RGBA buffer of
/// `width * height * 4` bytes, using the Ultra Fractal palette.
pub fn render(
    width: u32,
    height: u32,
    cx: f64,
    cy: f64,
    magnification: f64,
    limit: usize,
) -> Result<Vec<u8>, MandelError> {
    let viewport = Viewport::new(width, height, Complex::new(cx, cy), magnification, limit)?;
    Ok(Renderer::new(viewport).render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn buffer_is_four_bytes_a_pixel() {
        assert_eq!(render(6, 4, 0.0, 0.0, 1.0, 1000).unwrap().len(), 96);
        assert_eq!(render(1, 1, 0.0, 0.0, 1.0, 1).unwrap().len(), 4);
    }

    #[test]
    fn renders_the_reference_pixel() {
        let img = render(6, 4, 0.0, 0.0, 1.0, 1000).unwrap();
        assert_eq!(&img[12..16], &[25, 7, 26, 255]);
    }

    #[test]
    fn the_origin_is_in_the_lake() {
        // Pixel (3, 2) of a 6x4 grid centered on 0,0 sits on the origin.
        let img = render(6, 4, 0.0, 0.0, 1.0, 1000).unwrap();
        let offset = (2 * 6 + 3) * 4;
        assert_eq!(&img[offset..offset + 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn renders_are_repeatable() {
        let a = render(32, 24, -0.75, 0.1, 3.0, 200).unwrap();
        let b = render(32, 24, -0.75, 0.1, 3.0, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let img = render(16, 16, -0.5, 0.0, 1.0, 50).unwrap();
        assert!(img.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn bad_arguments_are_refused() {
        assert_eq!(render(0, 4, 0.0, 0.0, 1.0, 10), Err(MandelError::ZeroWidth));
        assert_eq!(render(4, 4, 0.0, 0.0, 1.0, 0), Err(MandelError::ZeroLimit));
        assert_eq!(
            render(4, 4, 0.0, 0.0, 0.0, 10),
            Err(MandelError::BadMagnification(0.0))
        );
    }

    #[test]
    fn custom_palettes_are_used() {
        let green = Rgba([0, 255, 0, 255]);
        let white = Rgba([255, 255, 255, 255]);
        let viewport = Viewport::new(6, 4, Complex::new(0.0, 0.0), 1.0, 1000).unwrap();
        let palette = Palette::new(white, vec![green]).unwrap();
        let img = Renderer::with_palette(viewport, palette).render();
        assert_eq!(&img[12..16], &[0, 255, 0, 255]);
        assert_eq!(&img[60..64], &[255, 255, 255, 255]);
    }

    #[test]
    fn render_image_wraps_the_buffer() {
        let viewport = Viewport::new(6, 4, Complex::new(0.0, 0.0), 1.0, 1000).unwrap();
        let renderer = Renderer::new(viewport);
        let img = renderer.render_image();
        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(*img.get_pixel(3, 0), Rgba([25, 7, 26, 255]));
        assert_eq!(img.into_raw(), renderer.render());
    }
}
