#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points on the complex plane whose
//! orbit under `z = z² + c` stays bounded.  For every pixel of an
//! image we find the point it sits on, count how many times we can
//! apply that recurrence before the orbit leaves the circle of radius
//! 2, and turn that count into a color.  Points that never leave
//! within the iteration limit are the "lake," the black heart of the
//! set; the bands of color around it show how quickly everything else
//! went to infinity.
//!
//! There are two ways to get an image out.  `render()` walks the
//! whole grid and hands back a packed RGBA buffer.  `MandelbrotImage`
//! computes each pixel only when asked, and can be fed to anything in
//! the `image` crate that reads a `GenericImageView`.  Given the same
//! parameters, the two produce the same pixels.

#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod errors;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod render;
pub mod sampler;

pub use errors::MandelError;
pub use escape::{iterations, Point};
pub use palette::Palette;
pub use planes::{Area, Pixel, PlaneMapper, Viewport};
pub use render::{render, Renderer};
pub use sampler::MandelbrotImage;
