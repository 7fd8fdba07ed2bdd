#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! Renders the Mandelbrot set by escape time: every pixel of the output
//! image is mapped to a point on the complex plane, the point is iterated
//! through `z = z² + c` until it escapes or an iteration cap is reached,
//! and the number of iterations it survived picks the pixel's color.
//!
//! Every pixel is independent of every other pixel, which makes the
//! arithmetic trivially parallel; the engineering problem is collecting
//! hundreds of thousands of results into one image without races, without
//! holes, and without busy-waiting.  A pool of workers pulls pixel
//! coordinates from a shared queue and lands finished colors in a
//! mutex-guarded sink; joining the pool is the completion barrier, after
//! which the sink audits its write count and surrenders the buffer for
//! encoding.  The same frame comes out no matter how many workers ran.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

pub mod color;
pub mod encode;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;
pub mod sink;

pub use errors::RenderError;
pub use planes::{Pixel, Viewport};
pub use render::Renderer;
pub use sink::{ImageSink, PixelResult};
