// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The orchestrator.  Owns the viewport, fans the pixel grid out across
//! a bounded pool of workers, and collects the finished frame.
//!
//! Distribution is a shared queue: the raster scan lives in one
//! iterator behind a mutex, and each worker repeatedly locks it, takes
//! the next coordinate, and shades it.  Results land in the `ImageSink`
//! as they finish, in whatever order the scheduler produces; the frame
//! comes out identical regardless, because each pixel's color is a pure
//! function of its coordinate.  Joining the scope is the completion
//! barrier: every worker has drained the queue and every submission
//! has been applied before `finish` runs its audit.

extern crate crossbeam;
extern crate itertools;

use std::ops::Range;
use std::sync::{Arc, Mutex};

use itertools::iproduct;

use color::color_of;
use errors::RenderError;
use escape::escape_count;
use planes::{Pixel, Viewport};
use sink::{ImageSink, PixelResult};

type PixelQueue = Arc<Mutex<itertools::Product<Range<usize>, Range<usize>>>>;

/// Renders one frame of the viewport it was built with.
pub struct Renderer {
    viewport: Viewport,
}

impl Renderer {
    /// Takes a validated viewport.  Construction cannot fail; all the
    /// fallible checking happened in `Viewport::new`.
    pub fn new(viewport: Viewport) -> Renderer {
        Renderer { viewport }
    }

    /// The settings this renderer was built with.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Computes the color of a single pixel: the pixel task.  A pixel
    /// whose mapped coordinates come out non-finite takes the interior
    /// color instead of aborting the render; one bad pixel must never
    /// cost the other 639,999.  That cannot happen with a viewport that
    /// passed validation, so the occurrence is logged as a warning.
    fn shade(&self, pixel: Pixel) -> PixelResult {
        let point = self.viewport.pixel_to_point(&pixel);
        if !point.re.is_finite() || !point.im.is_finite() {
            warn!(
                "pixel {:?} mapped to the non-finite point {}; substituting the interior color",
                pixel, point
            );
            return PixelResult {
                pixel,
                rgb: [0, 0, 0],
            };
        }
        let iters = escape_count(point, self.viewport.iterations);
        PixelResult {
            pixel,
            rgb: color_of(iters, self.viewport.iterations),
        }
    }

    /// Single-threaded render: a plain raster scan.  The reference that
    /// the parallel path is tested against for bit-identical output.
    pub fn render_single(&self) -> Result<Vec<u8>, RenderError> {
        let sink = ImageSink::new(self.viewport.width, self.viewport.height);
        for column in 0..self.viewport.width {
            for row in 0..self.viewport.height {
                sink.submit(self.shade(Pixel(column, row)));
            }
        }
        sink.finish()
    }

    /// Parallel render on a bounded pool of `threads` workers.  A
    /// thread count of zero renders on one worker.  Blocks until every
    /// pixel has been computed and applied, then surrenders the
    /// completed buffer.
    pub fn render(&self, threads: usize) -> Result<Vec<u8>, RenderError> {
        let threads = if threads == 0 { 1 } else { threads };
        let sink = ImageSink::new(self.viewport.width, self.viewport.height);
        {
            let sink = &sink;
            let pixels: PixelQueue = Arc::new(Mutex::new(iproduct!(
                0..self.viewport.width,
                0..self.viewport.height
            )));
            crossbeam::scope(|spawner| {
                for _ in 0..threads {
                    let pixels = pixels.clone();
                    spawner.spawn(move |_| loop {
                        let pixel = { pixels.lock().unwrap().next() };
                        match pixel {
                            Some((column, row)) => {
                                sink.submit(self.shade(Pixel(column, row)));
                            }
                            None => {
                                break;
                            }
                        }
                    });
                }
            })
            .unwrap();
        }
        sink.finish()
    }
}
