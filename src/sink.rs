//! The image sink: the one piece of shared mutable state in the whole
//! render.  Any number of workers may submit finished pixels in any
//! order; each submission is a single four-byte replace under a mutex,
//! and the sink counts distinct cells so the orchestrator can prove the
//! frame is complete before handing it to the encoder.
use std::sync::Mutex;

use errors::RenderError;
use planes::Pixel;

/// One finished pixel: where it goes and what color it is.  Produced
/// exactly once per pixel by a worker, consumed by the sink, discarded.
#[derive(Copy, Clone, Debug)]
pub struct PixelResult {
    /// The target cell in the image.
    pub pixel: Pixel,
    /// Red, green and blue channels.  Alpha is implicit: every written
    /// cell is fully opaque.
    pub rgb: [u8; 3],
}

/// A write-only RGBA frame under construction.  The buffer starts
/// zeroed, and a zero alpha marks a cell no result has reached yet;
/// submissions set alpha to 255, so the alpha channel doubles as the
/// coverage ledger.
pub struct ImageSink {
    width: usize,
    height: usize,
    frame: Mutex<Frame>,
}

struct Frame {
    pixels: Vec<u8>,
    written: usize,
}

impl ImageSink {
    /// Allocates a zeroed frame for a grid of the given size.
    pub fn new(width: usize, height: usize) -> ImageSink {
        ImageSink {
            width,
            height,
            frame: Mutex::new(Frame {
                pixels: vec![0; width * height * 4],
                written: 0,
            }),
        }
    }

    /// Applies one result to the frame.  The critical section is as
    /// short as it can be: one bounds-checked cell replace and a
    /// counter bump.  A cell is counted the first time it is written;
    /// re-submitting the same pixel overwrites it without recounting.
    pub fn submit(&self, result: PixelResult) {
        let Pixel(column, row) = result.pixel;
        assert!(
            column < self.width && row < self.height,
            "pixel {},{} outside the {}x{} frame",
            column,
            row,
            self.width,
            self.height
        );
        let offset = (row * self.width + column) * 4;
        let mut frame = self.frame.lock().unwrap();
        if frame.pixels[offset + 3] == 0 {
            frame.written += 1;
        }
        frame.pixels[offset..offset + 4]
            .copy_from_slice(&[result.rgb[0], result.rgb[1], result.rgb[2], 255]);
    }

    /// Consumes the sink and surrenders the finished buffer.  Fails if
    /// any cell never received a result; a frame that passes this audit
    /// is complete and immutable from here on.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let frame = self.frame.into_inner().unwrap();
        let expected = self.width * self.height;
        if frame.written != expected {
            return Err(RenderError::Incomplete {
                written: frame.written,
                expected,
            });
        }
        Ok(frame.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submissions_land_in_the_right_cell() {
        let sink = ImageSink::new(3, 2);
        for column in 0..3 {
            for row in 0..2 {
                sink.submit(PixelResult {
                    pixel: Pixel(column, row),
                    rgb: [column as u8, row as u8, 9],
                });
            }
        }
        let pixels = sink.finish().unwrap();
        assert_eq!(pixels.len(), 3 * 2 * 4);
        // Cell (1, 0) sits at offset 4 in row-major RGBA.
        assert_eq!(&pixels[4..8], &[1, 0, 9, 255]);
        // Cell (2, 1) is the last cell.
        assert_eq!(&pixels[20..24], &[2, 1, 9, 255]);
    }

    #[test]
    fn finish_rejects_an_incomplete_frame() {
        let sink = ImageSink::new(2, 2);
        sink.submit(PixelResult {
            pixel: Pixel(0, 0),
            rgb: [1, 2, 3],
        });
        match sink.finish() {
            Err(RenderError::Incomplete { written, expected }) => {
                assert_eq!(written, 1);
                assert_eq!(expected, 4);
            }
            other => panic!("expected an incomplete-render error, got {:?}", other),
        }
    }

    #[test]
    fn resubmission_overwrites_without_recounting() {
        let sink = ImageSink::new(1, 1);
        sink.submit(PixelResult {
            pixel: Pixel(0, 0),
            rgb: [1, 1, 1],
        });
        sink.submit(PixelResult {
            pixel: Pixel(0, 0),
            rgb: [7, 8, 9],
        });
        let pixels = sink.finish().unwrap();
        assert_eq!(pixels, vec![7, 8, 9, 255]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_submissions_panic() {
        let sink = ImageSink::new(2, 2);
        sink.submit(PixelResult {
            pixel: Pixel(2, 0),
            rgb: [0, 0, 0],
        });
    }
}
