//! Contains the Viewport struct, which describes the relationship
//! between the integral pixel plane with an origin at 0,0 and a square
//! region of the complex plane, along with the affine rescale that does
//! the actual mapping.  The viewport is built once, validated once, and
//! then shared read-only by every worker for the life of a render.
use num::Complex;

use errors::RenderError;

/// Linearly rescales `value` from the range `in_min..in_max` onto the
/// range `out_min..out_max`.  The workhorse of the whole crate: it maps
/// pixel columns and rows onto the complex plane, and iteration counts
/// onto color channels.  Callers must guarantee a non-degenerate source
/// range; dividing by a zero-width range would quietly produce
/// infinities, and `Viewport::new` is the gate that rejects such
/// configurations before any arithmetic happens.
pub fn map_to_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    debug_assert!(in_max != in_min, "degenerate source range");
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Describes the column, row of a pixel in the image.  Column and row
/// are bounded by the viewport's width and height respectively.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The settings of a single render: the size of the pixel grid, the
/// region of the complex plane it maps onto, the iteration cap, and an
/// optional center offset.  Both axes map onto the same `min..max`
/// range, even for non-square images; the offset is subtracted from the
/// mapped point, which pans the viewport without rescaling it.
#[derive(Copy, Clone, Debug)]
pub struct Viewport {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
    /// The plane coordinate that column 0 and row 0 map onto.
    pub min: f64,
    /// The plane coordinate that the far edges map onto.
    pub max: f64,
    /// Orbits that survive this many iterations count as interior.
    pub iterations: usize,
    /// Pan offset, subtracted from every mapped point.
    pub center: Complex<f64>,
}

impl Viewport {
    /// Constructor.  Rejects every configuration that would poison the
    /// per-pixel arithmetic downstream: zero-sized grids, inverted,
    /// degenerate or non-finite plane ranges, a non-finite center, and
    /// a zero iteration cap.
    pub fn new(
        width: usize,
        height: usize,
        min: f64,
        max: f64,
        iterations: usize,
        center: Complex<f64>,
    ) -> Result<Viewport, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport(
                "image dimensions must be nonzero".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(RenderError::InvalidViewport(
                "plane bounds must be finite".to_string(),
            ));
        }
        if min >= max {
            return Err(RenderError::InvalidViewport(format!(
                "plane minimum {} is not below plane maximum {}",
                min, max
            )));
        }
        if !center.re.is_finite() || !center.im.is_finite() {
            return Err(RenderError::InvalidViewport(
                "center offset must be finite".to_string(),
            ));
        }
        if iterations == 0 {
            return Err(RenderError::InvalidViewport(
                "iteration cap must be nonzero".to_string(),
            ));
        }
        Ok(Viewport {
            width,
            height,
            min,
            max,
            iterations,
            center,
        })
    }

    /// Given a pixel on the integral plane, return the complex number
    /// its orbit starts from: column and row are rescaled onto the
    /// plane range, then the center offset is subtracted.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            map_to_range(pixel.0 as f64, 0.0, self.width as f64, self.min, self.max)
                - self.center.re,
            map_to_range(pixel.1 as f64, 0.0, self.height as f64, self.min, self.max)
                - self.center.im,
        )
    }

    /// The total number of pixels in the grid.  Used to size the image
    /// buffer and to audit completion.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid holds no pixels at all.  Never true for a
    /// viewport that came out of `new`.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
