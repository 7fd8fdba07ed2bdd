//! The ways a render can fail.  All of them are terminal: the pipeline
//! is deterministic, so retrying any stage would only reproduce the
//! same failure.
use std::io;

/// Everything that can go wrong while producing a frame.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The requested configuration cannot be mapped onto the complex
    /// plane.  Raised by `Viewport::new`, before any pixel is touched.
    #[fail(display = "invalid viewport: {}", _0)]
    InvalidViewport(String),
    /// The completion barrier released before every pixel had landed in
    /// the sink.  Indicates a coordination bug, not a numerical one.
    #[fail(display = "incomplete render: {} of {} pixels written", written, expected)]
    Incomplete {
        /// Cells that actually received a result.
        written: usize,
        /// Cells the viewport calls for.
        expected: usize,
    },
    /// The finished buffer could not be serialized to the destination.
    #[fail(display = "could not encode image: {}", _0)]
    Encoding(#[fail(cause)] io::Error),
}
