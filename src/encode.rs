//! Serializes a finished frame.  The renderer hands this module a
//! complete, immutable RGBA buffer; everything upstream is agnostic to
//! where the bytes end up, so the destination is any `io::Write`.
use std::io::Write;

use image::png::PNGEncoder;
use image::ColorType;

use errors::RenderError;

/// Encodes the RGBA buffer of a `width` by `height` frame as PNG and
/// writes it to `out`.  Failures surface as `RenderError::Encoding`;
/// the pipeline is deterministic, so nobody retries them.
pub fn write_png<W: Write>(
    out: W,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<(), RenderError> {
    let encoder = PNGEncoder::new(out);
    encoder
        .encode(pixels, width as u32, height as u32, ColorType::RGBA(8))
        .map_err(RenderError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn writes_a_png_signature() {
        let mut out = Vec::new();
        write_png(&mut out, &[255, 0, 0, 255], 1, 1).unwrap();
        assert_eq!(
            &out[..8],
            &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]
        );
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "destination refused"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn destination_failures_surface_as_encoding_errors() {
        match write_png(BrokenWriter, &[0, 0, 0, 255], 1, 1) {
            Err(RenderError::Encoding(_)) => {}
            other => panic!("expected an encoding error, got {:?}", other),
        }
    }
}
