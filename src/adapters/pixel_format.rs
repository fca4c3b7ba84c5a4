//! Pixel format conversion for presentation surfaces.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "RGBA frame holds {} bytes, raster needs {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies an RGB raster into an opaque RGBA frame of the same pixel size.
pub fn copy_pixel_buffer_to_rgba(
    buffer: &PixelBuffer,
    dst: &mut [u8],
) -> Result<(), PixelFormatError> {
    let expected = buffer.pixel_rect().size() as usize * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::SizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in buffer.buffer().chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn copies_rgb_and_sets_opaque_alpha() {
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let buffer = PixelBuffer::from_data(
            pixel_rect,
            vec![
                255, 0, 0, // red
                0, 255, 0, // green
                0, 0, 255, // blue
                255, 255, 255, // white
            ],
        )
        .unwrap();
        let mut dst = vec![0; 16];

        copy_pixel_buffer_to_rgba(&buffer, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn rejects_frame_of_wrong_size() {
        let buffer = PixelBuffer::from_data(PixelRect::new(3, 3).unwrap(), vec![0; 27]).unwrap();
        let mut dst = vec![0; 12];

        assert_eq!(
            copy_pixel_buffer_to_rgba(&buffer, &mut dst),
            Err(PixelFormatError::SizeMismatch {
                expected: 36,
                actual: 12
            })
        );
    }
}
