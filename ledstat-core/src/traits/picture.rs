//! Picture trait

use heapless::Vec;

use crate::frame::Frame;
use crate::metadata::RendererMetadata;

/// Largest picture that fits the matrix (9 columns by 34 rows)
pub const MAX_PICTURE_LEN: usize = 9 * 34;

/// Row-major brightness bytes of one drawn picture
pub type Pixels = Vec<u8, MAX_PICTURE_LEN>;

/// Something that can be drawn onto the matrix
///
/// `draw` returns exactly `metadata().picture_len()` bytes, one per pixel,
/// row-major with the origin at the top-left corner.
pub trait Picture {
    /// Static descriptor of this picture
    fn metadata(&self) -> RendererMetadata;

    /// Sample the picture's input and render one frame
    fn draw(&mut self) -> Pixels;
}

/// Copy a frame into a picture buffer
///
/// Frames larger than `MAX_PICTURE_LEN` are truncated.
pub fn pixels_from<const WIDTH: usize, const HEIGHT: usize>(frame: &Frame<WIDTH, HEIGHT>) -> Pixels {
    let bytes = frame.as_bytes();
    let len = bytes.len().min(MAX_PICTURE_LEN);
    let mut pixels = Vec::new();
    // Cannot fail, length is bounded above
    let _ = pixels.extend_from_slice(&bytes[..len]);
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{DIM, LIT};

    #[test]
    fn test_pixels_from_frame() {
        let mut frame = Frame::<2, 2>::filled(DIM);
        frame.set(crate::frame::Coord::new(1, 0), LIT);
        let pixels = pixels_from(&frame);
        assert_eq!(pixels.as_slice(), &[DIM, DIM, LIT, DIM]);
    }

    #[test]
    fn test_full_matrix_fits() {
        let frame = Frame::<9, 34>::filled(LIT);
        assert_eq!(pixels_from(&frame).len(), MAX_PICTURE_LEN);
    }
}
