//! Built-in placeholder source image.

use crate::decode::EditImage;
use crate::encode::{encode_png, EncodeError};

/// Placeholder dimensions, landscape like a typical photo.
pub const PLACEHOLDER_WIDTH: u32 = 640;
pub const PLACEHOLDER_HEIGHT: u32 = 400;

/// Generate the placeholder image shown before any upload.
///
/// A deterministic two-axis color gradient. It doubles as the export source
/// when the user saves without uploading a file, so preview and export stay
/// in agreement from the first frame.
pub fn placeholder_image() -> EditImage {
    let mut pixels = Vec::with_capacity((PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT * 4) as usize);
    for y in 0..PLACEHOLDER_HEIGHT {
        for x in 0..PLACEHOLDER_WIDTH {
            let r = (x * 255 / PLACEHOLDER_WIDTH) as u8;
            let g = (y * 255 / PLACEHOLDER_HEIGHT) as u8;
            let b = 255 - ((r as u32 + g as u32) / 2) as u8;
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    EditImage::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, pixels)
}

/// Encode the placeholder as PNG bytes, ready to back an object URL.
pub fn placeholder_png() -> Result<Vec<u8>, EncodeError> {
    let image = placeholder_image();
    encode_png(&image.pixels, image.width, image.height)
}
