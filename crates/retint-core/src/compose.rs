//! Export rendering pipeline.
//!
//! Reproduces offscreen what the browser composites on the preview surface:
//! the axis flips act first, then the quarter-turn rotation, then the filter
//! chain runs over the turned pixels, and finally the result is framed at
//! the source's native dimensions.
//!
//! The frame never changes size. A 90 or 270 degree turn of a non-square
//! image therefore clips the overhanging content, and the area the turned
//! image no longer covers stays transparent.

use crate::decode::EditImage;
use crate::effect::EffectDescriptor;
use crate::filters::apply_filters;
use crate::transform::{self, QuarterTurn};

/// Render the effect onto a copy of the source image.
///
/// The output has exactly the source's dimensions regardless of rotation.
///
/// # Arguments
///
/// * `source` - Decoded source image at its native dimensions
/// * `effect` - The effect to apply
///
/// # Returns
///
/// A new `EditImage` carrying the fully composed pixels.
pub fn render(source: &EditImage, effect: &EffectDescriptor) -> EditImage {
    // Identity effects need no pixel work
    if source.is_empty() || effect.is_identity() {
        return source.clone();
    }

    // Flips act in image space before the rotation turns the result, the
    // same order the preview's transform list applies in
    let mut image = source.clone();
    if effect.scale_x < 0 {
        image = transform::flip_horizontal(&image);
    }
    if effect.scale_y < 0 {
        image = transform::flip_vertical(&image);
    }

    let turn = QuarterTurn::from_degrees(effect.rotation);
    image = transform::rotate_quarter(&image, turn);

    // A browser filter touches only the drawn image, never the rest of the
    // canvas, so the chain runs before framing and the uncovered frame area
    // stays all zero
    apply_filters(&mut image.pixels, &effect.filter_settings());

    center_into(&image, source.width, source.height)
}

/// Fit an image into a fixed frame, centered.
///
/// The frame keeps `frame_width` x `frame_height` regardless of the image's
/// size: content larger than the frame is clipped at the edges, smaller
/// content is surrounded by transparent pixels. Off-center remainders of odd
/// size differences round toward the top-left.
pub fn center_into(image: &EditImage, frame_width: u32, frame_height: u32) -> EditImage {
    if image.width == frame_width && image.height == frame_height {
        return image.clone();
    }

    let mut output = vec![0u8; (frame_width * frame_height * 4) as usize];

    // Placement offset of the image's top-left corner inside the frame,
    // negative when the image overhangs the frame on that axis
    let offset_x = (frame_width as i64 - image.width as i64) / 2;
    let offset_y = (frame_height as i64 - image.height as i64) / 2;

    let dst_x = offset_x.max(0) as u32;
    let dst_y = offset_y.max(0) as u32;
    let src_x = (-offset_x).max(0) as u32;
    let src_y = (-offset_y).max(0) as u32;

    let copy_width = (frame_width - dst_x).min(image.width - src_x);
    let copy_height = (frame_height - dst_y).min(image.height - src_y);

    // Copy the overlapping region row by row
    for y in 0..copy_height {
        let src_start = (((src_y + y) * image.width + src_x) * 4) as usize;
        let dst_start = (((dst_y + y) * frame_width + dst_x) * 4) as usize;
        let len = (copy_width * 4) as usize;
        output[dst_start..dst_start + len]
            .copy_from_slice(&image.pixels[src_start..src_start + len]);
    }

    EditImage::new(frame_width, frame_height, output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
