//! Quarter-turn rotation and axis flips.
//!
//! The editor rotates in 90 degree steps only, so the accumulated angle is
//! normalized to one of four quarter turns before any pixel moves. Flips and
//! quarter turns are exact pixel permutations; no resampling is involved.

use image::imageops;

use crate::decode::EditImage;

/// Normalized clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuarterTurn {
    /// No rotation.
    #[default]
    R0,
    /// 90 degrees clockwise.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees clockwise.
    R270,
}

impl QuarterTurn {
    /// Normalize an accumulated angle to a quarter turn.
    ///
    /// The angle is reduced with a Euclidean remainder, so negative
    /// accumulations (left rotations) land on their clockwise equivalent:
    /// -90 becomes `R270`.
    pub fn from_degrees(degrees: i32) -> Self {
        debug_assert_eq!(degrees % 90, 0, "rotation accumulates in 90 degree steps");
        match degrees.rem_euclid(360) {
            90 => QuarterTurn::R90,
            180 => QuarterTurn::R180,
            270 => QuarterTurn::R270,
            _ => QuarterTurn::R0,
        }
    }

    /// Returns true if this turn swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurn::R90 | QuarterTurn::R270)
    }
}

/// Rotate an image by a quarter turn.
///
/// `R0` returns a copy unchanged; the other turns permute pixels exactly.
pub fn rotate_quarter(image: &EditImage, turn: QuarterTurn) -> EditImage {
    if turn == QuarterTurn::R0 {
        return image.clone();
    }
    let rotated = match image.to_rgba_image() {
        Some(buffer) => match turn {
            QuarterTurn::R0 => buffer,
            QuarterTurn::R90 => imageops::rotate90(&buffer),
            QuarterTurn::R180 => imageops::rotate180(&buffer),
            QuarterTurn::R270 => imageops::rotate270(&buffer),
        },
        // Buffer length mismatch; leave the image untouched
        None => return image.clone(),
    };
    EditImage::from_rgba_image(rotated)
}

/// Mirror an image left-to-right.
pub fn flip_horizontal(image: &EditImage) -> EditImage {
    match image.to_rgba_image() {
        Some(buffer) => EditImage::from_rgba_image(imageops::flip_horizontal(&buffer)),
        None => image.clone(),
    }
}

/// Mirror an image top-to-bottom.
pub fn flip_vertical(image: &EditImage) -> EditImage {
    match image.to_rgba_image() {
        Some(buffer) => EditImage::from_rgba_image(imageops::flip_vertical(&buffer)),
        None => image.clone(),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
