//! Pixel filter chain for export rendering.
//!
//! Applies the four filters to RGBA pixel data with the same math the
//! browser uses to render the preview's CSS `filter` value, so the exported
//! file matches what the user sees.
//!
//! ## Filter Order
//! 1. Brightness
//! 2. Saturation
//! 3. Inversion
//! 4. Grayscale

use crate::FilterSettings;

/// ITU-R BT.709 luminance coefficients, used by the grayscale filter.
pub const LUMINANCE_R: f32 = 0.2126;
pub const LUMINANCE_G: f32 = 0.7152;
pub const LUMINANCE_B: f32 = 0.0722;

/// Luminance coefficients of the saturate color matrix.
/// Truncated to three decimals, as the matrix defines them.
pub const SATURATE_R: f32 = 0.213;
pub const SATURATE_G: f32 = 0.715;
pub const SATURATE_B: f32 = 0.072;

/// Apply all filters to an image's pixel data in place.
///
/// Color math runs on non-premultiplied sRGB channels; the alpha byte of
/// every pixel passes through untouched.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `filters` - The filter values to apply
///
/// # Example
/// ```
/// use retint_core::{FilterSettings, filters::apply_filters};
///
/// let mut pixels = vec![200, 100, 50, 255]; // Single RGBA pixel
/// let mut filters = FilterSettings::default();
/// filters.grayscale = 100;
///
/// apply_filters(&mut pixels, &filters);
/// // All three color channels now equal the pixel's luminance
/// assert_eq!(pixels[0], pixels[1]);
/// assert_eq!(pixels[1], pixels[2]);
/// ```
pub fn apply_filters(pixels: &mut [u8], filters: &FilterSettings) {
    // Early exit if every filter is neutral
    if filters.is_default() {
        return;
    }

    let brightness = filters.brightness as f32 / 100.0;
    let saturation = filters.saturation as f32 / 100.0;
    let inversion = filters.inversion as f32 / 100.0;
    let grayscale = filters.grayscale as f32 / 100.0;

    for chunk in pixels.chunks_exact_mut(4) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        // Apply filters in composition order
        (r, g, b) = apply_brightness(r, g, b, brightness);
        (r, g, b) = apply_saturate(r, g, b, saturation);
        (r, g, b) = apply_invert(r, g, b, inversion);
        (r, g, b) = apply_grayscale(r, g, b, grayscale);

        chunk[0] = (r * 255.0).round() as u8;
        chunk[1] = (g * 255.0).round() as u8;
        chunk[2] = (b * 255.0).round() as u8;
    }
}

/// Clamp a channel triple to the unit interval.
///
/// Each filter stage clamps its result before the next stage reads it,
/// the same boundary behavior the browser's filter primitives have.
#[inline]
fn clamp_unit(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

/// Apply the brightness filter.
///
/// Amount is a linear multiplier (1.0 is neutral, 0.0 is black,
/// 2.0 doubles every channel).
///
/// Formula: `output = input * amount`
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    clamp_unit(r * amount, g * amount, b * amount)
}

/// Apply the saturate filter.
///
/// Amount 1.0 is neutral, 0.0 fully desaturates, values above 1.0
/// oversaturate. Each channel is interpolated against the pixel's
/// luminance as the saturate color matrix defines it.
#[inline]
fn apply_saturate(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 1.0 {
        return (r, g, b);
    }
    let gray = SATURATE_R * r + SATURATE_G * g + SATURATE_B * b;
    clamp_unit(
        gray + (r - gray) * amount,
        gray + (g - gray) * amount,
        gray + (b - gray) * amount,
    )
}

/// Apply the invert filter.
///
/// Amount 0.0 is neutral, 1.0 flips every channel, 0.5 collapses the
/// image to mid-gray.
///
/// Formula: `output = amount + input * (1 - 2 * amount)`
#[inline]
fn apply_invert(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 0.0 {
        return (r, g, b);
    }
    let span = 1.0 - 2.0 * amount;
    clamp_unit(amount + r * span, amount + g * span, amount + b * span)
}

/// Apply the grayscale filter.
///
/// Amount 0.0 is neutral, 1.0 collapses each pixel to its BT.709
/// luminance.
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 0.0 {
        return (r, g, b);
    }
    let gray = LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b;
    let keep = 1.0 - amount;
    clamp_unit(
        gray + (r - gray) * keep,
        gray + (g - gray) * keep,
        gray + (b - gray) * keep,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
