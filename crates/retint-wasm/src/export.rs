//! Export pipeline bindings.
//!
//! Rendering happens entirely in WASM memory: decode the stored source bytes,
//! bake the current effect into the pixels, and encode the result as a PNG.
//! The download step then hands those bytes to the browser as a one-shot
//! object URL attached to a synthetic anchor click.

use retint_core::{decode_image, derive_effect, encode_png, render, EffectDescriptor};
use retint_core::{FilterSettings, TransformSettings};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::source::SourceHandle;

/// File name every download is saved under.
pub(crate) const EXPORT_FILE_NAME: &str = "image.png";

/// Render source file bytes with the given effect and encode the result as a
/// PNG.
///
/// The output keeps the source's native pixel dimensions. Rotated content that
/// falls outside that frame is clipped, and corners the rotated image no
/// longer covers come out transparent.
pub(crate) fn render_png_bytes(bytes: &[u8], effect: &EffectDescriptor) -> Result<Vec<u8>, String> {
    let source = decode_image(bytes).map_err(|e| e.to_string())?;
    let rendered = render(&source, effect);
    encode_png(&rendered.pixels, rendered.width, rendered.height).map_err(|e| e.to_string())
}

/// Render image file bytes to a PNG with explicit filter and transform values.
///
/// This is the standalone counterpart of `ImageEditor.export_png` for callers
/// that manage their own state.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
/// * `brightness` - Brightness percentage (0-200, 100 is neutral)
/// * `saturation` - Saturation percentage (0-200, 100 is neutral)
/// * `inversion` - Inversion percentage (0-100, 0 is neutral)
/// * `grayscale` - Grayscale percentage (0-100, 0 is neutral)
/// * `rotation` - Rotation in degrees, a multiple of 90 (negative turns left)
/// * `flip_horizontal` - Mirror left-to-right
/// * `flip_vertical` - Mirror top-to-bottom
///
/// # Returns
///
/// A `Uint8Array` containing the PNG-encoded result at the source's native
/// dimensions, or an error if the bytes do not decode or encoding fails.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const png = render_png(bytes, 150, 100, 0, 0, 90, false, false);
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_png(
    bytes: &[u8],
    brightness: u32,
    saturation: u32,
    inversion: u32,
    grayscale: u32,
    rotation: i32,
    flip_horizontal: bool,
    flip_vertical: bool,
) -> Result<Vec<u8>, JsValue> {
    let filters = FilterSettings {
        brightness,
        saturation,
        inversion,
        grayscale,
    };
    let transform = TransformSettings {
        rotation,
        flip_horizontal,
        flip_vertical,
    };
    let effect = derive_effect(&filters, &transform);
    render_png_bytes(bytes, &effect).map_err(|e| JsValue::from_str(&e))
}

/// Offer the bytes to the user as a file download.
///
/// Mints a temporary object URL for the bytes and clicks a synthetic anchor
/// pointing at it. The URL is revoked as soon as the click has been
/// dispatched; by then the browser has already started the download.
pub(crate) fn trigger_download(bytes: &[u8]) -> Result<(), JsValue> {
    let handle = SourceHandle::new(bytes.to_vec(), "image/png")?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(handle.url());
    anchor.set_download(EXPORT_FILE_NAME);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
