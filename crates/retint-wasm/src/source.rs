//! Source image handles.
//!
//! A loaded image lives in the browser as a blob-backed object URL. The handle
//! owns both the raw file bytes (consumed by the export pipeline) and the URL
//! (consumed by the preview element), and revokes the URL when dropped so
//! repeated uploads do not accumulate blobs in browser memory.

use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// An owned reference to one image's bytes and their object URL.
///
/// Exactly one handle is live per editor at a time. Assigning a replacement
/// drops the previous handle, which revokes its URL, so the old blob becomes
/// collectable before the new one is shown.
pub(crate) struct SourceHandle {
    url: String,
    bytes: Vec<u8>,
}

impl SourceHandle {
    /// Wrap the bytes in a blob of the given MIME type and mint an object URL
    /// for it.
    pub(crate) fn new(bytes: Vec<u8>, mime: &str) -> Result<SourceHandle, JsValue> {
        let chunk = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::of1(&chunk);
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;
        Ok(SourceHandle { url, bytes })
    }

    /// The object URL, usable as an image element's `src`.
    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    /// The raw file bytes the handle was created from.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for SourceHandle {
    fn drop(&mut self) {
        // The browser keeps the blob alive for as long as the URL is valid.
        let _ = Url::revoke_object_url(&self.url);
    }
}
