//! Retint WASM - WebAssembly bindings for Retint
//!
//! This crate exposes the retint-core editing model to JavaScript/TypeScript
//! applications: an `ImageEditor` component that owns filter and transform
//! state, drives a live `<img>` preview through CSS expressions, and exports
//! the edited image as a PNG download.
//!
//! # Module Structure
//!
//! - `editor` - The `ImageEditor` component (state, preview, load, export)
//! - `export` - PNG rendering and the download-anchor plumbing
//! - `preview` - Pushing derived effects onto the preview element's style
//! - `source` - Object-URL handles for loaded image bytes
//!
//! # Usage
//!
//! ```typescript
//! import init, { ImageEditor } from '@retint/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new ImageEditor();
//! editor.attach_preview(document.querySelector('img.preview'));
//!
//! // Load a user-picked file
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! editor.load_source(bytes, file.type);
//!
//! // Edit and save
//! editor.select_filter('brightness');
//! editor.active_value = 150;
//! editor.rotate_right();
//! editor.download();  // saves image.png
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod export;
mod preview;
mod source;

// Re-export public types
pub use editor::{filter_names, ImageEditor};
pub use export::render_png;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
