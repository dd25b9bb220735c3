//! The interactive editor component.
//!
//! `ImageEditor` ties the crate together: state lives in
//! `retint_core::EditState`, the live preview reflects it through CSS
//! expressions, and the export path bakes the same effect into PNG bytes for
//! download.

use retint_core::placeholder::placeholder_png;
use retint_core::{EditState, FilterKind, FlipAxis, RotateDirection};
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

use crate::export::{render_png_bytes, trigger_download};
use crate::preview::apply_to_preview;
use crate::source::SourceHandle;

/// Interactive image editor for JavaScript.
///
/// Owns the full editing state for one image: the four filter values, the
/// accumulated rotation and flips, which filter the value slider edits, and
/// the handle to the loaded source bytes. Every mutation re-derives the
/// effect and pushes it onto the attached preview element; export renders the
/// same effect into a PNG so the download matches the preview.
///
/// # Lifecycle
///
/// The editor keeps exactly one object URL alive for the current source.
/// Loading a replacement revokes the previous URL, and calling `free()` from
/// JavaScript (or letting the wasm-bindgen finalizer run) revokes the last
/// one.
#[wasm_bindgen]
pub struct ImageEditor {
    state: EditState,
    source: Option<SourceHandle>,
    preview: Option<HtmlImageElement>,
}

#[wasm_bindgen]
impl ImageEditor {
    /// Create an editor with default settings and no image loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: EditState::new(),
            source: None,
            preview: None,
        }
    }

    /// Attach the `<img>` element used for the live preview.
    ///
    /// If no image has been loaded yet, the bundled placeholder is generated
    /// and shown so the editor never presents an empty surface.
    pub fn attach_preview(&mut self, element: HtmlImageElement) {
        self.preview = Some(element);
        if self.source.is_none() {
            match placeholder_png() {
                Ok(bytes) => self.install_source(bytes, "image/png"),
                Err(e) => warn(&format!("placeholder unavailable: {e}")),
            }
        } else {
            self.refresh_source();
        }
        self.refresh_preview();
    }

    /// Load a user-supplied image file.
    ///
    /// Empty input (the user cancelled the picker) is a no-op and the prior
    /// image is kept. Bytes that do not decode are still installed so the
    /// preview shows the browser's native broken-image state, but the failure
    /// is logged.
    pub fn load_source(&mut self, bytes: Vec<u8>, mime: &str) {
        if bytes.is_empty() {
            return;
        }
        if let Err(e) = retint_core::decode_image(&bytes) {
            warn(&format!("loaded image does not decode: {e}"));
        }
        self.install_source(bytes, mime);
    }

    /// Make `name` the filter the value slider edits.
    ///
    /// Unknown names are ignored and logged.
    pub fn select_filter(&mut self, name: &str) {
        match FilterKind::from_name(name) {
            Some(kind) => self.state.select_filter(kind),
            None => warn(&format!("unknown filter name: {name}")),
        }
    }

    /// Name of the filter the value slider edits
    #[wasm_bindgen(getter)]
    pub fn active_filter(&self) -> String {
        self.state.active.name().to_string()
    }

    /// Value of the active filter, in percent
    #[wasm_bindgen(getter)]
    pub fn active_value(&self) -> u32 {
        self.state.active_value()
    }

    /// Set the value of the active filter, in percent
    #[wasm_bindgen(setter)]
    pub fn set_active_value(&mut self, value: u32) {
        self.state.set_active_value(value);
        self.refresh_preview();
    }

    /// Maximum value of the active filter, in percent
    #[wasm_bindgen(getter)]
    pub fn active_max(&self) -> u32 {
        self.state.active_max()
    }

    /// Rotate the image 90 degrees counter-clockwise
    pub fn rotate_left(&mut self) {
        self.state.rotate(RotateDirection::Left);
        self.refresh_preview();
    }

    /// Rotate the image 90 degrees clockwise
    pub fn rotate_right(&mut self) {
        self.state.rotate(RotateDirection::Right);
        self.refresh_preview();
    }

    /// Mirror the image left-to-right
    pub fn flip_horizontal(&mut self) {
        self.state.flip(FlipAxis::Horizontal);
        self.refresh_preview();
    }

    /// Mirror the image top-to-bottom
    pub fn flip_vertical(&mut self) {
        self.state.flip(FlipAxis::Vertical);
        self.refresh_preview();
    }

    /// Restore every filter value and the transform state in one step.
    /// The active filter selection is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.refresh_preview();
    }

    /// Check if filters and transform are all at their defaults
    pub fn is_default(&self) -> bool {
        self.state.is_default()
    }

    /// The CSS filter expression for the current state
    pub fn filter_expression(&self) -> String {
        self.state.derive_effect().filter_expression()
    }

    /// The CSS transform expression for the current state
    pub fn transform_expression(&self) -> String {
        self.state.derive_effect().transform_expression()
    }

    /// Render the loaded image with the current effect and return the PNG
    /// bytes.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        match self.source.as_ref() {
            Some(source) => render_png_bytes(source.bytes(), &self.state.derive_effect())
                .map_err(|e| JsValue::from_str(&e)),
            None => Err(JsValue::from_str("no image loaded")),
        }
    }

    /// Render the loaded image and offer it to the user as `image.png`.
    ///
    /// Failures are logged and swallowed; the editor state is never touched.
    pub fn download(&self) {
        let source = match self.source.as_ref() {
            Some(source) => source,
            None => return,
        };
        match render_png_bytes(source.bytes(), &self.state.derive_effect()) {
            Ok(png) => {
                if let Err(e) = trigger_download(&png) {
                    warn(&format!("download failed: {e:?}"));
                }
            }
            Err(e) => warn(&format!("export failed: {e}")),
        }
    }

    /// Serialize the full editor state to a plain JavaScript object
    pub fn settings_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for ImageEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageEditor {
    /// Install a new source handle. Assigning drops the previous handle,
    /// which revokes its URL.
    fn install_source(&mut self, bytes: Vec<u8>, mime: &str) {
        match SourceHandle::new(bytes, mime) {
            Ok(handle) => {
                self.source = Some(handle);
                self.refresh_source();
            }
            Err(_) => warn("could not create an object URL for the image"),
        }
    }

    /// Point the preview element at the current source.
    fn refresh_source(&self) {
        if let (Some(preview), Some(source)) = (self.preview.as_ref(), self.source.as_ref()) {
            preview.set_src(source.url());
        }
    }

    /// Re-derive the effect and push it onto the preview element.
    fn refresh_preview(&self) {
        apply_to_preview(self.preview.as_ref(), &self.state.derive_effect());
    }
}

/// Names of the editable filters, in the order the UI lists them.
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    FilterKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}


/// Browser-only tests for the DOM and JsValue surfaces.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use retint_core::placeholder::placeholder_png;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn image_element() -> HtmlImageElement {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("img")
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_attach_preview_shows_placeholder() {
        let element = image_element();
        let mut editor = ImageEditor::new();
        editor.attach_preview(element.clone());

        assert!(element.src().starts_with("blob:"));
        assert_eq!(
            element.style().get_property_value("filter").unwrap(),
            "brightness(100%) saturate(100%) invert(0%) grayscale(0%)"
        );
    }

    #[wasm_bindgen_test]
    fn test_load_source_replaces_placeholder() {
        let element = image_element();
        let mut editor = ImageEditor::new();
        editor.attach_preview(element.clone());
        let placeholder_src = element.src();

        editor.load_source(placeholder_png().unwrap(), "image/png");
        assert!(element.src().starts_with("blob:"));
        assert_ne!(element.src(), placeholder_src);
    }

    #[wasm_bindgen_test]
    fn test_empty_load_keeps_prior_source() {
        let element = image_element();
        let mut editor = ImageEditor::new();
        editor.attach_preview(element.clone());
        let before = element.src();

        editor.load_source(Vec::new(), "image/png");
        assert_eq!(element.src(), before);
    }

    #[wasm_bindgen_test]
    fn test_mutations_restyle_preview() {
        let element = image_element();
        let mut editor = ImageEditor::new();
        editor.attach_preview(element.clone());

        editor.rotate_right();
        editor.flip_horizontal();
        assert_eq!(
            element.style().get_property_value("transform").unwrap(),
            "rotate(90deg) scaleX(-1) scaleY(1)"
        );
    }

    #[wasm_bindgen_test]
    fn test_export_png_round_trip() {
        let mut editor = ImageEditor::new();
        editor.load_source(placeholder_png().unwrap(), "image/png");

        let png = editor.export_png().unwrap();
        assert_eq!(&png[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[wasm_bindgen_test]
    fn test_export_png_without_source_errors() {
        let editor = ImageEditor::new();
        assert!(editor.export_png().is_err());
    }

    #[wasm_bindgen_test]
    fn test_unknown_filter_name_is_ignored() {
        let mut editor = ImageEditor::new();
        editor.select_filter("sepia");
        assert_eq!(editor.active_filter(), "brightness");
    }

    #[wasm_bindgen_test]
    fn test_settings_json_round_trips() {
        let mut editor = ImageEditor::new();
        editor.select_filter("saturation");
        editor.set_active_value(130);

        let value = editor.settings_json().unwrap();
        let state: EditState = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(state.filters.saturation, 130);
    }
}
