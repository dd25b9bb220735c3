//! Live preview styling.
//!
//! The preview is a plain `<img>` element. Pushing an effect onto it only sets
//! the element's CSS `filter` and `transform` properties, so the underlying
//! pixel data is never touched and the same effect can be re-applied any
//! number of times.

use retint_core::EffectDescriptor;
use web_sys::HtmlImageElement;

/// Write the derived effect into the preview element's inline style.
///
/// A missing element (the editor is not mounted yet) makes this a silent
/// no-op, as does a property the browser refuses to set.
pub(crate) fn apply_to_preview(element: Option<&HtmlImageElement>, effect: &EffectDescriptor) {
    if let Some(element) = element {
        let style = element.style();
        let _ = style.set_property("filter", &effect.filter_expression());
        let _ = style.set_property("transform", &effect.transform_expression());
    }
}

/// Browser-only tests: styling needs a real element.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use retint_core::{EditState, RotateDirection};
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
    fn test_apply_writes_both_expressions() {
        let element = image_element();
        let mut state = EditState::new();
        state.rotate(RotateDirection::Right);
        let effect = state.derive_effect();

        apply_to_preview(Some(&element), &effect);

        let style = element.style();
        assert_eq!(
            style.get_property_value("filter").unwrap(),
            effect.filter_expression()
        );
        assert_eq!(
            style.get_property_value("transform").unwrap(),
            effect.transform_expression()
        );
    }

    #[wasm_bindgen_test]
    fn test_apply_overwrites_previous_effect() {
        let element = image_element();
        let mut state = EditState::new();
        state.set_active_value(150);
        apply_to_preview(Some(&element), &state.derive_effect());

        state.reset();
        apply_to_preview(Some(&element), &state.derive_effect());

        assert_eq!(
            element.style().get_property_value("filter").unwrap(),
            "brightness(100%) saturate(100%) invert(0%) grayscale(0%)"
        );
    }

    #[wasm_bindgen_test]
    fn test_missing_element_is_a_no_op() {
        apply_to_preview(None, &EditState::new().derive_effect());
    }
}
