//! Live values of the native controls.
//!
//! Browsers may restore form state on reload or back-forward navigation, so
//! the values the controls show can differ from the ones they were rendered
//! with. [`DomInputs`] reads each control by its field id. A control that is
//! missing, or any read outside the browser, falls back to the render seed.

use shadow::surface::InputSurface;
use shadow::{Field, FieldValue, ShadowParameters};

#[cfg(test)]
#[path = "dom_inputs_test.rs"]
mod dom_inputs_test;

/// Input surface over the `<input id="{field}">` elements of the page.
#[derive(Clone, Debug)]
pub struct DomInputs {
    fallback: ShadowParameters,
}

impl DomInputs {
    pub fn new(fallback: ShadowParameters) -> Self {
        Self { fallback }
    }

    #[cfg(feature = "hydrate")]
    fn live(field: Field) -> Option<FieldValue> {
        use wasm_bindgen::JsCast;

        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(field.as_str()))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())?;
        Some(match field {
            Field::Inset => FieldValue::Flag(input.checked()),
            _ => FieldValue::Text(input.value()),
        })
    }

    #[cfg(not(feature = "hydrate"))]
    fn live(_field: Field) -> Option<FieldValue> {
        None
    }
}

impl InputSurface for DomInputs {
    fn read(&self, field: Field) -> FieldValue {
        Self::live(field).unwrap_or_else(|| self.fallback.get(field))
    }
}
