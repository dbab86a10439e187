//! Collaborator traits implemented by the host UI.
//!
//! The controller never touches widgets directly. The host wraps whatever it
//! renders with (reactive signals in the browser, recorders in tests) in
//! these traits and hands them to [`crate::ShadowStateController`].

use std::future::Future;

use crate::error::ShadowError;
use crate::params::{Field, FieldValue, ShadowParameters};

/// Source of the initial field values used to seed the controller.
pub trait InputSurface {
    fn read(&self, field: Field) -> FieldValue;
}

/// A parameter snapshot can seed a controller directly.
impl InputSurface for ShadowParameters {
    fn read(&self, field: Field) -> FieldValue {
        self.get(field)
    }
}

/// Per-field value readouts shown beside each control.
pub trait ReadoutSurface {
    fn show_value(&mut self, field: Field, text: &str);
}

/// The element whose shadow effect previews the current rule.
pub trait PreviewSurface {
    fn apply_shadow(&mut self, rule: &str);
}

/// One textual echo of the current rule.
pub trait TextDisplay {
    fn show_rule(&mut self, rule: &str);
}

/// System clipboard writer.
pub trait ClipboardSink {
    /// Write `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::Clipboard`] when the platform rejects the write.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ShadowError>>;
}

pub type ReadoutHandle = Box<dyn ReadoutSurface + Send + Sync>;
pub type PreviewHandle = Box<dyn PreviewSurface + Send + Sync>;
pub type DisplayHandle = Box<dyn TextDisplay + Send + Sync>;
