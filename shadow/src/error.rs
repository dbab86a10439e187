//! Error type shared by the shadow core.

use crate::params::Field;

/// Error returned when an input event cannot be applied.
///
/// Every variant leaves the controller's parameters and rendered rule
/// exactly as they were before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShadowError {
    /// The field identifier is not one of the seven known fields.
    #[error("unknown shadow field: {0:?}")]
    UnknownField(String),
    /// The color is not a `#RRGGBB` hex string.
    #[error("invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),
    /// A numeric field received text that is not a finite number.
    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: Field, value: String },
    /// A text value was sent to the inset flag, or a flag to a text field.
    #[error("value kind does not match field {field}")]
    ValueMismatch { field: Field },
    /// An update arrived before the controller was initialized.
    #[error("controller has not been initialized")]
    NotInitialized,
    /// The clipboard sink rejected the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}
