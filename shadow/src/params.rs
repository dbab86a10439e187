//! Shadow parameters and the fixed field set that edits them.
//!
//! DESIGN
//! ======
//! Numeric fields keep the text exactly as the input surface produced it:
//! the rule echoes `0.5`, not `0.50` or `5e-1` rewritten by a float
//! formatter. The text is still checked once on entry against the CSS
//! `<number>` syntax so nothing that would break the `<n>px` token can reach
//! the rule.

use std::fmt;
use std::str::FromStr;

use crate::color::HexColor;
use crate::error::ShadowError;

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

/// One of the seven user-editable shadow fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Horizontal,
    Vertical,
    Blur,
    Spread,
    Color,
    Opacity,
    Inset,
}

impl Field {
    /// All fields in rule order.
    pub const ALL: [Field; 7] = [
        Field::Horizontal,
        Field::Vertical,
        Field::Blur,
        Field::Spread,
        Field::Color,
        Field::Opacity,
        Field::Inset,
    ];

    /// Wire identifier used by input events (`"horizontal"`, `"inset"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Blur => "blur",
            Self::Spread => "spread",
            Self::Color => "color",
            Self::Opacity => "opacity",
            Self::Inset => "inset",
        }
    }

    /// Human label for the control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal offset",
            Self::Vertical => "Vertical offset",
            Self::Blur => "Blur radius",
            Self::Spread => "Spread radius",
            Self::Color => "Color",
            Self::Opacity => "Opacity",
            Self::Inset => "Inset",
        }
    }

    /// Whether the field carries a value readout next to its control.
    /// The inset checkbox is its own readout.
    #[must_use]
    pub fn has_readout(self) -> bool {
        self != Self::Inset
    }

    /// Native control the host renders for this field.
    #[must_use]
    pub fn control(self) -> Control {
        match self {
            Self::Horizontal | Self::Vertical => Control::Range(InputRange { min: -100.0, max: 100.0, step: 1.0 }),
            Self::Blur => Control::Range(InputRange { min: 0.0, max: 100.0, step: 1.0 }),
            Self::Spread => Control::Range(InputRange { min: -50.0, max: 50.0, step: 1.0 }),
            Self::Opacity => Control::Range(InputRange { min: 0.0, max: 1.0, step: 0.01 }),
            Self::Color => Control::Color,
            Self::Inset => Control::Checkbox,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ShadowError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == raw)
            .ok_or_else(|| ShadowError::UnknownField(raw.to_owned()))
    }
}

/// Native input kind behind a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    Range(InputRange),
    Color,
    Checkbox,
}

/// Bounds the host applies to a native range input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Value carried by an input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Numeric text for offsets/blur/spread/opacity, hex text for color.
    Text(String),
    /// Checkbox state for the inset field.
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Numeric text as typed, validated to be a finite CSS number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberText {
    text: String,
}

impl NumberText {
    fn parse(field: Field, raw: &str) -> Result<Self, ShadowError> {
        let finite = raw.parse::<f64>().is_ok_and(f64::is_finite);
        if !is_css_number(raw) || !finite {
            return Err(ShadowError::InvalidNumber { field, value: raw.to_owned() });
        }
        Ok(Self { text: raw.to_owned() })
    }

    fn literal(text: &str) -> Self {
        Self { text: text.to_owned() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// `-?(\d+|\d*\.\d+)([eE][+-]?\d+)?`: CSS `<number>` minus the leading `+`.
fn is_css_number(raw: &str) -> bool {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let body = raw.strip_prefix('-').unwrap_or(raw);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => (int.is_empty() || digits(int)) && digits(frac),
        None => digits(mantissa),
    };
    mantissa_ok && exponent.is_none_or(|exp| digits(exp.strip_prefix(['+', '-']).unwrap_or(exp)))
}

impl fmt::Display for NumberText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The complete state of one shadow.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowParameters {
    pub horizontal: NumberText,
    pub vertical: NumberText,
    pub blur: NumberText,
    pub spread: NumberText,
    pub color: HexColor,
    pub opacity: NumberText,
    pub inset: bool,
}

impl Default for ShadowParameters {
    fn default() -> Self {
        Self {
            horizontal: NumberText::literal("0"),
            vertical: NumberText::literal("0"),
            blur: NumberText::literal("0"),
            spread: NumberText::literal("0"),
            color: HexColor::default(),
            opacity: NumberText::literal("1"),
            inset: false,
        }
    }
}

impl ShadowParameters {
    /// Current value of `field` in input-event form.
    #[must_use]
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Horizontal => self.horizontal.as_str().into(),
            Field::Vertical => self.vertical.as_str().into(),
            Field::Blur => self.blur.as_str().into(),
            Field::Spread => self.spread.as_str().into(),
            Field::Color => self.color.as_str().into(),
            Field::Opacity => self.opacity.as_str().into(),
            Field::Inset => FieldValue::Flag(self.inset),
        }
    }

    /// Text shown in the field's readout.
    #[must_use]
    pub fn readout(&self, field: Field) -> String {
        match self.get(field) {
            FieldValue::Text(text) => text,
            FieldValue::Flag(flag) => flag.to_string(),
        }
    }

    /// Validate `value` and write it into `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::ValueMismatch`] when the value kind does not fit
    /// the field, [`ShadowError::InvalidNumber`] or
    /// [`ShadowError::InvalidColorFormat`] when the text does not parse. The
    /// parameters are unchanged on error.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), ShadowError> {
        match (field, value) {
            (Field::Inset, FieldValue::Flag(flag)) => self.inset = flag,
            (Field::Inset, FieldValue::Text(_)) | (_, FieldValue::Flag(_)) => {
                return Err(ShadowError::ValueMismatch { field });
            }
            (Field::Color, FieldValue::Text(text)) => self.color = text.parse()?,
            (Field::Horizontal, FieldValue::Text(text)) => self.horizontal = NumberText::parse(field, &text)?,
            (Field::Vertical, FieldValue::Text(text)) => self.vertical = NumberText::parse(field, &text)?,
            (Field::Blur, FieldValue::Text(text)) => self.blur = NumberText::parse(field, &text)?,
            (Field::Spread, FieldValue::Text(text)) => self.spread = NumberText::parse(field, &text)?,
            (Field::Opacity, FieldValue::Text(text)) => self.opacity = NumberText::parse(field, &text)?,
        }
        Ok(())
    }
}
