//! `#RRGGBB` color parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ShadowError;

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Decoded RGB channels, each `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// A validated `#RRGGBB` color.
///
/// Keeps the text exactly as the input surface produced it (case included)
/// so readouts echo what the user picked, and caches the decoded channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    /// The color as typed, e.g. `#336699`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Decoded base-10 channels.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self { text: "#000000".to_owned(), rgb: Rgb { r: 0, g: 0, b: 0 } }
    }
}

impl FromStr for HexColor {
    type Err = ShadowError;

    /// Parse exactly `#` followed by six hex digits. Short `#RGB` forms and
    /// surrounding whitespace are rejected: the native color input always
    /// emits the long form.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ShadowError::InvalidColorFormat(raw.to_owned());
        let hex = raw.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let rgb = Rgb { r: channel(0)?, g: channel(2)?, b: channel(4)? };
        Ok(Self { text: raw.to_owned(), rgb })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
