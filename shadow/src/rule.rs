//! CSS `box-shadow` value construction.
//!
//! The output format is fixed: the string is applied to the preview, shown
//! to the user, and copied to the clipboard verbatim.
//!
//! ```text
//! [inset ]<h>px <v>px <blur>px <spread>px rgba(<r>, <g>, <b>, <opacity>)
//! ```

use crate::params::ShadowParameters;

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;

/// Build the `box-shadow` value for `params`.
#[must_use]
pub fn compute_rule(params: &ShadowParameters) -> String {
    let body = format!(
        "{}px {}px {}px {}px rgba({}, {})",
        params.horizontal,
        params.vertical,
        params.blur,
        params.spread,
        params.color.rgb(),
        params.opacity,
    );
    if params.inset { format!("inset {body}") } else { body }
}

/// Normalize rendered rule text for the clipboard by dropping
/// whitespace-only lines.
#[must_use]
pub fn clipboard_text(rendered: &str) -> String {
    rendered
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Property spelling for one rule echo.
///
/// Every dialect receives the identical value string; only the property
/// label differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    Standard,
    Webkit,
    Moz,
}

impl Dialect {
    /// Echo order in the rules area.
    pub const ALL: [Dialect; 3] = [Dialect::Standard, Dialect::Webkit, Dialect::Moz];

    #[must_use]
    pub fn property(self) -> &'static str {
        match self {
            Self::Standard => "box-shadow",
            Self::Webkit => "-webkit-box-shadow",
            Self::Moz => "-moz-box-shadow",
        }
    }

    /// Full declaration line, e.g. `box-shadow: 0px 0px 0px 0px rgba(0, 0, 0, 1);`.
    #[must_use]
    pub fn declaration(self, rule: &str) -> String {
        format!("{}: {rule};", self.property())
    }
}
