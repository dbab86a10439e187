//! The shadow state controller.
//!
//! ARCHITECTURE
//! ============
//! Input events flow in through [`ShadowStateController::update`]; every
//! accepted change recomputes the rule and pushes it to the preview and to
//! each text display in registration order. The rendered rule is a pure
//! function of the current [`ShadowParameters`], so the controller keeps no
//! other state beyond the lifecycle tag.

use crate::error::ShadowError;
use crate::params::{Field, FieldValue, ShadowParameters};
use crate::rule::compute_rule;
use crate::surface::{DisplayHandle, InputSurface, PreviewHandle, ReadoutHandle};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Whether the controller has rendered at least once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, nothing rendered yet.
    #[default]
    Uninitialized,
    /// Seeded from the input surface; `rule` is what every surface shows.
    Initialized { rule: String },
}

/// Owns the canonical shadow parameters and keeps every surface in sync.
pub struct ShadowStateController {
    params: ShadowParameters,
    lifecycle: Lifecycle,
    readouts: ReadoutHandle,
    preview: PreviewHandle,
    displays: Vec<DisplayHandle>,
}

impl ShadowStateController {
    /// Create an uninitialized controller writing to `readouts` and `preview`.
    /// Text displays are added with [`Self::with_display`].
    #[must_use]
    pub fn new(readouts: ReadoutHandle, preview: PreviewHandle) -> Self {
        Self {
            params: ShadowParameters::default(),
            lifecycle: Lifecycle::Uninitialized,
            readouts,
            preview,
            displays: Vec::new(),
        }
    }

    /// Register another text display. Displays render in the order added.
    #[must_use]
    pub fn with_display(mut self, display: DisplayHandle) -> Self {
        self.displays.push(display);
        self
    }

    /// Seed the parameters from every field of `inputs`, fill the readouts,
    /// and render.
    ///
    /// Calling it again re-seeds from the surface; the controller stays
    /// initialized.
    ///
    /// # Errors
    ///
    /// Returns the first field error if the surface holds a value that does
    /// not parse. Nothing is written to any surface in that case.
    pub fn initialize<I>(&mut self, inputs: &I) -> Result<(), ShadowError>
    where
        I: InputSurface + ?Sized,
    {
        let mut params = ShadowParameters::default();
        for field in Field::ALL {
            params.set(field, inputs.read(field))?;
        }
        self.params = params;

        for field in Field::ALL.into_iter().filter(|f| f.has_readout()) {
            self.readouts.show_value(field, &self.params.readout(field));
        }
        self.render();
        Ok(())
    }

    /// Apply one input event.
    ///
    /// # Errors
    ///
    /// - [`ShadowError::NotInitialized`] before [`Self::initialize`] has run.
    /// - Any validation error from [`ShadowParameters::set`].
    ///
    /// On error no surface is written and the previous rule stays rendered.
    pub fn update(&mut self, field: Field, value: FieldValue) -> Result<(), ShadowError> {
        if !self.is_initialized() {
            return Err(ShadowError::NotInitialized);
        }
        self.params.set(field, value)?;
        if field.has_readout() {
            self.readouts.show_value(field, &self.params.readout(field));
        }
        self.render();
        Ok(())
    }

    /// Apply an input event addressed by its wire identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::UnknownField`] for identifiers outside the
    /// fixed field set, otherwise as [`Self::update`].
    pub fn update_named(&mut self, name: &str, value: FieldValue) -> Result<(), ShadowError> {
        self.update(name.parse()?, value)
    }

    #[must_use]
    pub fn params(&self) -> &ShadowParameters {
        &self.params
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Initialized { .. })
    }

    /// The rule currently shown on every surface, if rendered.
    #[must_use]
    pub fn rule(&self) -> Option<&str> {
        match &self.lifecycle {
            Lifecycle::Initialized { rule } => Some(rule),
            Lifecycle::Uninitialized => None,
        }
    }

    fn render(&mut self) {
        let rule = compute_rule(&self.params);
        self.preview.apply_shadow(&rule);
        for display in &mut self.displays {
            display.show_rule(&rule);
        }
        self.lifecycle = Lifecycle::Initialized { rule };
    }
}
