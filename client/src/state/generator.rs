//! Reactive state for the generator page.
//!
//! DESIGN
//! ======
//! The controller is the only writer of the readout, preview, and rule
//! signals: each signal is wrapped in a small surface adapter and handed to
//! the controller at construction. Components only read those signals and
//! forward raw input events through [`GeneratorState::apply`].

use std::collections::HashMap;

use leptos::prelude::*;
use shadow::consts::STATUS_REVERT_DELAY_MS;
use shadow::copy_status::{CopyMessages, CopyOutcome, CopyStatus, RevertTicket, copy_rule};
use shadow::rule::Dialect;
use shadow::surface::{ClipboardSink, InputSurface, PreviewSurface, ReadoutSurface, TextDisplay};
use shadow::{Field, FieldValue, ShadowParameters, ShadowStateController};

use crate::util::clipboard::BrowserClipboard;

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

/// One labelled echo of the rule in the rules area.
#[derive(Clone, Copy, Debug)]
pub struct RuleEcho {
    pub dialect: Dialect,
    pub text: RwSignal<String>,
}

/// Signals shared by the generator page components, provided via context.
#[derive(Clone, Copy)]
pub struct GeneratorState {
    /// Readout text per field, keyed by field.
    pub readouts: RwSignal<HashMap<Field, String>>,
    /// The `box-shadow` value applied to the preview box.
    pub preview: RwSignal<String>,
    /// Rule echoes in display order.
    pub echoes: [RuleEcho; 3],
    pub status: RwSignal<CopyStatus>,
    controller: StoredValue<ShadowStateController>,
}

struct SignalReadouts(RwSignal<HashMap<Field, String>>);

impl ReadoutSurface for SignalReadouts {
    fn show_value(&mut self, field: Field, text: &str) {
        self.0.update(|readouts| {
            readouts.insert(field, text.to_owned());
        });
    }
}

struct SignalPreview(RwSignal<String>);

impl PreviewSurface for SignalPreview {
    fn apply_shadow(&mut self, rule: &str) {
        self.0.set(rule.to_owned());
    }
}

struct SignalDisplay(RwSignal<String>);

impl TextDisplay for SignalDisplay {
    fn show_rule(&mut self, rule: &str) {
        self.0.set(rule.to_owned());
    }
}

impl GeneratorState {
    /// Build the signals, wire them into a controller, and seed it from
    /// `seed` (the initial values the input controls render with).
    pub fn new(seed: &ShadowParameters, messages: CopyMessages) -> Self {
        let readouts = RwSignal::new(HashMap::new());
        let preview = RwSignal::new(String::new());
        let echoes = Dialect::ALL.map(|dialect| RuleEcho { dialect, text: RwSignal::new(String::new()) });

        let mut controller = echoes.iter().fold(
            ShadowStateController::new(Box::new(SignalReadouts(readouts)), Box::new(SignalPreview(preview))),
            |controller, echo| controller.with_display(Box::new(SignalDisplay(echo.text))),
        );
        if let Err(err) = controller.initialize(seed) {
            log::error!("shadow controller failed to initialize: {err}");
        }

        Self {
            readouts,
            preview,
            echoes,
            status: RwSignal::new(CopyStatus::new(messages)),
            controller: StoredValue::new(controller),
        }
    }

    /// Seed the controller again from `inputs`, e.g. the live controls once
    /// the page has hydrated. A failed read keeps the current state.
    pub fn reseed<I: InputSurface>(&self, inputs: &I) {
        let outcome = self.controller.try_update_value(|controller| controller.initialize(inputs));
        if let Some(Err(err)) = outcome {
            log::warn!("kept previous shadow, could not reseed from inputs: {err}");
        }
    }

    /// Forward one input event. Rejected values are logged and dropped; the
    /// surfaces keep showing the last accepted state.
    pub fn apply(&self, field: Field, value: FieldValue) {
        let outcome = self.controller.try_update_value(|controller| controller.update(field, value));
        if let Some(Err(err)) = outcome {
            log::warn!("ignored {field} input: {err}");
        }
    }

    /// Readout text for `field`, empty until the controller has rendered.
    pub fn readout(&self, field: Field) -> String {
        self.readouts.with(|readouts| readouts.get(&field).cloned().unwrap_or_default())
    }

    /// The rule the controller last rendered.
    pub fn rule(&self) -> String {
        self.controller
            .with_value(|controller| controller.rule().map(str::to_owned))
            .unwrap_or_default()
    }

    /// Copy the current rule to the system clipboard and flash the result
    /// in the status line.
    pub fn copy(&self) {
        let rule = self.rule();
        let status = self.status;
        leptos::task::spawn_local(async move {
            if let Some(ticket) = copy_and_report(&BrowserClipboard, status, &rule).await {
                schedule_revert(status, ticket);
            }
        });
    }
}

/// Write `rule` through `clipboard` and report the outcome to `status`.
///
/// Returns the ticket for the revert, or `None` if the status signal has
/// been disposed with its page.
pub async fn copy_and_report<C>(clipboard: &C, status: RwSignal<CopyStatus>, rule: &str) -> Option<RevertTicket>
where
    C: ClipboardSink,
{
    let result = copy_rule(clipboard, rule).await;
    if let Err(err) = &result {
        log::warn!("{err}");
    }
    status.try_update(|status| status.report(CopyOutcome::from(&result)))
}

/// Restore the instruction text if `ticket` is still the latest report.
pub fn revert_status(status: RwSignal<CopyStatus>, ticket: RevertTicket) {
    status.maybe_update(|status| status.revert(ticket));
}

/// Revert the status line after the fixed delay. Earlier timers still fire
/// but their tickets are stale by then.
fn schedule_revert(status: RwSignal<CopyStatus>, ticket: RevertTicket) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(STATUS_REVERT_DELAY_MS, move || revert_status(status, ticket)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (status, ticket, STATUS_REVERT_DELAY_MS);
    }
}
