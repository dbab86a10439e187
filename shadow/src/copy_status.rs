//! Copy action and the transient status line.
//!
//! DESIGN
//! ======
//! Each reported copy result bumps a generation counter and hands back a
//! [`RevertTicket`]. The host schedules a revert with that ticket after
//! [`crate::consts::STATUS_REVERT_DELAY_MS`]; only the ticket from the most
//! recent report can restore the instruction text. Older timers firing late
//! are no-ops, so rapid repeated copies never cut the latest message short.

use crate::consts::{COPY_FAILURE, COPY_INSTRUCTION, COPY_SUCCESS};
use crate::error::ShadowError;
use crate::rule::clipboard_text;
use crate::surface::ClipboardSink;

#[cfg(test)]
#[path = "copy_status_test.rs"]
mod copy_status_test;

/// Result of one clipboard write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl<T> From<&Result<T, ShadowError>> for CopyOutcome {
    fn from(result: &Result<T, ShadowError>) -> Self {
        if result.is_ok() { Self::Copied } else { Self::Failed }
    }
}

/// Handle for the revert scheduled after a copy report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTicket(u64);

/// Texts the status line cycles through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyMessages {
    pub instruction: String,
    pub success: String,
    pub failure: String,
}

impl Default for CopyMessages {
    fn default() -> Self {
        Self {
            instruction: COPY_INSTRUCTION.to_owned(),
            success: COPY_SUCCESS.to_owned(),
            failure: COPY_FAILURE.to_owned(),
        }
    }
}

/// Status line state: the instruction text, or a pending copy result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyStatus {
    messages: CopyMessages,
    showing: Option<CopyOutcome>,
    generation: u64,
}

impl CopyStatus {
    #[must_use]
    pub fn new(messages: CopyMessages) -> Self {
        Self { messages, showing: None, generation: 0 }
    }

    /// Text the status line should display right now.
    #[must_use]
    pub fn text(&self) -> &str {
        match self.showing {
            None => &self.messages.instruction,
            Some(CopyOutcome::Copied) => &self.messages.success,
            Some(CopyOutcome::Failed) => &self.messages.failure,
        }
    }

    /// The copy result currently on display, if any.
    #[must_use]
    pub fn showing(&self) -> Option<CopyOutcome> {
        self.showing
    }

    /// Show `outcome` and invalidate every earlier ticket.
    pub fn report(&mut self, outcome: CopyOutcome) -> RevertTicket {
        self.generation += 1;
        self.showing = Some(outcome);
        RevertTicket(self.generation)
    }

    /// Restore the instruction text if `ticket` belongs to the latest report.
    /// Returns whether the text changed.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.generation || self.showing.is_none() {
            return false;
        }
        self.showing = None;
        true
    }
}

/// Normalize `rendered` and write it to `clipboard`.
///
/// Returns the exact text handed to the clipboard.
///
/// # Errors
///
/// Propagates the sink's [`ShadowError::Clipboard`] failure.
pub async fn copy_rule<C>(clipboard: &C, rendered: &str) -> Result<String, ShadowError>
where
    C: ClipboardSink,
{
    let text = clipboard_text(rendered);
    clipboard.write_text(&text).await?;
    Ok(text)
}
