use std::future::Future;
use std::sync::Mutex;

use futures::executor::block_on;

use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct FakeClipboard {
    written: Mutex<Vec<String>>,
    reject: bool,
}

impl FakeClipboard {
    fn rejecting() -> Self {
        Self { written: Mutex::new(Vec::new()), reject: true }
    }

    fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

impl ClipboardSink for FakeClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ShadowError>> {
        let result = if self.reject {
            Err(ShadowError::Clipboard("permission denied".to_owned()))
        } else {
            self.written.lock().unwrap().push(text.to_owned());
            Ok(())
        };
        async move { result }
    }
}

const PLAIN: &str = "0px 0px 0px 0px rgba(0, 0, 0, 1)";

// =============================================================
// copy_rule
// =============================================================

#[test]
fn copy_sends_exact_rule_text() {
    let clipboard = FakeClipboard::default();
    let copied = block_on(copy_rule(&clipboard, PLAIN)).unwrap();
    assert_eq!(copied, PLAIN);
    assert_eq!(clipboard.written(), vec![PLAIN.to_owned()]);
}

#[test]
fn copy_strips_leading_blank_lines() {
    let clipboard = FakeClipboard::default();
    block_on(copy_rule(&clipboard, &format!("\n   \n{PLAIN}"))).unwrap();
    assert_eq!(clipboard.written(), vec![PLAIN.to_owned()]);
}

#[test]
fn copy_failure_is_propagated() {
    let clipboard = FakeClipboard::rejecting();
    let result = block_on(copy_rule(&clipboard, PLAIN));
    assert_eq!(result, Err(ShadowError::Clipboard("permission denied".to_owned())));
    assert_eq!(CopyOutcome::from(&result), CopyOutcome::Failed);
}

// =============================================================
// CopyStatus
// =============================================================

#[test]
fn status_starts_with_instruction() {
    let status = CopyStatus::default();
    assert_eq!(status.text(), COPY_INSTRUCTION);
    assert_eq!(status.showing(), None);
}

#[test]
fn default_instruction_describes_the_copied_value() {
    assert_eq!(CopyStatus::default().text(), "Click the rules above to copy the value");
}

#[test]
fn success_then_revert_restores_instruction() {
    let mut status = CopyStatus::default();
    let ticket = status.report(CopyOutcome::Copied);
    assert_eq!(status.text(), COPY_SUCCESS);
    assert!(status.revert(ticket));
    assert_eq!(status.text(), COPY_INSTRUCTION);
}

#[test]
fn failure_shows_distinct_message_and_reverts() {
    let mut status = CopyStatus::default();
    let ticket = status.report(CopyOutcome::Failed);
    assert_eq!(status.text(), COPY_FAILURE);
    assert_ne!(status.text(), COPY_SUCCESS);
    assert!(status.revert(ticket));
    assert_eq!(status.text(), COPY_INSTRUCTION);
}

#[test]
fn stale_tickets_do_not_cut_latest_message_short() {
    let mut status = CopyStatus::default();
    let first = status.report(CopyOutcome::Copied);
    let second = status.report(CopyOutcome::Copied);
    let third = status.report(CopyOutcome::Copied);

    // Earlier timers fire while the latest message is still due on screen.
    assert!(!status.revert(first));
    assert!(!status.revert(second));
    assert_eq!(status.text(), COPY_SUCCESS);

    assert!(status.revert(third));
    assert_eq!(status.text(), COPY_INSTRUCTION);
}

#[test]
fn revert_twice_is_harmless() {
    let mut status = CopyStatus::default();
    let ticket = status.report(CopyOutcome::Copied);
    assert!(status.revert(ticket));
    assert!(!status.revert(ticket));
    assert_eq!(status.text(), COPY_INSTRUCTION);
}

#[test]
fn end_to_end_repeated_copies_settle_on_instruction() {
    let clipboard = FakeClipboard::default();
    let mut status = CopyStatus::default();
    let mut tickets = Vec::new();
    for _ in 0..4 {
        let result = block_on(copy_rule(&clipboard, PLAIN));
        tickets.push(status.report(CopyOutcome::from(&result)));
    }
    for ticket in tickets {
        status.revert(ticket);
    }
    assert_eq!(status.text(), COPY_INSTRUCTION);
    assert_eq!(clipboard.written().len(), 4);
    assert!(clipboard.written().iter().all(|t| t == PLAIN));
}

#[test]
fn custom_messages_are_used() {
    let mut status = CopyStatus::new(CopyMessages {
        instruction: "Clique no quadro acima para copiar as regras".to_owned(),
        success: "Regra copiada com sucesso!".to_owned(),
        failure: "Falha ao copiar".to_owned(),
    });
    assert_eq!(status.text(), "Clique no quadro acima para copiar as regras");
    status.report(CopyOutcome::Copied);
    assert_eq!(status.text(), "Regra copiada com sucesso!");
}
