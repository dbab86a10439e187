//! Shared constants.

/// How long the copy result message stays in the status line.
pub const STATUS_REVERT_DELAY_MS: u32 = 1_500;

/// Status line text shown while no copy result is pending.
pub const COPY_INSTRUCTION: &str = "Click the rules above to copy the value";

/// Status line text shown after a successful copy.
pub const COPY_SUCCESS: &str = "Rule copied!";

/// Status line text shown when the clipboard rejected the write.
pub const COPY_FAILURE: &str = "Copy failed, select the rule and copy it manually";
