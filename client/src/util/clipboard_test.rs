#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;

#[test]
fn native_write_fails_with_clipboard_error() {
    let result = block_on(BrowserClipboard.write_text("0px 0px 0px 0px rgba(0, 0, 0, 1)"));
    assert!(matches!(result, Err(ShadowError::Clipboard(_))));
}
