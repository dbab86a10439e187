//! System clipboard access.
//!
//! Writes go through `navigator.clipboard.writeText`. Outside the browser
//! (SSR and native tests) every write fails with a clipboard error so the
//! status line takes its failure path.

use std::future::Future;

use shadow::ShadowError;
use shadow::surface::ClipboardSink;

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Clipboard sink backed by the browser's async clipboard API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardSink for BrowserClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ShadowError>> {
        #[cfg(feature = "hydrate")]
        let promise = web_sys::window()
            .and_then(|window| window.navigator().clipboard())
            .map(|clipboard| clipboard.write_text(text));
        #[cfg(not(feature = "hydrate"))]
        let _ = text;

        async move {
            #[cfg(feature = "hydrate")]
            {
                let Some(promise) = promise else {
                    return Err(ShadowError::Clipboard("clipboard API unavailable".to_owned()));
                };
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| ShadowError::Clipboard(err.as_string().unwrap_or_else(|| format!("{err:?}"))))
            }
            #[cfg(not(feature = "hydrate"))]
            {
                Err(ShadowError::Clipboard("clipboard is only available in the browser".to_owned()))
            }
        }
    }
}
