//! Status line under the rules area.

use leptos::prelude::*;
use shadow::copy_status::CopyOutcome;

use crate::state::generator::GeneratorState;

/// Shows the copy instruction, or the latest copy result until it reverts.
#[component]
pub fn CopyInstructions() -> impl IntoView {
    let state = expect_context::<GeneratorState>();
    let text = move || state.status.with(|status| status.text().to_owned());
    let class = move || {
        state.status.with(|status| match status.showing() {
            None => "copy-instructions",
            Some(CopyOutcome::Copied) => "copy-instructions copy-instructions--copied",
            Some(CopyOutcome::Failed) => "copy-instructions copy-instructions--failed",
        })
    };

    view! {
        <p id="copy-instructions" class=class aria-live="polite">{text}</p>
    }
}
