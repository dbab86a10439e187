//! Preview box rendering the current shadow.

use leptos::prelude::*;

use crate::state::generator::GeneratorState;

#[component]
pub fn PreviewBox() -> impl IntoView {
    let state = expect_context::<GeneratorState>();
    let style = move || format!("box-shadow: {}", state.preview.get());

    view! {
        <div class="preview">
            <div id="box" class="preview__box" style=style></div>
        </div>
    }
}
