//! Generator page: controls, live preview, rule echoes, and copy status.
//!
//! ARCHITECTURE
//! ============
//! The page owns the single [`GeneratorState`] for its lifetime and provides
//! it to child components via context. The same default parameters seed both
//! the controller and the native inputs so the server render is consistent.
//! After hydration the controller is seeded again from the live controls,
//! which the browser may have restored to earlier values.

use leptos::prelude::*;
use shadow::ShadowParameters;
use shadow::copy_status::CopyMessages;

use crate::components::copy_instructions::CopyInstructions;
use crate::components::preview_box::PreviewBox;
use crate::components::rules_area::RulesArea;
use crate::components::shadow_controls::ShadowControls;
use crate::state::generator::GeneratorState;

/// The box-shadow generator.
#[component]
pub fn GeneratorPage() -> impl IntoView {
    let seed = ShadowParameters::default();
    let state = GeneratorState::new(&seed, CopyMessages::default());
    provide_context(state);

    #[cfg(feature = "hydrate")]
    {
        let fallback = seed.clone();
        Effect::new(move || state.reseed(&crate::util::dom_inputs::DomInputs::new(fallback.clone())));
    }

    view! {
        <main class="generator">
            <h1 class="generator__title">"Box Shadow Generator"</h1>
            <div class="generator__body">
                <ShadowControls seed=seed/>
                <PreviewBox/>
            </div>
            <RulesArea/>
            <CopyInstructions/>
        </main>
    }
}
