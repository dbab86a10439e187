//! Rule echoes. Clicking anywhere in the area copies the rule.

use leptos::prelude::*;

use crate::state::generator::{GeneratorState, RuleEcho};

#[component]
pub fn RulesArea() -> impl IntoView {
    let state = expect_context::<GeneratorState>();
    let on_click = move |_| state.copy();

    view! {
        <div id="rules-area" class="rules" on:click=on_click title="Copy rule">
            {state.echoes.into_iter().map(|echo| view! { <RuleRow echo=echo/> }).collect_view()}
        </div>
    }
}

/// One `property: value;` line.
#[component]
fn RuleRow(echo: RuleEcho) -> impl IntoView {
    let property = echo.dialect.property();
    let id = match property.strip_prefix('-') {
        Some(prefixed) => prefixed.replace("-box-shadow", "-rule"),
        None => "rule".to_owned(),
    };

    view! {
        <p id=id class="rules__row">
            <code>{move || echo.text.with(|rule| echo.dialect.declaration(rule))}</code>
        </p>
    }
}
