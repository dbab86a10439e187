//! Input controls for the seven shadow fields.
//!
//! The native inputs are uncontrolled: they render with the seed values and
//! from then on only raise events. What the user sees as the current value
//! comes from the readouts, which the controller writes.

use leptos::ev::Event;
use leptos::prelude::*;
use shadow::params::{Control, InputRange};
use shadow::{Field, FieldValue, ShadowParameters};

use crate::state::generator::GeneratorState;

/// All controls in rule order.
#[component]
pub fn ShadowControls(seed: ShadowParameters) -> impl IntoView {
    let controls = Field::ALL
        .into_iter()
        .map(|field| match field.control() {
            Control::Range(range) => {
                view! { <NumericControl field=field range=range initial=seed.readout(field)/> }.into_any()
            }
            Control::Color => view! { <ColorControl initial=seed.color.as_str().to_owned()/> }.into_any(),
            Control::Checkbox => view! { <InsetControl initial=seed.inset/> }.into_any(),
        })
        .collect_view();

    view! {
        <form class="controls" autocomplete="off" on:submit=|ev| ev.prevent_default()>
            {controls}
        </form>
    }
}

/// Range slider plus readout for an offset, radius, or opacity field.
#[component]
fn NumericControl(field: Field, range: InputRange, initial: String) -> impl IntoView {
    let state = expect_context::<GeneratorState>();
    let on_input = move |ev: Event| state.apply(field, FieldValue::Text(event_target_value(&ev)));

    view! {
        <div class="controls__row">
            <label class="controls__label" for=field.as_str()>{field.label()}</label>
            <input
                id=field.as_str()
                class="controls__range"
                type="range"
                min=range.min.to_string()
                max=range.max.to_string()
                step=range.step.to_string()
                value=initial
                on:input=on_input
            />
            <Readout field=field/>
        </div>
    }
}

#[component]
fn ColorControl(initial: String) -> impl IntoView {
    let state = expect_context::<GeneratorState>();
    let on_input = move |ev: Event| state.apply(Field::Color, FieldValue::Text(event_target_value(&ev)));

    view! {
        <div class="controls__row">
            <label class="controls__label" for="color">{Field::Color.label()}</label>
            <input id="color" class="controls__color" type="color" value=initial on:input=on_input/>
            <Readout field=Field::Color/>
        </div>
    }
}

#[component]
fn InsetControl(initial: bool) -> impl IntoView {
    let state = expect_context::<GeneratorState>();
    let on_input = move |ev: Event| state.apply(Field::Inset, FieldValue::Flag(event_target_checked(&ev)));

    view! {
        <div class="controls__row controls__row--inline">
            <input id="inset" class="controls__checkbox" type="checkbox" checked=initial on:input=on_input/>
            <label class="controls__label" for="inset">{Field::Inset.label()}</label>
        </div>
    }
}

/// Mirrors the field's accepted value as written by the controller.
#[component]
fn Readout(field: Field) -> impl IntoView {
    let state = expect_context::<GeneratorState>();
    let id = format!("{}-value", field.as_str());

    view! {
        <output id=id class="controls__readout" for=field.as_str()>
            {move || state.readout(field)}
        </output>
    }
}
