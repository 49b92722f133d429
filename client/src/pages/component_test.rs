//! Component gallery used to eyeball daisyUI styling.

#[cfg(test)]
#[path = "component_test_test.rs"]
mod component_test_test;

use leptos::prelude::*;

use crate::models::ButtonVariant;

/// Labelled button style for the gallery.
struct ButtonDef {
    label: &'static str,
    class: &'static str,
}

const BUTTON_COLORS: &[ButtonDef] = &[
    ButtonDef { label: "Default", class: "btn" },
    ButtonDef { label: "Primary", class: ButtonVariant::Primary.class() },
    ButtonDef { label: "Secondary", class: "btn btn-secondary" },
    ButtonDef { label: "Accent", class: "btn btn-accent" },
];

const BUTTON_STYLES: &[ButtonDef] = &[
    ButtonDef { label: "Outline", class: ButtonVariant::Outline.class() },
    ButtonDef { label: "Outline Primary", class: ButtonVariant::OutlinePrimary.class() },
    ButtonDef { label: "Ghost", class: ButtonVariant::Ghost.class() },
    ButtonDef { label: "Link", class: ButtonVariant::Link.class() },
];

const BUTTON_SIZES: &[ButtonDef] = &[
    ButtonDef { label: "Extra Small", class: "btn btn-xs" },
    ButtonDef { label: "Small", class: "btn btn-sm" },
    ButtonDef { label: "Normal", class: "btn" },
    ButtonDef { label: "Large", class: "btn btn-lg" },
];

#[component]
pub fn ComponentTestPage() -> impl IntoView {
    view! {
        <div class="p-8 space-y-4">
            <h1 class="text-2xl font-bold">"Button Test Page"</h1>
            <ButtonRow title="Basic Buttons:" buttons=BUTTON_COLORS/>
            <ButtonRow title="Button Styles:" buttons=BUTTON_STYLES/>
            <ButtonRow title="Button Sizes:" buttons=BUTTON_SIZES/>
            <div class="space-y-2">
                <h2 class="text-lg font-semibold">"Other Components:"</h2>
                <div class="flex gap-2 flex-wrap">
                    <div class="badge badge-primary">"Badge"</div>
                    <div role="alert" class="alert alert-info">"Alert"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ButtonRow(title: &'static str, buttons: &'static [ButtonDef]) -> impl IntoView {
    let buttons = buttons
        .iter()
        .map(|def| view! { <button type="button" class=def.class>{def.label}</button> })
        .collect::<Vec<_>>();

    view! {
        <div class="space-y-2">
            <h2 class="text-lg font-semibold">{title}</h2>
            <div class="flex gap-2 flex-wrap items-center">{buttons}</div>
        </div>
    }
}
