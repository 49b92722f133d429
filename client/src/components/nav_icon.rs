//! Outline SVG glyph for navigation entries and quick actions.

use leptos::prelude::*;

use crate::models::NavIcon;

/// Renders a 24x24 stroked icon from the glyph's path data.
#[component]
pub fn NavGlyph(icon: NavIcon, #[prop(default = "h-6 w-6")] size_class: &'static str) -> impl IntoView {
    view! {
        <svg class=size_class fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon.path_data()></path>
        </svg>
    }
}
