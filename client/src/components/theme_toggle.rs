//! Light/dark swap control.
//!
//! The checkbox carries daisyUI's `theme-controller` class, so the theme
//! switches in CSS alone. Nothing is stored and no other component is told.

use leptos::prelude::*;

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

#[component]
pub fn ThemeToggle() -> impl IntoView {
    view! {
        <label class="swap swap-rotate btn btn-ghost btn-circle" title="Toggle theme">
            <input type="checkbox" class="theme-controller" value="dark" aria-label="Toggle dark theme"/>
            <svg class="swap-off h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=SUN_PATH></path>
            </svg>
            <svg class="swap-on h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=MOON_PATH></path>
            </svg>
        </label>
    }
}
