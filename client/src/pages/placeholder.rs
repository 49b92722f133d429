//! Placeholders for dashboard routes that have no view yet.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes;

/// Titled card telling the user the section is not available yet.
#[component]
pub fn SectionPlaceholder(title: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="space-y-6" data-placeholder=title>
            <h1 class="text-2xl font-bold">{title}</h1>
            <div class="bg-base-100 rounded-box shadow p-6 space-y-4">
                {children.map(|children| children())}
                <p>"This section is not available yet."</p>
                <a class="btn btn-link px-0" href=routes::DASHBOARD>
                    "Back to overview"
                </a>
            </div>
        </div>
    }
}

/// Edit screen for a single link, addressed by the `id` route parameter.
#[component]
pub fn LinkEditPage() -> impl IntoView {
    let params = use_params_map();
    let link_id = move || params.read().get("id").unwrap_or_default();

    view! {
        <SectionPlaceholder title="Edit Link">
            <p class="text-sm opacity-70">{move || format!("Link #{}", link_id())}</p>
        </SectionPlaceholder>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-3xl font-bold">"Page not found."</h1>
                    <a class="btn btn-primary" href=routes::HOME>
                        "Go home"
                    </a>
                </div>
            </div>
        </div>
    }
}
