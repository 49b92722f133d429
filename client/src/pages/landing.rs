//! Public landing page.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::data::{
    APP_NAME, FEATURE_CARDS, FOOTER_TEXT, LANDING_CTA, LANDING_HEADLINE, LANDING_STATS, LANDING_TAGLINE,
};
use crate::routes;

#[component]
pub fn LandingPage() -> impl IntoView {
    let stats = LANDING_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="stat">
                    <div class="stat-title">{stat.title}</div>
                    <div class="stat-value">{stat.value}</div>
                    <div class="stat-desc">{stat.description}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let cards = FEATURE_CARDS
        .iter()
        .map(|card| {
            view! {
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{card.title}</h2>
                        <p>{card.body}</p>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="min-h-screen bg-base-200 flex flex-col">
            <section class="hero min-h-[70vh]">
                <div class="hero-content text-center">
                    <div class="max-w-md">
                        <h1 class="text-5xl font-bold">{LANDING_HEADLINE}</h1>
                        <p class="py-6">{LANDING_TAGLINE}</p>
                        <a class="btn btn-primary" href=routes::DASHBOARD>{LANDING_CTA}</a>
                    </div>
                </div>
            </section>

            <section class="flex justify-center px-4">
                <div class="stats stats-vertical lg:stats-horizontal shadow bg-base-100">{stats}</div>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-3 gap-6 px-8 py-12 max-w-6xl mx-auto">{cards}</section>

            <footer class="footer footer-center p-6 bg-base-300 text-base-content mt-auto">
                <aside>
                    <p class="font-semibold">{APP_NAME}</p>
                    <p>{FOOTER_TEXT}</p>
                </aside>
            </footer>
        </div>
    }
}
