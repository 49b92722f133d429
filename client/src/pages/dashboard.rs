//! Dashboard overview: counters, shortcuts, and the most recent links.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::quick_actions::QuickActions;
use crate::components::recent_links_table::RecentLinksTable;
use crate::components::stats_summary::StatsSummary;
use crate::data::{CHANNEL_STATS, QUICK_ACTIONS, RECENT_LINKS};
use crate::models::ButtonVariant;
use crate::routes;

/// Overview page rendered inside the dashboard layout at `/dashboard`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"Dashboard Overview"</h1>
                <a class=ButtonVariant::Primary.class() href=routes::CHANNEL_NEW>
                    "Create New Channel"
                </a>
            </div>

            <StatsSummary stats=CHANNEL_STATS/>
            <QuickActions actions=QUICK_ACTIONS/>
            <RecentLinksTable records=RECENT_LINKS/>
        </div>
    }
}
