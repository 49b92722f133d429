//! Four headline counters for the dashboard overview.

#[cfg(test)]
#[path = "stats_summary_test.rs"]
mod stats_summary_test;

use leptos::prelude::*;

use crate::models::{ChannelStats, StatAccent};

/// One daisyUI `stat` card per counter. Values are rendered verbatim.
#[component]
pub fn StatsSummary(stats: ChannelStats) -> impl IntoView {
    let cards = stats
        .entries()
        .into_iter()
        .map(|entry| {
            view! {
                <div class="stat bg-base-100 rounded-box shadow" data-stat=entry.key>
                    <div class="stat-title">{entry.label}</div>
                    <div class=value_class(entry.accent)>{entry.value.to_string()}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">{cards}</div> }
}

fn value_class(accent: StatAccent) -> String {
    match accent.class() {
        "" => "stat-value".to_owned(),
        accent => format!("stat-value {accent}"),
    }
}
