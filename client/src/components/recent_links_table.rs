//! Table of recently added links with per-row actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editing navigates to the link edit route. Deletion belongs to a link
//! service this view would only trigger; no such service exists, so the
//! Delete button is rendered inert and marked `aria-disabled`.

#[cfg(test)]
#[path = "recent_links_table_test.rs"]
mod recent_links_table_test;

use leptos::prelude::*;

use crate::models::RecentLinkRecord;
use crate::routes;

/// One row per record, in input order, followed by a "View All Links" link.
#[component]
pub fn RecentLinksTable(records: &'static [RecentLinkRecord]) -> impl IntoView {
    let rows = records
        .iter()
        .map(|record| {
            view! {
                <tr data-link-id=record.id.to_string()>
                    <td data-col="title">{record.title}</td>
                    <td data-col="category">
                        <div class="badge badge-ghost">{record.category}</div>
                    </td>
                    <td data-col="clicks">{record.clicks.to_string()}</td>
                    <td data-col="expires">{record.expires_at}</td>
                    <td>
                        <div class="flex gap-2">
                            <a class="btn btn-sm btn-ghost" href=record.edit_path()>
                                "Edit"
                            </a>
                            <DeleteLinkButton id=record.id/>
                        </div>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="bg-base-100 rounded-box shadow">
            <div class="p-4 border-b border-base-200">
                <h2 class="text-xl font-semibold">"Recent Links"</h2>
            </div>
            <div class="overflow-x-auto">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Category"</th>
                            <th>"Clicks"</th>
                            <th>"Expires"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <div class="p-4 text-center">
                <a class="btn btn-link" href=routes::CHANNELS>
                    "View All Links"
                </a>
            </div>
        </div>
    }
}

/// Delete affordance with no attached behavior.
#[component]
fn DeleteLinkButton(id: u32) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-sm btn-ghost text-error"
            data-action="delete"
            data-link-id=id.to_string()
            aria-disabled="true"
            title="Link deletion is not available yet"
        >
            "Delete"
        </button>
    }
}
