//! Avatar dropdown in the dashboard header.

use leptos::prelude::*;

use crate::data::{AVATAR_URL, USER_MENU};
use crate::models::UserMenuEntry;

/// Avatar button with a focus-driven dropdown of account links.
///
/// Entries without a path (Logout) render as inert buttons; there is no
/// session layer to act on.
#[component]
pub fn UserMenu(#[prop(default = USER_MENU)] entries: &'static [UserMenuEntry]) -> impl IntoView {
    let items = entries
        .iter()
        .map(|entry| match entry.path {
            Some(path) => view! {
                <li>
                    <a href=path>{entry.label}</a>
                </li>
            }
            .into_any(),
            None => view! {
                <li>
                    <button type="button" data-inert="true">{entry.label}</button>
                </li>
            }
            .into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar" aria-label="Open user menu">
                <div class="w-10 rounded-full">
                    <img src=AVATAR_URL alt="profile"/>
                </div>
            </div>
            <ul tabindex="0" class="menu menu-sm dropdown-content mt-3 z-[1] p-2 shadow bg-base-100 rounded-box w-52">
                {items}
            </ul>
        </div>
    }
}
