//! Row of shortcut buttons on the dashboard overview.

use leptos::prelude::*;

use crate::components::nav_icon::NavGlyph;
use crate::models::QuickAction;

#[component]
pub fn QuickActions(actions: &'static [QuickAction]) -> impl IntoView {
    let buttons = actions
        .iter()
        .map(|action| {
            let icon = action.icon.map(|icon| view! { <NavGlyph icon=icon size_class="h-5 w-5"/> });
            view! {
                <a class=action.variant.class() href=action.path data-quick-action=action.path>
                    {icon}
                    <span>{action.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="flex flex-wrap gap-4">{buttons}</div> }
}
