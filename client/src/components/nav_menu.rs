//! Navigation list shared by the mobile drawer and the desktop rail.
//!
//! DESIGN
//! ======
//! Both surfaces render from the same `NavigationItem` slice so the two
//! presentations cannot drift apart. Order is preserved, nothing is
//! filtered or deduplicated, and an empty slice renders an empty list.

#[cfg(test)]
#[path = "nav_menu_test.rs"]
mod nav_menu_test;

use leptos::prelude::*;

use crate::components::nav_icon::NavGlyph;
use crate::models::NavigationItem;

/// Physical location a navigation list is rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSurface {
    /// Off-canvas panel on narrow viewports.
    Drawer,
    /// Persistent side panel on wide viewports.
    Rail,
}

impl NavSurface {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drawer => "drawer",
            Self::Rail => "rail",
        }
    }
}

/// Ordered list of navigation links for one surface.
#[component]
pub fn NavMenu(items: &'static [NavigationItem], surface: NavSurface) -> impl IntoView {
    let entries = items
        .iter()
        .map(|item| {
            view! {
                <li data-nav-path=item.path>
                    <a class="flex gap-4" href=item.path>
                        <NavGlyph icon=item.icon/>
                        <span>{item.label}</span>
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <ul class="menu menu-lg gap-2" data-surface=surface.as_str()>
            {entries}
        </ul>
    }
}
