//! Dashboard chrome: header, navigation surfaces, and the content slot.
//!
//! ARCHITECTURE
//! ============
//! The same `items` slice feeds the mobile drawer and the desktop rail
//! through `NavMenu`. The drawer is a CSS checkbox (`dashboard-drawer`)
//! opened by the header hamburger and closed by its overlay; the rail is
//! hidden below the `lg` breakpoint and the drawer above it.

#[cfg(test)]
#[path = "dashboard_layout_test.rs"]
mod dashboard_layout_test;

use leptos::prelude::*;

use crate::components::nav_menu::{NavMenu, NavSurface};
use crate::components::theme_toggle::ThemeToggle;
use crate::components::user_menu::UserMenu;
use crate::data::{APP_NAME, DASHBOARD_TITLE, NAV_ITEMS};
use crate::models::NavigationItem;

/// Wraps arbitrary page content below the dashboard header.
#[component]
pub fn DashboardLayout(
    children: Children,
    #[prop(default = NAV_ITEMS)] items: &'static [NavigationItem],
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <div class="drawer">
                <input id="dashboard-drawer" type="checkbox" class="drawer-toggle"/>

                <div class="drawer-content flex min-h-screen">
                    <aside class="hidden lg:flex lg:flex-col w-80 shrink-0 bg-base-100 text-base-content p-4">
                        <Brand/>
                        <NavMenu items=items surface=NavSurface::Rail/>
                    </aside>

                    <div class="flex flex-1 flex-col">
                        <header class="w-full navbar bg-base-100 shadow-md">
                            <div class="flex-none lg:hidden">
                                <label for="dashboard-drawer" class="btn btn-square btn-ghost" aria-label="Open navigation">
                                    <svg class="inline-block w-6 h-6 stroke-current" fill="none" viewBox="0 0 24 24" aria-hidden="true">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
                                    </svg>
                                </label>
                            </div>
                            <div class="flex-1 px-4">
                                <span class="text-lg font-semibold">{DASHBOARD_TITLE}</span>
                            </div>
                            <div class="flex-none flex items-center gap-2">
                                <ThemeToggle/>
                                <UserMenu/>
                            </div>
                        </header>

                        <main class="p-6" data-slot="content">
                            {children()}
                        </main>
                    </div>
                </div>

                <div class="drawer-side z-40 lg:hidden">
                    <label for="dashboard-drawer" class="drawer-overlay" aria-label="Close navigation"></label>
                    <div class="menu p-4 w-80 min-h-full bg-base-100 text-base-content">
                        <Brand/>
                        <NavMenu items=items surface=NavSurface::Drawer/>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 px-4 py-5">
            <a class="text-2xl font-bold" href=crate::routes::DASHBOARD>{APP_NAME}</a>
        </div>
    }
}
