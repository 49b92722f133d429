//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::dashboard_layout::DashboardLayout;
use crate::pages::{
    component_test::ComponentTestPage,
    dashboard::DashboardPage,
    landing::LandingPage,
    placeholder::{LinkEditPage, NotFoundPage, SectionPlaceholder},
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Registers every navigation target. Dashboard routes share
/// `DashboardLayout` through a parent route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/linkdir.css"/>
        <Title text="LinkDir"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("test") view=ComponentTestPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("account") view=|| view! { <SectionPlaceholder title="Account"/> }/>
                    <Route path=StaticSegment("billing") view=|| view! { <SectionPlaceholder title="Billing"/> }/>
                    <Route path=StaticSegment("channels") view=|| view! { <SectionPlaceholder title="Channels"/> }/>
                    <Route
                        path=(StaticSegment("channels"), StaticSegment("new"))
                        view=|| view! { <SectionPlaceholder title="New Channel"/> }
                    />
                    <Route
                        path=(StaticSegment("channels"), StaticSegment("settings"))
                        view=|| view! { <SectionPlaceholder title="Channel Settings"/> }
                    />
                    <Route
                        path=(StaticSegment("channels"), StaticSegment("links"), StaticSegment("new"))
                        view=|| view! { <SectionPlaceholder title="New Link"/> }
                    />
                    <Route
                        path=(
                            StaticSegment("channels"),
                            StaticSegment("links"),
                            ParamSegment("id"),
                            StaticSegment("edit"),
                        )
                        view=LinkEditPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Dashboard layout around the matched child route.
#[component]
fn DashboardShell() -> impl IntoView {
    view! {
        <DashboardLayout>
            <Outlet/>
        </DashboardLayout>
    }
}
