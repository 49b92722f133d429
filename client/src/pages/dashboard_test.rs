use super::*;
use crate::components::dashboard_layout::DashboardLayout;
use crate::test_support::{attr_values, render, text_of};

#[test]
fn overview_shows_mock_figures() {
    let html = render(view! { <DashboardPage/> });
    for (key, value) in [("total-links", "12"), ("total-clicks", "1234"), ("active-links", "8"), ("reported-links", "2")] {
        let start = html.find(&format!("data-stat=\"{key}\"")).unwrap();
        assert_eq!(text_of(&html[start..], "stat-value"), Some(value), "{key}");
    }
}

#[test]
fn overview_lists_recent_links_with_edit_targets() {
    let html = render(view! { <DashboardPage/> });
    assert!(html.contains("Summer Sale Electronics"));
    assert!(html.contains("Fashion &amp; Accessories"));
    assert!(html.contains("Home Decor Deals"));
    for record in RECENT_LINKS {
        assert!(html.contains(&format!("href=\"{}\"", record.edit_path())));
    }
}

#[test]
fn overview_links_to_create_channel_and_quick_actions() {
    let html = render(view! { <DashboardPage/> });
    let hrefs = attr_values(&html, "href");
    assert!(hrefs.iter().any(|h| h == routes::CHANNEL_NEW));
    assert_eq!(
        attr_values(&html, "data-quick-action"),
        vec![routes::LINK_NEW, routes::CHANNEL_SETTINGS, routes::BILLING]
    );
    assert!(html.contains("Create New Channel"));
    assert!(html.contains("Upgrade to Pro"));
}

#[test]
fn overview_renders_inside_dashboard_layout() {
    let html = render(view! {
        <DashboardLayout>
            <DashboardPage/>
        </DashboardLayout>
    });
    let header_at = html.find("LinkDir Dashboard").unwrap();
    let title_at = html.find("Dashboard Overview").unwrap();
    assert!(header_at < title_at);
}
