//! Compiled-in mock content for the landing page and dashboard overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no data service behind these views yet. Pages read these
//! constants directly; a real backend would replace them at the page level
//! without touching the components.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::models::{
    ButtonVariant, ChannelStats, FeatureCard, LandingStat, NavIcon, NavigationItem, QuickAction,
    RecentLinkRecord, UserMenuEntry,
};
use crate::routes;

pub const APP_NAME: &str = "LinkDir";
pub const DASHBOARD_TITLE: &str = "LinkDir Dashboard";

/// Avatar shown in the header user menu.
pub const AVATAR_URL: &str = "https://daisyui.com/images/stock/photo-1534528741775-53994a69daeb.jpg";

/// Sidebar entries. Drives both the mobile drawer and the desktop rail.
pub const NAV_ITEMS: &[NavigationItem] = &[
    NavigationItem { path: routes::DASHBOARD, label: "Overview", icon: NavIcon::Overview },
    NavigationItem { path: routes::CHANNELS, label: "Channels", icon: NavIcon::Channels },
    NavigationItem { path: routes::ACCOUNT, label: "Account", icon: NavIcon::Account },
    NavigationItem { path: routes::BILLING, label: "Billing", icon: NavIcon::Billing },
];

pub const USER_MENU: &[UserMenuEntry] = &[
    UserMenuEntry { label: "Profile", path: Some(routes::ACCOUNT) },
    UserMenuEntry { label: "Billing", path: Some(routes::BILLING) },
    UserMenuEntry { label: "Logout", path: None },
];

pub const CHANNEL_STATS: ChannelStats =
    ChannelStats { total_links: 12, total_clicks: 1234, active_links: 8, reported_links: 2 };

pub const RECENT_LINKS: &[RecentLinkRecord] = &[
    RecentLinkRecord {
        id: 1,
        title: "Summer Sale Electronics",
        category: "Electronics",
        clicks: 156,
        expires_at: "2024-07-01",
    },
    RecentLinkRecord {
        id: 2,
        title: "Fashion Week Special",
        category: "Fashion & Accessories",
        clicks: 89,
        expires_at: "2024-06-15",
    },
    RecentLinkRecord {
        id: 3,
        title: "Home Decor Deals",
        category: "Home & Kitchen",
        clicks: 245,
        expires_at: "2024-06-30",
    },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        path: routes::LINK_NEW,
        label: "Add New Link",
        variant: ButtonVariant::OutlinePrimary,
        icon: None,
    },
    QuickAction {
        path: routes::CHANNEL_SETTINGS,
        label: "Channel Settings",
        variant: ButtonVariant::Outline,
        icon: Some(NavIcon::Channels),
    },
    QuickAction {
        path: routes::BILLING,
        label: "Upgrade to Pro",
        variant: ButtonVariant::Outline,
        icon: Some(NavIcon::Billing),
    },
];

// =============================================================================
// LANDING
// =============================================================================

pub const LANDING_HEADLINE: &str = "Welcome to LinkDir";
pub const LANDING_TAGLINE: &str = "Your link management solution";
pub const LANDING_CTA: &str = "Get Started";

pub const LANDING_STATS: &[LandingStat] = &[
    LandingStat { title: "Channels", value: "1.2K", description: "Curated link directories" },
    LandingStat { title: "Links Shared", value: "48K", description: "Across every category" },
    LandingStat { title: "Monthly Clicks", value: "2.6M", description: "Tracked per link" },
];

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        title: "Organize by Channel",
        body: "Group links into channels and categories your audience can browse.",
    },
    FeatureCard {
        title: "Track Every Click",
        body: "See which links perform and which ones are about to expire.",
    },
    FeatureCard {
        title: "Stay in Control",
        body: "Review reported links and keep your directory trustworthy.",
    },
];

pub const FOOTER_TEXT: &str = "LinkDir. All rights reserved.";
