//! Display records rendered by the dashboard and landing views.
//!
//! DESIGN
//! ======
//! Every record is an immutable, compiled-in value. Identity is list
//! position; nothing here is created, mutated, or validated at runtime.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use crate::routes;

// =============================================================================
// NAVIGATION
// =============================================================================

/// Glyph drawn next to a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Overview,
    Channels,
    Account,
    Billing,
}

impl NavIcon {
    /// SVG path data for the 24x24 outline icon.
    pub fn path_data(self) -> &'static str {
        match self {
            Self::Overview => {
                "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"
            }
            Self::Channels => {
                "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10"
            }
            Self::Account => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
            Self::Billing => "M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z",
        }
    }
}

/// A menu entry: where it goes, what it says, and which glyph it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

/// Entry in the header user dropdown. `path: None` renders an inert entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserMenuEntry {
    pub label: &'static str,
    pub path: Option<&'static str>,
}

// =============================================================================
// CHANNEL STATS
// =============================================================================

/// Headline counters for a channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelStats {
    pub total_links: u64,
    pub total_clicks: u64,
    pub active_links: u64,
    pub reported_links: u64,
}

/// Visual accent of a stat figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatAccent {
    Neutral,
    Primary,
    Success,
    Error,
}

impl StatAccent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Primary => "text-primary",
            Self::Success => "text-success",
            Self::Error => "text-error",
        }
    }
}

/// One labelled figure of a [`ChannelStats`] record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatEntry {
    /// Stable key used as the `data-stat` attribute.
    pub key: &'static str,
    pub label: &'static str,
    pub value: u64,
    pub accent: StatAccent,
}

impl ChannelStats {
    /// The four counters in display order: total, clicks, active, reported.
    pub fn entries(&self) -> [StatEntry; 4] {
        [
            StatEntry {
                key: "total-links",
                label: "Total Links",
                value: self.total_links,
                accent: StatAccent::Neutral,
            },
            StatEntry {
                key: "total-clicks",
                label: "Total Clicks",
                value: self.total_clicks,
                accent: StatAccent::Primary,
            },
            StatEntry {
                key: "active-links",
                label: "Active Links",
                value: self.active_links,
                accent: StatAccent::Success,
            },
            StatEntry {
                key: "reported-links",
                label: "Reported Links",
                value: self.reported_links,
                accent: StatAccent::Error,
            },
        ]
    }
}

// =============================================================================
// RECENT LINKS
// =============================================================================

/// A row of the recent-links table. `id` is only used as the row key and in
/// the edit path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentLinkRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub clicks: u64,
    pub expires_at: &'static str,
}

impl RecentLinkRecord {
    pub fn edit_path(&self) -> String {
        routes::link_edit_path(self.id)
    }
}

// =============================================================================
// QUICK ACTIONS
// =============================================================================

/// Button style. Purely visual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    OutlinePrimary,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::OutlinePrimary => "btn btn-outline btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Ghost => "btn btn-ghost",
            Self::Link => "btn btn-link",
        }
    }
}

/// Shortcut link shown above the recent-links table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub path: &'static str,
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub icon: Option<NavIcon>,
}

// =============================================================================
// LANDING
// =============================================================================

/// Headline figure on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingStat {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// Feature card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
}
