//! Route paths referenced by navigation, quick actions, and table rows.
//!
//! Every path here is registered with the router in `app`, even when the
//! target only renders a placeholder.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const COMPONENT_TEST: &str = "/test";
pub const DASHBOARD: &str = "/dashboard";
pub const CHANNELS: &str = "/dashboard/channels";
pub const ACCOUNT: &str = "/dashboard/account";
pub const BILLING: &str = "/dashboard/billing";
pub const CHANNEL_NEW: &str = "/dashboard/channels/new";
pub const LINK_NEW: &str = "/dashboard/channels/links/new";
pub const CHANNEL_SETTINGS: &str = "/dashboard/channels/settings";

/// Path of the edit screen for link `id`.
pub fn link_edit_path(id: u32) -> String {
    format!("{CHANNELS}/links/{id}/edit")
}
