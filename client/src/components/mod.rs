//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of their props: literal records in,
//! markup out. None of them read or write shared state.

pub mod dashboard_layout;
pub mod nav_icon;
pub mod nav_menu;
pub mod quick_actions;
pub mod recent_links_table;
pub mod stats_summary;
pub mod theme_toggle;
pub mod user_menu;
