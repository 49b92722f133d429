//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks its literal data and delegates rendering details to
//! `components`. Dashboard pages render inside `DashboardLayout` via the
//! router's parent route.

pub mod component_test;
pub mod dashboard;
pub mod landing;
pub mod placeholder;
