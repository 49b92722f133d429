//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos app with SSR, the compiled `/pkg`
//! assets, and a health probe. Paths the Leptos router does not know fall
//! through to `file_and_error_handler`, which serves site-root files or
//! renders the app's not-found view. Both the fallback and `/pkg` read from
//! the configured site root.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod health;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use linkdir_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the full application router.
pub fn app(mut leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    leptos_options.site_root = Arc::from(config.site_root.to_string_lossy().as_ref());

    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(file_and_error_handler(shell))
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(health::healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(config.site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
