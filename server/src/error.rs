//! Startup and serve errors for the LinkDir server.

use std::net::SocketAddr;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Environment configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
