#![recursion_limit = "512"]

mod config;
mod error;
mod routes;


use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    report(run().await)
}

/// Log a startup or serve failure once and map it to the process exit code.
fn report(result: Result<(), ServerError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "linkdir server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let config = ServerConfig::from_env(&leptos_options.site_root)?;

    let app = routes::app(leptos_options, &config);
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind { addr: config.addr, source })?;

    tracing::info!(addr = %config.addr, site_root = %config.site_root.display(), "linkdir listening");
    axum::serve(listener, app).await?;
    Ok(())
}
