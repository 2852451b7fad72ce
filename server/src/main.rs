//! Path Guardian web server.
//!
//! Loads `.env`, configures tracing, resolves the Leptos site configuration
//! and serves the landing page until interrupted.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("path-guardian: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)))
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let conf = get_configuration(config.leptos_config.as_deref())
        .map_err(|e| ServerError::Config(format!("leptos configuration: {e}")))?;
    let leptos_options = conf.leptos_options;
    let addr = config.bind_addr(leptos_options.site_addr);

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "path-guardian listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("path-guardian stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
