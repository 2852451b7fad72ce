//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos SSR landing page at `/`, the hydration bundle under the
//! site package directory, static assets (logo, favicon) from the site root,
//! and a health probe. Every request passes through tracing and compression.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router for the given Leptos options.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(&*leptos_options.site_root);
    let pkg_dir = site_root.join(&*leptos_options.site_pkg_dir);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
