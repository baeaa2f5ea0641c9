/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;
pub mod requests;


use axum::Router;
use axum::routing::get;
use lumen_core::types::ServerState;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/health", get(endpoints::get_health))
        .route(
            "/api/project/{project}/alerts",
            get(endpoints::alerts::get),
        )
        .route(
            "/api/project/{project}/alerts/{alert}",
            get(endpoints::alerts::get_alert),
        )
        .route(
            "/api/project/{project}/alerts/status/{status}",
            get(endpoints::alerts::get_alert_by_status),
        )
        .route(
            "/api/featuregroup/{group}/features",
            get(endpoints::features::get).post(endpoints::features::post),
        )
        .route(
            "/api/featuregroup/{group}/features/{feature}",
            get(endpoints::features::get_feature),
        )
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!(address = %server_url, "Serving HTTP API");

    axum::serve(listener, app).await
}
