/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use lumen_core::init_state;
use lumen_core::types::Cli;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let _guard = if cli.report_errors {
        Some(sentry::init(sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    } else {
        None
    };

    tracing::debug!(report_errors = cli.report_errors, "configuration loaded");

    let state = init_state(cli).await?;

    web::serve_web(Arc::clone(&state)).await?;

    tracing::info!("Lumen Server stopped");

    Ok(())
}
