/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod alerts;
pub mod consts;
pub mod database;
pub mod features;
pub mod input;
pub mod query;
pub mod types;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!(ip = %cli.ip, port = cli.port, "Starting Lumen Server");

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
