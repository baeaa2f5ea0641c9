/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait};
use sea_orm_migration::prelude::*;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::types::*;

fn database_url(cli: &Cli) -> Result<String> {
    match (&cli.database_url_file, &cli.database_url) {
        (Some(path), _) => std::fs::read_to_string(path)
            .map(|url| url.trim().to_string())
            .with_context(|| format!("reading database url from {}", path)),
        (None, Some(url)) => Ok(url.clone()),
        (None, None) => anyhow::bail!("neither database_url nor database_url_file is set"),
    }
}

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url(cli)?);

    let sql_debug = cli.log_level == "debug";
    opt.sqlx_logging(sql_debug)
        .sqlx_logging_level(LevelFilter::Debug)
        .max_connections(cli.max_connections)
        .min_connections(cli.max_connections.min(5))
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800));

    let db = Database::connect(opt)
        .await
        .context("connecting to the alert database")?;
    Migrator::up(&db, None)
        .await
        .context("applying schema migrations")?;

    tracing::info!(max_connections = cli.max_connections, "database ready");

    Ok(db)
}

pub async fn get_project_by_id(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<Option<MProject>, DbErr> {
    EProject::find_by_id(project_id).one(db).await
}
