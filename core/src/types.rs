/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Lumen", display_name = "Lumen", bin_name = "lumen-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "LUMEN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "LUMEN_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "LUMEN_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "LUMEN_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "LUMEN_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "LUMEN_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "100")]
    pub max_connections: u32,
    #[arg(long, env = "LUMEN_DEFAULT_PAGE_LIMIT", value_parser = greater_than_zero::<u64>, default_value = "50")]
    pub default_page_limit: u64,
    #[arg(long, env = "LUMEN_MAX_PAGE_LIMIT", value_parser = greater_than_zero::<u64>, default_value = "1000")]
    pub max_page_limit: u64,
    #[arg(long, env = "LUMEN_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EOnDemandFeature = on_demand_feature::Entity;
pub type EOnDemandFeatureGroup = on_demand_feature_group::Entity;
pub type EProject = project::Entity;
pub type EProjectServiceAlert = project_service_alert::Entity;

pub type MOnDemandFeature = on_demand_feature::Model;
pub type MOnDemandFeatureGroup = on_demand_feature_group::Model;
pub type MProject = project::Model;
pub type MProjectServiceAlert = project_service_alert::Model;

pub type AOnDemandFeature = on_demand_feature::ActiveModel;
pub type AOnDemandFeatureGroup = on_demand_feature_group::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AProjectServiceAlert = project_service_alert::ActiveModel;

pub type COnDemandFeature = on_demand_feature::Column;
pub type COnDemandFeatureGroup = on_demand_feature_group::Column;
pub type CProject = project::Column;
pub type CProjectServiceAlert = project_service_alert::Column;
