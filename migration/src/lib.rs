/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260101_000000_create_table_project;
mod m20260101_000100_create_table_project_service_alert;
mod m20260101_000200_create_table_on_demand_feature_group;
mod m20260101_000300_create_table_on_demand_feature;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000000_create_table_project::Migration),
            Box::new(m20260101_000100_create_table_project_service_alert::Migration),
            Box::new(m20260101_000200_create_table_on_demand_feature_group::Migration),
            Box::new(m20260101_000300_create_table_on_demand_feature::Migration),
        ]
    }
}
