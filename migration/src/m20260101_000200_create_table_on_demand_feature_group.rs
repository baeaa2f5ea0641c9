/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OnDemandFeatureGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnDemandFeatureGroup::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OnDemandFeatureGroup::Name).string().not_null())
                    .col(
                        ColumnDef::new(OnDemandFeatureGroup::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OnDemandFeatureGroup::Query).text().not_null())
                    .col(ColumnDef::new(OnDemandFeatureGroup::DataFormat).string())
                    .col(ColumnDef::new(OnDemandFeatureGroup::Path).string())
                    .col(
                        ColumnDef::new(OnDemandFeatureGroup::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OnDemandFeatureGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OnDemandFeatureGroup {
    Table,
    Id,
    Name,
    Description,
    Query,
    DataFormat,
    Path,
    CreatedAt,
}
