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
                    .table(OnDemandFeature::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OnDemandFeature::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OnDemandFeature::OnDemandFeatureGroupId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OnDemandFeature::Description).text().not_null())
                    .col(ColumnDef::new(OnDemandFeature::Name).string().not_null())
                    .col(ColumnDef::new(OnDemandFeature::Type).string().not_null())
                    .col(
                        ColumnDef::new(OnDemandFeature::PrimaryColumn)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-on_demand_feature-on_demand_feature_group")
                            .from(
                                OnDemandFeature::Table,
                                OnDemandFeature::OnDemandFeatureGroupId,
                            )
                            .to(OnDemandFeatureGroup::Table, OnDemandFeatureGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OnDemandFeature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OnDemandFeature {
    Table,
    Id,
    OnDemandFeatureGroupId,
    Description,
    Name,
    Type,
    PrimaryColumn,
}

#[derive(DeriveIden)]
enum OnDemandFeatureGroup {
    Table,
    Id,
}
