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
                    .table(ProjectServiceAlert::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectServiceAlert::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectServiceAlert::Project)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectServiceAlert::Service)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectServiceAlert::Status)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectServiceAlert::AlertType)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectServiceAlert::Severity)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectServiceAlert::Receiver)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectServiceAlert::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-project_service_alert-project")
                            .from(ProjectServiceAlert::Table, ProjectServiceAlert::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One alert per project and status
        manager
            .create_index(
                Index::create()
                    .name("idx-project_service_alert-project-status")
                    .table(ProjectServiceAlert::Table)
                    .col(ProjectServiceAlert::Project)
                    .col(ProjectServiceAlert::Status)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectServiceAlert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectServiceAlert {
    Table,
    Id,
    Project,
    Service,
    Status,
    AlertType,
    Severity,
    Receiver,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}
