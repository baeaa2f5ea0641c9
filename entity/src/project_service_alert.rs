/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    DeriveActiveEnum,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Deserialize,
    Serialize,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AlertType {
    #[sea_orm(num_value = 0)]
    ProjectAlert,
    #[sea_orm(num_value = 1)]
    SystemAlert,
    #[sea_orm(num_value = 2)]
    GlobalAlertEmail,
    #[sea_orm(num_value = 3)]
    GlobalAlertSlack,
    #[sea_orm(num_value = 4)]
    GlobalAlertPagerduty,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    DeriveActiveEnum,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Deserialize,
    Serialize,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ProjectServiceAlertStatus {
    #[sea_orm(num_value = 0)]
    JobFinished,
    #[sea_orm(num_value = 1)]
    JobFailed,
    #[sea_orm(num_value = 2)]
    JobKilled,
    #[sea_orm(num_value = 3)]
    ValidationSuccess,
    #[sea_orm(num_value = 4)]
    ValidationWarning,
    #[sea_orm(num_value = 5)]
    ValidationFailure,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    DeriveActiveEnum,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Deserialize,
    Serialize,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AlertSeverity {
    #[sea_orm(num_value = 0)]
    Critical,
    #[sea_orm(num_value = 1)]
    Warning,
    #[sea_orm(num_value = 2)]
    Info,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    DeriveActiveEnum,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Deserialize,
    Serialize,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ProjectService {
    #[sea_orm(num_value = 0)]
    Jobs,
    #[sea_orm(num_value = 1)]
    Featurestore,
    #[sea_orm(num_value = 2)]
    Kafka,
    #[sea_orm(num_value = 3)]
    Jupyter,
    #[sea_orm(num_value = 4)]
    Serving,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "project_service_alert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project: i32,
    pub service: ProjectService,
    pub status: ProjectServiceAlertStatus,
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub receiver: String,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::Project",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
