/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::project_service_alert::{
    AlertSeverity, AlertType, ProjectService, ProjectServiceAlertStatus,
};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Select,
};

use super::query::*;
use super::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertFilter {
    Type,
    Status,
    Severity,
    Service,
    Created,
    CreatedGt,
    CreatedLt,
}

impl FilterSpec for AlertFilter {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "TYPE" => Some(AlertFilter::Type),
            "STATUS" => Some(AlertFilter::Status),
            "SEVERITY" => Some(AlertFilter::Severity),
            "SERVICE" => Some(AlertFilter::Service),
            "CREATED" => Some(AlertFilter::Created),
            "CREATED_GT" | "DATE_CREATED_GT" => Some(AlertFilter::CreatedGt),
            "CREATED_LT" | "DATE_CREATED_LT" => Some(AlertFilter::CreatedLt),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AlertFilter::Type => "TYPE",
            AlertFilter::Status => "STATUS",
            AlertFilter::Severity => "SEVERITY",
            AlertFilter::Service => "SERVICE",
            AlertFilter::Created => "CREATED",
            AlertFilter::CreatedGt => "CREATED_GT",
            AlertFilter::CreatedLt => "CREATED_LT",
        }
    }

    fn default_param(&self) -> &'static str {
        match self {
            AlertFilter::Type => AlertType::ProjectAlert.into(),
            AlertFilter::Status => ProjectServiceAlertStatus::JobFailed.into(),
            AlertFilter::Severity => AlertSeverity::Info.into(),
            AlertFilter::Service => ProjectService::Jobs.into(),
            AlertFilter::Created | AlertFilter::CreatedGt | AlertFilter::CreatedLt => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertSort {
    Id,
    Type,
    Status,
    Severity,
    Created,
}

impl AlertSort {
    pub fn column(&self) -> CProjectServiceAlert {
        match self {
            AlertSort::Id => CProjectServiceAlert::Id,
            AlertSort::Type => CProjectServiceAlert::AlertType,
            AlertSort::Status => CProjectServiceAlert::Status,
            AlertSort::Severity => CProjectServiceAlert::Severity,
            AlertSort::Created => CProjectServiceAlert::CreatedAt,
        }
    }
}

impl SortSpec for AlertSort {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "ID" => Some(AlertSort::Id),
            "TYPE" => Some(AlertSort::Type),
            "STATUS" => Some(AlertSort::Status),
            "SEVERITY" => Some(AlertSort::Severity),
            "CREATED" => Some(AlertSort::Created),
            _ => None,
        }
    }

    fn default_order(&self) -> SortOrder {
        match self {
            AlertSort::Created => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

pub async fn find_by_project_and_id(
    db: &DatabaseConnection,
    project: &MProject,
    id: i32,
) -> Result<Option<MProjectServiceAlert>, DbErr> {
    EProjectServiceAlert::find()
        .filter(
            Condition::all()
                .add(CProjectServiceAlert::Project.eq(project.id))
                .add(CProjectServiceAlert::Id.eq(id)),
        )
        .one(db)
        .await
}

/// At most one alert exists per project and status.
pub async fn find_by_project_and_status(
    db: &DatabaseConnection,
    project: &MProject,
    status: ProjectServiceAlertStatus,
) -> Result<Option<MProjectServiceAlert>, DbErr> {
    EProjectServiceAlert::find()
        .filter(
            Condition::all()
                .add(CProjectServiceAlert::Project.eq(project.id))
                .add(CProjectServiceAlert::Status.eq(status)),
        )
        .one(db)
        .await
}

pub fn filter_expr(filter: &FilterBy<AlertFilter>) -> QueryResult<SimpleExpr> {
    Ok(match filter.kind {
        AlertFilter::Type => {
            CProjectServiceAlert::AlertType.is_in(filter.enum_values::<AlertType>()?)
        }
        AlertFilter::Status => CProjectServiceAlert::Status
            .is_in(filter.enum_values::<ProjectServiceAlertStatus>()?),
        AlertFilter::Severity => {
            CProjectServiceAlert::Severity.is_in(filter.enum_values::<AlertSeverity>()?)
        }
        AlertFilter::Service => {
            CProjectServiceAlert::Service.is_in(filter.enum_values::<ProjectService>()?)
        }
        AlertFilter::Created => CProjectServiceAlert::CreatedAt.eq(filter.date_value()?),
        AlertFilter::CreatedGt => CProjectServiceAlert::CreatedAt.gt(filter.date_value()?),
        AlertFilter::CreatedLt => CProjectServiceAlert::CreatedAt.lt(filter.date_value()?),
    })
}

/// Builds the project scoped, filtered and sorted alert query without running it.
pub fn alerts_query(
    project: &MProject,
    filters: &[FilterBy<AlertFilter>],
    sorts: &[SortBy<AlertSort>],
) -> QueryResult<Select<EProjectServiceAlert>> {
    let mut condition = Condition::all().add(CProjectServiceAlert::Project.eq(project.id));

    for filter in filters {
        condition = condition.add(filter_expr(filter)?);
    }

    let mut query = EProjectServiceAlert::find().filter(condition);

    for sort in sorts {
        query = query.order_by(sort.kind.column(), sort.order.into());
    }

    Ok(query)
}

pub async fn find_all_project_alerts(
    db: &DatabaseConnection,
    page: Page,
    filters: &[FilterBy<AlertFilter>],
    sorts: &[SortBy<AlertSort>],
    project: &MProject,
) -> QueryResult<CollectionInfo<MProjectServiceAlert>> {
    let query = alerts_query(project, filters, sorts)?;

    tracing::debug!(
        project = project.id,
        filters = filters.len(),
        sorts = sorts.len(),
        offset = ?page.offset,
        limit = ?page.limit,
        "Listing project alerts"
    );

    find_all(db, query, page).await
}
