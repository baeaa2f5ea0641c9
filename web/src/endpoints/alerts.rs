/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::ListQuery;
use axum::Json;
use axum::extract::{Path, RawQuery, State};
use entity::project_service_alert::ProjectServiceAlertStatus;
use lumen_core::alerts::*;
use lumen_core::database::get_project_by_id;
use lumen_core::query::*;
use lumen_core::types::*;
use std::sync::Arc;

async fn load_project(state: &ServerState, project_id: i32) -> WebResult<MProject> {
    get_project_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Path(project_id): Path<i32>,
    RawQuery(query): RawQuery,
) -> WebResult<Json<BaseResponse<CollectionInfo<MProjectServiceAlert>>>> {
    let params = ListQuery::parse(query.as_deref()).map_err(WebError::BadRequest)?;
    let project = load_project(&state, project_id).await?;

    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(&params.filter_by);
    let sorts: Vec<SortBy<AlertSort>> = parse_sorts(&params.sort_by);
    let page = params.page(state.cli.default_page_limit, state.cli.max_page_limit);

    let alerts = find_all_project_alerts(&state.db, page, &filters, &sorts, &project).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: alerts,
    }))
}

pub async fn get_alert(
    state: State<Arc<ServerState>>,
    Path((project_id, alert_id)): Path<(i32, i32)>,
) -> WebResult<Json<BaseResponse<MProjectServiceAlert>>> {
    let project = load_project(&state, project_id).await?;

    let alert = find_by_project_and_id(&state.db, &project, alert_id)
        .await?
        .ok_or_else(|| WebError::not_found("Alert"))?;

    Ok(Json(BaseResponse {
        error: false,
        message: alert,
    }))
}

pub async fn get_alert_by_status(
    state: State<Arc<ServerState>>,
    Path((project_id, status)): Path<(i32, String)>,
) -> WebResult<Json<BaseResponse<MProjectServiceAlert>>> {
    let status: ProjectServiceAlertStatus = status.parse().map_err(|_| {
        WebError::invalid_parameter("status", format!("no alert status named `{}`", status))
    })?;

    let project = load_project(&state, project_id).await?;

    let alert = find_by_project_and_status(&state.db, &project, status)
        .await?
        .ok_or_else(|| WebError::not_found("Alert"))?;

    Ok(Json(BaseResponse {
        error: false,
        message: alert,
    }))
}
