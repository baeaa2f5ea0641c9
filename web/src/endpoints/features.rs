/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::{Path, State};
use lumen_core::features::*;
use lumen_core::types::*;
use std::sync::Arc;

async fn load_group(state: &ServerState, group_id: i32) -> WebResult<MOnDemandFeatureGroup> {
    get_feature_group(&state.db, group_id)
        .await?
        .ok_or_else(|| WebError::not_found("Feature group"))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Path(group_id): Path<i32>,
) -> WebResult<Json<BaseResponse<Vec<MOnDemandFeature>>>> {
    let group = load_group(&state, group_id).await?;
    let features = get_features_by_group(&state.db, &group).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: features,
    }))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Path(group_id): Path<i32>,
    Json(body): Json<Vec<FeatureDefinition>>,
) -> WebResult<Json<BaseResponse<Vec<MOnDemandFeature>>>> {
    let group = load_group(&state, group_id).await?;
    let features = add_features(&state.db, &group, body).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: features,
    }))
}

pub async fn get_feature(
    state: State<Arc<ServerState>>,
    Path((group_id, feature_id)): Path<(i32, i32)>,
) -> WebResult<Json<BaseResponse<MOnDemandFeature>>> {
    let group = load_group(&state, group_id).await?;

    let feature = get_feature_by_id(&state.db, &group, feature_id)
        .await?
        .ok_or_else(|| WebError::not_found("Feature"))?;

    Ok(Json(BaseResponse {
        error: false,
        message: feature,
    }))
}
