/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod alerts;
pub mod features;

use axum::Json;
use axum::http::{StatusCode, Uri};
use lumen_core::types::BaseResponse;

pub async fn get_health() -> Json<BaseResponse<String>> {
    Json(BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    })
}

pub async fn handle_404(uri: Uri) -> (StatusCode, Json<BaseResponse<String>>) {
    tracing::debug!(%uri, "No route");

    (
        StatusCode::NOT_FOUND,
        Json(BaseResponse {
            error: true,
            message: "Not Found".to_string(),
        }),
    )
}
