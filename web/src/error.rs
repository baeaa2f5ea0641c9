/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lumen_core::query::QueryError;
use lumen_core::types::BaseResponse;
use sea_orm::DbErr;
use std::fmt;

pub type WebResult<T> = Result<T, WebError>;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    NotFound(String),
    Database(DbErr),
    Query(QueryError),
}

impl WebError {
    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn invalid_parameter(name: &str, reason: impl fmt::Display) -> Self {
        WebError::BadRequest(format!("Invalid {}: {}", name, reason))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) | WebError::Query(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) | WebError::NotFound(msg) => f.write_str(msg),
            WebError::Query(err) => write!(f, "{}", err),
            WebError::Database(err) => write!(f, "storage failure: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::Query(err) => Some(err),
            WebError::BadRequest(_) | WebError::NotFound(_) => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<QueryError> for WebError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Database(err) => WebError::Database(err),
            err => WebError::Query(err),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            WebError::Database(err) => {
                tracing::error!(error = %err, "request failed on the database");
                "Internal storage failure".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(BaseResponse { error: true, message })).into_response()
    }
}
