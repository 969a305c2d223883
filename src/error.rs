/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - collaborator 不在 / render 失敗を統一的に 500 に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::render::RenderError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A required collaborator was not wired into the application state.
    #[error("{collaborator} service is not available")]
    CollaboratorUnavailable { collaborator: &'static str },
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

impl AppError {
    pub fn unavailable(collaborator: &'static str) -> Self {
        Self::CollaboratorUnavailable { collaborator }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::CollaboratorUnavailable { .. } => "COLLABORATOR_UNAVAILABLE",
            AppError::Render(_) => "RENDER_FAILED",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the log; clients only see the code.
        tracing::error!(error = %self, "request failed");

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: "internal server error".into(),
            },
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
