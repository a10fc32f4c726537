use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream transport failures and malformed model output are distinct
/// variants on purpose: a parse failure must never be mistaken for the
/// AI endpoint being unreachable.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("AI service not configured. Please add ANTHROPIC_API_KEY to .env file")]
    AiNotConfigured,

    #[error("{0}")]
    Upstream(String),

    #[error("Invalid response format from AI: {0}")]
    MalformedModelOutput(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NotConfigured => AppError::AiNotConfigured,
            LlmError::Http(e) => AppError::Upstream(e.to_string()),
            LlmError::Api { message, .. } => AppError::Upstream(message),
            LlmError::EmptyContent => {
                AppError::MalformedModelOutput("model returned empty content".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // Persistence failures on the CRUD surface report the driver
            // message with a 400, matching the rest of the envelope contract.
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                StatusCode::BAD_REQUEST
            }
            AppError::AiNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(msg) => {
                tracing::error!("AI upstream error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MalformedModelOutput(msg) => {
                tracing::error!("Malformed model output: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Resume not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("personalInfo is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ai_errors_map_to_500() {
        assert_eq!(
            AppError::AiNotConfigured.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MalformedModelOutput("bad json".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_llm_api_error_becomes_upstream() {
        let err: AppError = LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Upstream(_)));
        assert_eq!(err.to_string(), "invalid x-api-key");
    }
}
