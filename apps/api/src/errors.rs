use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the layout core.
///
/// Only geometry contract violations are errors. Missing résumé fields and
/// oversized blocks are absorbed by the renderers and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid layout in {block}: {reason}")]
    InvalidLayout { block: String, reason: String },
}

impl LayoutError {
    pub fn invalid(block: impl Into<String>, reason: impl Into<String>) -> Self {
        LayoutError::InvalidLayout {
            block: block.into(),
            reason: reason.into(),
        }
    }

    /// Re-labels the error with the block that was being laid out when it occurred.
    pub fn in_block(self, label: &str) -> Self {
        match self {
            LayoutError::InvalidLayout { reason, .. } => LayoutError::InvalidLayout {
                block: label.to_string(),
                reason,
            },
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Layout(e) => {
                tracing::warn!("Layout rejected: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_LAYOUT",
                    e.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_block_relabels_error() {
        let err = LayoutError::invalid("text", "max width must be positive").in_block("work: Acme");
        assert_eq!(
            err,
            LayoutError::InvalidLayout {
                block: "work: Acme".to_string(),
                reason: "max width must be positive".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid layout in work: Acme: max width must be positive"
        );
    }

    #[test]
    fn test_layout_error_maps_to_422() {
        let response = AppError::from(LayoutError::invalid("style", "bad")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let response = AppError::Validation("empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
