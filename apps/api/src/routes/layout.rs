//! Axum route handler for the Layout API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::layout::{compose_document, ComposedDocument};
use crate::models::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub resume: ResumeDocument,
    /// Partial or full style. Fields left out keep the server's configured style.
    #[serde(default)]
    pub style: Option<Value>,
}

/// POST /api/v1/layout
///
/// Composes the résumé into pages of positioned draw instructions plus a
/// per-page fill report. Layout is CPU-bound, so it runs on the blocking pool.
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<ComposedDocument>, AppError> {
    let style = match request.style {
        Some(overrides) => state
            .style
            .with_overrides(overrides)
            .map_err(|e| AppError::Validation(format!("Invalid style: {e}")))?,
        None => state.style.as_ref().clone(),
    };
    let resume = request.resume;

    let composed = tokio::task::spawn_blocking(move || compose_document(&resume, &style))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout: {e}")))??;

    info!(pages = composed.pages.len(), "Layout request served");
    Ok(Json(composed))
}
