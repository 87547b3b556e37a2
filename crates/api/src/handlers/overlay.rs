//! Handler for `POST /api/apply-sheet`.
//!
//! Validates the request, stamps the chosen sheet into the hotspot's
//! rectangle on a canvas the size of the base image, stores the PNG under
//! the overlay directory and returns its URL.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use roomsheet_core::assets::{ENTITY_BASE_IMAGE, ENTITY_SHEET_IMAGE};
use roomsheet_core::compositor::render_overlay;
use roomsheet_core::error::CoreError;
use roomsheet_core::wire::{ApplySheetRequest, ApplySheetResponse};

use crate::assets::{read_public_file, require_public_file};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Message returned alongside a successful overlay.
const SUCCESS_MESSAGE: &str = "Overlay generated successfully";

/// POST /api/apply-sheet
///
/// Errors are ordered: missing fields (400), missing files (404), unknown
/// hotspot (400), unreadable image (422), storage failure (500).
pub async fn apply_sheet(
    State(state): State<AppState>,
    payload: Result<Json<ApplySheetRequest>, JsonRejection>,
) -> AppResult<Json<ApplySheetResponse>> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let request = body.validate()?;

    tracing::info!(
        base_image = %request.base_image,
        hotspot = %request.hotspot_name,
        sheet_id = %request.sheet.id,
        sheet_name = %request.sheet.label(),
        mode = ?request.mode,
        "Received apply-sheet request",
    );

    let public_dir = &state.config.public_dir;
    let base_path =
        require_public_file(public_dir, &request.base_image, ENTITY_BASE_IMAGE).await?;
    let sheet_path =
        require_public_file(public_dir, &request.sheet.path, ENTITY_SHEET_IMAGE).await?;

    if state.hotspots.get(&request.hotspot_name).is_none() {
        return Err(CoreError::UnknownHotspot(request.hotspot_name).into());
    }

    let base_bytes =
        read_public_file(&base_path, &request.base_image, ENTITY_BASE_IMAGE).await?;
    let sheet_bytes =
        read_public_file(&sheet_path, &request.sheet.path, ENTITY_SHEET_IMAGE).await?;

    let hotspots = Arc::clone(&state.hotspots);
    let hotspot_name = request.hotspot_name.clone();
    let mode = request.mode;
    let rendered = tokio::task::spawn_blocking(move || {
        render_overlay(&base_bytes, &sheet_bytes, &hotspots, &hotspot_name, mode)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Overlay task failed: {e}")))??;

    let stored = state
        .overlays
        .save(&request.hotspot_name, &rendered.png)
        .await?;

    tracing::info!(
        url = %stored.url,
        width = rendered.width,
        height = rendered.height,
        rect = ?rendered.rect,
        "Overlay created",
    );

    Ok(Json(ApplySheetResponse {
        success: true,
        overlay_image_url: stored.url,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
