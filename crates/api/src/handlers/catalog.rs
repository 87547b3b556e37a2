//! Read-only catalog handlers: hotspots and sheets offered to the studio.

use axum::extract::State;
use axum::Json;
use roomsheet_core::hotspot::Hotspot;
use roomsheet_core::sheet::Sheet;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/hotspots
///
/// Returns every configured hotspot with its marker position and rectangle rule.
pub async fn list_hotspots(State(state): State<AppState>) -> Json<DataResponse<Vec<Hotspot>>> {
    Json(DataResponse::new(state.hotspots.iter().cloned().collect()))
}

/// GET /api/sheets
///
/// Returns the sheet catalog in display order.
pub async fn list_sheets(State(state): State<AppState>) -> Json<DataResponse<Vec<Sheet>>> {
    Json(DataResponse::new(state.sheets.iter().cloned().collect()))
}
