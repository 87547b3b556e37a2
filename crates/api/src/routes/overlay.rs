//! Route definitions for overlay generation and the studio catalogs.
//!
//! ```text
//! POST   /apply-sheet                   apply_sheet
//! GET    /hotspots                      list_hotspots
//! GET    /sheets                        list_sheets
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{catalog, overlay};
use crate::state::AppState;

/// Overlay and catalog routes — mounted at `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apply-sheet", post(overlay::apply_sheet))
        .route("/hotspots", get(catalog::list_hotspots))
        .route("/sheets", get(catalog::list_sheets))
}
