pub mod health;
pub mod overlay;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /apply-sheet                                     generate overlay (POST)
/// /hotspots                                        hotspot table (GET)
/// /sheets                                          sheet catalog (GET)
/// ```
///
/// Everything else under the server root is served from the public
/// directory, including generated files under `/overlays`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(overlay::router())
}
