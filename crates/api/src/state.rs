use std::sync::Arc;

use roomsheet_core::error::CoreError;
use roomsheet_core::hotspot::HotspotTable;
use roomsheet_core::sheet::SheetCatalog;

use crate::config::ServerConfig;
use crate::storage::OverlayStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hotspot name → marker + rectangle rule.
    pub hotspots: Arc<HotspotTable>,
    /// Sheets offered to the picker.
    pub sheets: Arc<SheetCatalog>,
    /// Writer for generated overlay files.
    pub overlays: Arc<OverlayStore>,
}

impl AppState {
    /// Build state from configuration, loading the hotspot table and sheet
    /// catalog from disk when configured.
    pub fn from_config(config: ServerConfig) -> Result<Self, CoreError> {
        let hotspots = match &config.hotspot_config {
            Some(path) => HotspotTable::load(path)?,
            None => HotspotTable::default(),
        };
        let sheets = match &config.sheet_catalog {
            Some(path) => SheetCatalog::load(path)?,
            None => SheetCatalog::default(),
        };
        let overlays = OverlayStore::new(config.overlay_dir(), config.overlay_subdir.clone());

        Ok(Self {
            config: Arc::new(config),
            hotspots: Arc::new(hotspots),
            sheets: Arc::new(sheets),
            overlays: Arc::new(overlays),
        })
    }
}
