//! Hotspot → picker → overlay → compare controller.
//!
//! ```text
//! Idle ──open_picker──▶ Picking ──select_sheet──▶ Applied ──pointer_down──▶ Comparing
//!   ▲                      │                         ▲                        │
//!   └──── cancel_picker ───┘                         └─────── pointer_up ─────┘
//! ```
//!
//! The picker closes as soon as a sheet is chosen; the overlay request then
//! runs without blocking further interaction. Responses are applied in
//! arrival order, so when requests overlap the last one to land wins. Only
//! one overlay layer exists at a time: a new one replaces the old outright.

use roomsheet_core::hotspot::HotspotTable;
use roomsheet_core::sheet::{Sheet, SheetCatalog};
use roomsheet_core::wire::{ApplySheetRequest, SheetRef};

use crate::config::StudioConfig;
use crate::error::StudioError;
use crate::markers::{marker_views, selection_rows, MarkerView};
use crate::slider::{CompareSlider, ContainerBounds, PointerInput};
use crate::source::{build_source, OverlaySource};

/// Where the interaction currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioPhase {
    Idle,
    Picking { hotspot: String },
    Applied,
    Comparing,
}

/// Last applied hotspot/sheet pair, for the selection summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub hotspot: String,
    pub sheet_name: String,
}

/// The single overlay layer drawn above the base image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayer {
    pub url: String,
    pub hotspot: String,
}

/// Picker contents for one hotspot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub title: String,
    /// Every sheet, regardless of category.
    pub options: Vec<Sheet>,
}

/// An overlay request that has left the picker but not yet come back.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingApply {
    pub hotspot: String,
    pub sheet_name: String,
    pub request: ApplySheetRequest,
}

/// Render-ready description of the overlay layer and compare handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub url: String,
    pub clip_path: String,
    pub handle_left: String,
}

/// All mutable studio state for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioState {
    pub phase: StudioPhase,
    pub base_image: String,
    pub overlay: Option<OverlayLayer>,
    pub last_selection: Option<Selection>,
    pub slider: CompareSlider,
    /// User-visible message from the most recent failed request.
    pub failure: Option<String>,
}

impl StudioState {
    pub fn new(base_image: impl Into<String>) -> Self {
        Self {
            phase: StudioPhase::Idle,
            base_image: base_image.into(),
            overlay: None,
            last_selection: None,
            slider: CompareSlider::default(),
            failure: None,
        }
    }

    /// Phase to fall back to once the picker closes or a drag ends.
    fn resting_phase(&self) -> StudioPhase {
        if self.overlay.is_some() {
            StudioPhase::Applied
        } else {
            StudioPhase::Idle
        }
    }
}

/// Controller owning the session state and the overlay source.
pub struct Studio {
    hotspots: HotspotTable,
    sheets: SheetCatalog,
    source: Box<dyn OverlaySource>,
    state: StudioState,
}

impl Studio {
    pub fn new(
        base_image: impl Into<String>,
        hotspots: HotspotTable,
        sheets: SheetCatalog,
        source: Box<dyn OverlaySource>,
    ) -> Self {
        Self {
            hotspots,
            sheets,
            source,
            state: StudioState::new(base_image),
        }
    }

    /// Build the configured source and load the catalogs through it.
    pub async fn connect(config: &StudioConfig) -> Result<Self, StudioError> {
        let source = build_source(&config.source)?;
        let hotspots = source.hotspots().await?;
        let sheets = source.sheets().await?;
        tracing::info!(
            source = source.kind(),
            hotspots = ?hotspots.names(),
            sheets = sheets.len(),
            "Studio connected"
        );
        Ok(Self::new(config.base_image.clone(), hotspots, sheets, source))
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn hotspots(&self) -> &HotspotTable {
        &self.hotspots
    }

    pub fn sheets(&self) -> &SheetCatalog {
        &self.sheets
    }

    // ---- views ----

    pub fn markers(&self) -> Vec<MarkerView> {
        marker_views(&self.hotspots)
    }

    pub fn selection_rows(&self) -> Vec<(String, String)> {
        selection_rows(&self.hotspots, self.state.last_selection.as_ref())
    }

    /// The overlay layer with its current clip, if one is applied.
    pub fn overlay_view(&self) -> Option<OverlayView> {
        self.state.overlay.as_ref().map(|layer| OverlayView {
            url: layer.url.clone(),
            clip_path: self.state.slider.clip_path(),
            handle_left: self.state.slider.handle_left(),
        })
    }

    // ---- picker ----

    /// Open the sheet picker for `hotspot`.
    pub fn open_picker(&mut self, hotspot: &str) -> Result<PickerView, StudioError> {
        if self.hotspots.get(hotspot).is_none() {
            return Err(StudioError::UnknownHotspot(hotspot.to_string()));
        }

        self.state.slider.end_drag();
        self.state.phase = StudioPhase::Picking {
            hotspot: hotspot.to_string(),
        };

        Ok(PickerView {
            title: format!("Select {hotspot} Sheet"),
            options: self.sheets.iter().cloned().collect(),
        })
    }

    /// Close the picker without choosing anything.
    pub fn cancel_picker(&mut self) {
        if matches!(self.state.phase, StudioPhase::Picking { .. }) {
            self.state.phase = self.state.resting_phase();
        }
    }

    /// Close the picker and build the request for `sheet`.
    pub fn begin_apply(&mut self, sheet: &Sheet) -> Result<PendingApply, StudioError> {
        let hotspot = match &self.state.phase {
            StudioPhase::Picking { hotspot } => hotspot.clone(),
            _ => return Err(StudioError::NotPicking),
        };
        self.state.phase = self.state.resting_phase();

        let request = ApplySheetRequest::new(
            self.state.base_image.clone(),
            hotspot.clone(),
            SheetRef::from(sheet),
        );
        tracing::debug!(%hotspot, sheet = %sheet.name, "Applying sheet");

        Ok(PendingApply {
            hotspot,
            sheet_name: sheet.name.clone(),
            request,
        })
    }

    /// Apply the outcome of a pending request.
    ///
    /// Success replaces the overlay layer, records the selection and resets
    /// the compare handle. Failure keeps the current overlay and records a
    /// visible message.
    pub fn finish_apply(
        &mut self,
        pending: PendingApply,
        outcome: Result<String, StudioError>,
    ) -> Result<(), StudioError> {
        match outcome {
            Ok(url) => {
                tracing::info!(hotspot = %pending.hotspot, %url, "Overlay applied");
                self.state.overlay = Some(OverlayLayer {
                    url,
                    hotspot: pending.hotspot.clone(),
                });
                self.state.last_selection = Some(Selection {
                    hotspot: pending.hotspot,
                    sheet_name: pending.sheet_name,
                });
                self.state.slider.reset();
                self.state.failure = None;
                if !matches!(self.state.phase, StudioPhase::Picking { .. }) {
                    self.state.phase = StudioPhase::Applied;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(hotspot = %pending.hotspot, error = %e, "Overlay request failed");
                self.state.failure = Some(format!(
                    "Could not apply {} to {}: {e}",
                    pending.sheet_name, pending.hotspot
                ));
                Err(e)
            }
        }
    }

    /// Choose `sheet` for the open picker and wait for the overlay.
    pub async fn select_sheet(&mut self, sheet: &Sheet) -> Result<(), StudioError> {
        let pending = self.begin_apply(sheet)?;
        let outcome = self.source.apply_sheet(&pending.request).await;
        self.finish_apply(pending, outcome)
    }

    /// Dismiss the failure message.
    pub fn clear_failure(&mut self) {
        self.state.failure = None;
    }

    // ---- compare handle ----

    /// Press on the compare handle. Ignored while no overlay is shown.
    pub fn pointer_down(&mut self) {
        if self.state.phase == StudioPhase::Applied {
            self.state.slider.begin_drag();
            self.state.phase = StudioPhase::Comparing;
        }
    }

    /// Pointer moved anywhere in the window. Returns the new handle position
    /// when it changed.
    pub fn pointer_move(&mut self, input: &PointerInput, bounds: ContainerBounds) -> Option<f64> {
        if self.state.phase != StudioPhase::Comparing {
            return None;
        }
        self.state.slider.drag(input, bounds)
    }

    /// Release the compare handle where it is.
    pub fn pointer_up(&mut self) {
        self.state.slider.end_drag();
        if self.state.phase == StudioPhase::Comparing {
            self.state.phase = StudioPhase::Applied;
        }
    }
}
