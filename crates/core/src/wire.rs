//! JSON bodies exchanged between the studio client and the overlay endpoint.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compositor::CompositeMode;
use crate::error::CoreError;
use crate::sheet::Sheet;

/// Error label for requests with absent or empty required fields.
pub const ERROR_MISSING_FIELDS: &str = "Missing required fields";

/// Texture descriptor as sent by the client.
///
/// Only `path` drives compositing. `id` and `name` are informational and
/// accepted in any JSON shape (`"id": 3`, `"id": "wall-1"`, `"name": null`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRef {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub path: String,
}

impl SheetRef {
    /// Display name, falling back to the path.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.path)
    }
}

impl From<&Sheet> for SheetRef {
    fn from(sheet: &Sheet) -> Self {
        Self {
            id: Value::from(sheet.id),
            name: Some(sheet.name.clone()),
            path: sheet.path.clone(),
        }
    }
}

/// Body of `POST /api/apply-sheet`.
///
/// Every field is optional at the serde level so that absent fields surface
/// as [`CoreError::MissingFields`] rather than a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySheetRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_sheet: Option<SheetRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CompositeMode>,
}

/// An [`ApplySheetRequest`] whose required fields are all present.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplySheet {
    pub base_image: String,
    pub hotspot_name: String,
    pub sheet: SheetRef,
    pub mode: CompositeMode,
}

impl ApplySheetRequest {
    /// Build a complete request for `sheet` applied to `hotspot_name`.
    pub fn new(base_image: impl Into<String>, hotspot_name: impl Into<String>, sheet: SheetRef) -> Self {
        Self {
            base_image: Some(base_image.into()),
            hotspot_name: Some(hotspot_name.into()),
            selected_sheet: Some(sheet),
            mode: None,
        }
    }

    /// Check that `baseImage`, `hotspotName` and `selectedSheet` (with a
    /// path) are present and non-empty.
    pub fn validate(self) -> Result<ApplySheet, CoreError> {
        let base_image = non_empty(self.base_image);
        let hotspot_name = non_empty(self.hotspot_name);
        let sheet = self.selected_sheet.filter(|s| !s.path.trim().is_empty());

        match (base_image, hotspot_name, sheet) {
            (Some(base_image), Some(hotspot_name), Some(sheet)) => Ok(ApplySheet {
                base_image,
                hotspot_name,
                sheet,
                mode: self.mode.unwrap_or_default(),
            }),
            (base_image, hotspot_name, sheet) => {
                let mut fields = Vec::new();
                if base_image.is_none() {
                    fields.push("baseImage");
                }
                if hotspot_name.is_none() {
                    fields.push("hotspotName");
                }
                if sheet.is_none() {
                    fields.push("selectedSheet");
                }
                Err(CoreError::MissingFields { fields })
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Successful response of `POST /api/apply-sheet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySheetResponse {
    pub success: bool,
    pub overlay_image_url: String,
    pub message: String,
}

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    /// Short category label, e.g. `"Missing required fields"`.
    pub error: String,
    /// Machine-readable code, e.g. `"MISSING_FIELDS"`.
    pub code: String,
    /// Human-readable detail.
    pub message: String,
}
