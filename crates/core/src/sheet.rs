//! Sheet (texture) catalog.
//!
//! The category is organizational only; any sheet may be applied to any
//! hotspot.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Grouping used by the picker UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetCategory {
    Wall,
    Floor,
    Pillar,
}

/// A decorative texture swatch, addressed by a path under the public root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: u32,
    pub name: String,
    pub path: String,
    pub category: SheetCategory,
}

/// The set of sheets offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCatalog {
    sheets: Vec<Sheet>,
}

impl Default for SheetCatalog {
    fn default() -> Self {
        let entries = [
            (1, "Wall Sheet 1", "assets/sheets/wall1.png", SheetCategory::Wall),
            (2, "Wall Sheet 2", "assets/sheets/wall2.png", SheetCategory::Wall),
            (3, "Wall Sheet 3", "assets/sheets/wall3.png", SheetCategory::Wall),
            (4, "Floor Sheet 1", "assets/sheets/bed1.png", SheetCategory::Floor),
            (5, "Floor Sheet 2", "assets/sheets/bed2.png", SheetCategory::Floor),
            (6, "Floor Sheet 3", "assets/sheets/bed3.png", SheetCategory::Floor),
            (7, "Pillar Sheet 1", "assets/sheets/pillar1.png", SheetCategory::Pillar),
            (8, "Pillar Sheet 2", "assets/sheets/pillar2.png", SheetCategory::Pillar),
            (9, "Pillar Sheet 3", "assets/sheets/pillar3.png", SheetCategory::Pillar),
        ];
        Self {
            sheets: entries
                .into_iter()
                .map(|(id, name, path, category)| Sheet {
                    id,
                    name: name.to_string(),
                    path: path.to_string(),
                    category,
                })
                .collect(),
        }
    }
}

impl SheetCatalog {
    /// Build a catalog, rejecting duplicate ids and blank paths.
    pub fn new(sheets: Vec<Sheet>) -> Result<Self, CoreError> {
        let mut ids = HashSet::new();
        for sheet in &sheets {
            if !ids.insert(sheet.id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate sheet id: {}",
                    sheet.id
                )));
            }
            if sheet.path.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "Sheet {} has an empty path",
                    sheet.id
                )));
            }
        }
        Ok(Self { sheets })
    }

    /// Parse a JSON array of sheets.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let sheets: Vec<Sheet> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid sheet catalog: {e}")))?;
        Self::new(sheets)
    }

    /// Load a JSON sheet catalog from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to read sheet catalog {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, id: u32) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Sheets belonging to `category`, in catalog order.
    pub fn by_category(&self, category: SheetCategory) -> Vec<&Sheet> {
        self.sheets
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_three_per_category() {
        let catalog = SheetCatalog::default();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.by_category(SheetCategory::Wall).len(), 3);
        assert_eq!(catalog.by_category(SheetCategory::Floor).len(), 3);
        assert_eq!(catalog.by_category(SheetCategory::Pillar).len(), 3);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = SheetCatalog::default();
        assert_eq!(catalog.get(4).unwrap().path, "assets/sheets/bed1.png");
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_value(SheetCategory::Pillar).unwrap();
        assert_eq!(json, "pillar");
    }

    #[test]
    fn catalog_parses_from_json() {
        let catalog = SheetCatalog::from_json_str(
            r#"[{"id": 10, "name": "Marble", "path": "assets/sheets/marble.png", "category": "floor"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.get(10).unwrap().category, SheetCategory::Floor);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let result = SheetCatalog::from_json_str(
            r#"[
                {"id": 1, "name": "A", "path": "a.png", "category": "wall"},
                {"id": 1, "name": "B", "path": "b.png", "category": "wall"}
            ]"#,
        );
        assert!(result.unwrap_err().to_string().contains("Duplicate sheet id"));
    }

    #[test]
    fn unknown_category_rejected() {
        let result = SheetCatalog::from_json_str(
            r#"[{"id": 1, "name": "A", "path": "a.png", "category": "ceiling"}]"#,
        );
        assert!(result.is_err());
    }
}
