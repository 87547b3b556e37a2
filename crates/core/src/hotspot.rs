//! Hotspot table and geometry resolution.
//!
//! A hotspot carries two independent coordinate sets:
//!
//! - `marker`: where the clickable UI dot sits over the *displayed* image,
//!   as fractions of the container.
//! - `rect`: where the texture is stamped in the *natural-resolution* base
//!   image, as fractions of the base pixel dimensions.
//!
//! The two are never derived from one another.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Hotspot name: wall area.
pub const HOTSPOT_WALL: &str = "Wall";

/// Hotspot name: floor area.
pub const HOTSPOT_FLOOR: &str = "Floor";

/// Hotspot name: pillar area.
pub const HOTSPOT_PILLARS: &str = "Pillars";

/// Largest accepted rect fraction. Offsets and sizes are each at most one
/// base dimension, so a stamp never exceeds twice the base in either axis.
pub const MAX_RECT_FRACTION: f64 = 1.0;

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// Normalized marker position over the displayed image, `x` and `y` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPosition {
    pub x: f64,
    pub y: f64,
}

/// Target rectangle expressed as fractions of the base image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectRule {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Integer pixel rectangle inside (or partially outside) a base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// A named region of interest on a room image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub name: String,
    pub marker: MarkerPosition,
    pub rect: RectRule,
}

/// Ordered lookup table from hotspot name to its marker and rectangle rule.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotTable {
    hotspots: Vec<Hotspot>,
}

/* --------------------------------------------------------------------------
Geometry
-------------------------------------------------------------------------- */

impl RectRule {
    /// Apply the rule to a base image of `base_width × base_height` pixels.
    ///
    /// Each component is `floor(fraction * dimension)`. No clamping: a rule
    /// whose fractions sum past 1 yields a rectangle that overhangs the base.
    pub fn apply(&self, base_width: u32, base_height: u32) -> Rect {
        let w = f64::from(base_width);
        let h = f64::from(base_height);
        Rect {
            left: (self.left * w).floor() as u32,
            top: (self.top * h).floor() as u32,
            width: (self.width * w).floor() as u32,
            height: (self.height * h).floor() as u32,
        }
    }

    fn validate(&self, name: &str) -> Result<(), CoreError> {
        let parts = [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
        ];
        for (field, value) in parts {
            if !(0.0..=MAX_RECT_FRACTION).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "Hotspot '{name}': rect.{field} must be a fraction in [0, {MAX_RECT_FRACTION}] (got {value})"
                )));
            }
        }
        Ok(())
    }
}

impl Rect {
    /// Number of pixels covered by the rectangle.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether `(x, y)` falls inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let right = u64::from(self.left) + u64::from(self.width);
        let bottom = u64::from(self.top) + u64::from(self.height);
        x >= self.left && u64::from(x) < right && y >= self.top && u64::from(y) < bottom
    }
}

/* --------------------------------------------------------------------------
Table
-------------------------------------------------------------------------- */

impl Default for HotspotTable {
    fn default() -> Self {
        Self {
            hotspots: vec![
                Hotspot {
                    name: HOTSPOT_WALL.to_string(),
                    marker: MarkerPosition { x: 0.95, y: 0.15 },
                    rect: RectRule {
                        left: 0.10,
                        top: 0.05,
                        width: 0.40,
                        height: 0.50,
                    },
                },
                Hotspot {
                    name: HOTSPOT_PILLARS.to_string(),
                    marker: MarkerPosition { x: 0.80, y: 0.60 },
                    rect: RectRule {
                        left: 0.65,
                        top: 0.30,
                        width: 0.25,
                        height: 0.60,
                    },
                },
                Hotspot {
                    name: HOTSPOT_FLOOR.to_string(),
                    marker: MarkerPosition { x: 0.40, y: 0.82 },
                    rect: RectRule {
                        left: 0.20,
                        top: 0.60,
                        width: 0.60,
                        height: 0.35,
                    },
                },
            ],
        }
    }
}

impl HotspotTable {
    /// Build a table from explicit hotspots, validating names and fractions.
    pub fn new(hotspots: Vec<Hotspot>) -> Result<Self, CoreError> {
        if hotspots.is_empty() {
            return Err(CoreError::Validation(
                "Hotspot table must contain at least one hotspot".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for hotspot in &hotspots {
            if hotspot.name.trim().is_empty() {
                return Err(CoreError::Validation(
                    "Hotspot name must not be empty".to_string(),
                ));
            }
            if !seen.insert(hotspot.name.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Duplicate hotspot name: '{}'",
                    hotspot.name
                )));
            }
            let MarkerPosition { x, y } = hotspot.marker;
            if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
                return Err(CoreError::Validation(format!(
                    "Hotspot '{}': marker must lie within [0, 1] (got {x}, {y})",
                    hotspot.name
                )));
            }
            hotspot.rect.validate(&hotspot.name)?;
        }

        Ok(Self { hotspots })
    }

    /// Parse a JSON array of hotspots.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let hotspots: Vec<Hotspot> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid hotspot config: {e}")))?;
        Self::new(hotspots)
    }

    /// Load a JSON hotspot table from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to read hotspot config {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// Look up a hotspot by exact name.
    pub fn get(&self, name: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.name == name)
    }

    /// All hotspots in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter()
    }

    /// All hotspot names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.hotspots.iter().map(|h| h.name.as_str()).collect()
    }

    /// Resolve `name` to a pixel rectangle within a base image.
    pub fn resolve(&self, name: &str, base_width: u32, base_height: u32) -> Result<Rect, CoreError> {
        self.get(name)
            .map(|h| h.rect.apply(base_width, base_height))
            .ok_or_else(|| CoreError::UnknownHotspot(name.to_string()))
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- resolve --

    #[test]
    fn wall_uses_documented_fractions() {
        let table = HotspotTable::default();
        let rect = table.resolve(HOTSPOT_WALL, 1000, 800).unwrap();
        assert_eq!(
            rect,
            Rect {
                left: 100,
                top: 40,
                width: 400,
                height: 400
            }
        );
    }

    #[test]
    fn floor_uses_documented_fractions() {
        let table = HotspotTable::default();
        let rect = table.resolve(HOTSPOT_FLOOR, 1000, 800).unwrap();
        assert_eq!(
            rect,
            Rect {
                left: 200,
                top: 480,
                width: 600,
                height: 280
            }
        );
    }

    #[test]
    fn pillars_uses_documented_fractions() {
        let table = HotspotTable::default();
        let rect = table.resolve(HOTSPOT_PILLARS, 1000, 800).unwrap();
        assert_eq!(
            rect,
            Rect {
                left: 650,
                top: 240,
                width: 250,
                height: 480
            }
        );
    }

    #[test]
    fn fractions_are_floored() {
        let table = HotspotTable::default();
        // 0.10 * 333 = 33.3, 0.40 * 333 = 133.2, 0.05 * 99 = 4.95, 0.50 * 99 = 49.5
        let rect = table.resolve(HOTSPOT_WALL, 333, 99).unwrap();
        assert_eq!(
            rect,
            Rect {
                left: 33,
                top: 4,
                width: 133,
                height: 49
            }
        );
    }

    #[test]
    fn unknown_hotspot_rejected() {
        let table = HotspotTable::default();
        assert_matches!(
            table.resolve("Ceiling", 1000, 800),
            Err(CoreError::UnknownHotspot(name)) if name == "Ceiling"
        );
    }

    #[test]
    fn hotspot_names_are_case_sensitive() {
        let table = HotspotTable::default();
        assert_matches!(
            table.resolve("wall", 1000, 800),
            Err(CoreError::UnknownHotspot(_))
        );
    }

    #[test]
    fn overhanging_rule_is_not_clamped() {
        let table = HotspotTable::new(vec![Hotspot {
            name: "Edge".to_string(),
            marker: MarkerPosition { x: 0.5, y: 0.5 },
            rect: RectRule {
                left: 0.8,
                top: 0.8,
                width: 0.5,
                height: 0.5,
            },
        }])
        .unwrap();
        let rect = table.resolve("Edge", 100, 100).unwrap();
        assert_eq!(rect.left + rect.width, 130);
        assert_eq!(rect.top + rect.height, 130);
    }

    // -- Rect --

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect {
            left: 10,
            top: 20,
            width: 5,
            height: 5,
        };
        assert!(rect.contains(10, 20));
        assert!(rect.contains(14, 24));
        assert!(!rect.contains(15, 24));
        assert!(!rect.contains(14, 25));
        assert!(!rect.contains(9, 20));
        assert_eq!(rect.area(), 25);
    }

    // -- table loading --

    #[test]
    fn default_table_lists_three_hotspots() {
        let table = HotspotTable::default();
        assert_eq!(
            table.names(),
            vec![HOTSPOT_WALL, HOTSPOT_PILLARS, HOTSPOT_FLOOR]
        );
    }

    #[test]
    fn table_parses_from_json() {
        let json = r#"[
            {"name": "Ceiling", "marker": {"x": 0.5, "y": 0.05},
             "rect": {"left": 0.0, "top": 0.0, "width": 1.0, "height": 0.2}}
        ]"#;
        let table = HotspotTable::from_json_str(json).unwrap();
        let rect = table.resolve("Ceiling", 200, 100).unwrap();
        assert_eq!(
            rect,
            Rect {
                left: 0,
                top: 0,
                width: 200,
                height: 20
            }
        );
    }

    #[test]
    fn table_loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotspots.json");
        std::fs::write(
            &path,
            r#"[{"name": "Wall", "marker": {"x": 0.1, "y": 0.1},
                 "rect": {"left": 0.5, "top": 0.5, "width": 0.5, "height": 0.5}}]"#,
        )
        .unwrap();

        let table = HotspotTable::load(&path).unwrap();
        assert_eq!(table.names(), vec!["Wall"]);
    }

    #[test]
    fn duplicate_names_rejected() {
        let json = r#"[
            {"name": "Wall", "marker": {"x": 0.5, "y": 0.5},
             "rect": {"left": 0.0, "top": 0.0, "width": 0.5, "height": 0.5}},
            {"name": "Wall", "marker": {"x": 0.5, "y": 0.5},
             "rect": {"left": 0.5, "top": 0.5, "width": 0.5, "height": 0.5}}
        ]"#;
        let err = HotspotTable::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate hotspot name"));
    }

    #[test]
    fn negative_fraction_rejected() {
        let json = r#"[
            {"name": "Wall", "marker": {"x": 0.5, "y": 0.5},
             "rect": {"left": -0.1, "top": 0.0, "width": 0.5, "height": 0.5}}
        ]"#;
        assert_matches!(
            HotspotTable::from_json_str(json),
            Err(CoreError::Validation(msg)) if msg.contains("rect.left")
        );
    }

    #[test]
    fn oversized_fraction_rejected() {
        let json = r#"[
            {"name": "Wall", "marker": {"x": 0.5, "y": 0.5},
             "rect": {"left": 0.0, "top": 0.0, "width": 1e6, "height": 0.5}}
        ]"#;
        assert_matches!(
            HotspotTable::from_json_str(json),
            Err(CoreError::Validation(msg)) if msg.contains("rect.width")
        );
    }

    #[test]
    fn full_size_rule_accepted() {
        let table = HotspotTable::new(vec![Hotspot {
            name: "Whole".to_string(),
            marker: MarkerPosition { x: 0.5, y: 0.5 },
            rect: RectRule {
                left: 1.0,
                top: 0.0,
                width: 1.0,
                height: 1.0,
            },
        }])
        .unwrap();
        let rect = table.resolve("Whole", 40, 30).unwrap();
        assert_eq!((rect.left, rect.width, rect.height), (40, 40, 30));
    }

    #[test]
    fn marker_outside_unit_square_rejected() {
        let json = r#"[
            {"name": "Wall", "marker": {"x": 1.5, "y": 0.5},
             "rect": {"left": 0.1, "top": 0.0, "width": 0.5, "height": 0.5}}
        ]"#;
        assert_matches!(
            HotspotTable::from_json_str(json),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn empty_table_rejected() {
        assert_matches!(
            HotspotTable::from_json_str("[]"),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn malformed_json_rejected() {
        assert_matches!(
            HotspotTable::from_json_str("{not json"),
            Err(CoreError::Validation(msg)) if msg.starts_with("Invalid hotspot config")
        );
    }
}
