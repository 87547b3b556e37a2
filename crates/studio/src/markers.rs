//! Presentational views: hotspot markers and the selection summary.
//!
//! Markers live in display space (percentages of the rendered container)
//! and are unrelated to the pixel rectangles used for compositing.

use roomsheet_core::hotspot::HotspotTable;

use crate::studio::Selection;

/// Label shown for hotspots without a current sheet.
pub const NO_SELECTION: &str = "None";

/// A clickable hotspot dot positioned over the displayed image.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub hotspot: String,
    /// Percent of container width.
    pub left_pct: f64,
    /// Percent of container height.
    pub top_pct: f64,
    pub title: String,
}

impl MarkerView {
    /// Inline CSS placing the marker.
    pub fn style(&self) -> String {
        format!("left: {:.2}%; top: {:.2}%", self.left_pct, self.top_pct)
    }
}

/// One marker per hotspot, in table order.
pub fn marker_views(hotspots: &HotspotTable) -> Vec<MarkerView> {
    hotspots
        .iter()
        .map(|h| MarkerView {
            hotspot: h.name.clone(),
            left_pct: h.marker.x * 100.0,
            top_pct: h.marker.y * 100.0,
            title: format!("Click to customize {}", h.name),
        })
        .collect()
}

/// One `(hotspot, sheet label)` row per hotspot. Only the most recently
/// applied hotspot shows its sheet; everything else reads [`NO_SELECTION`].
pub fn selection_rows(hotspots: &HotspotTable, last: Option<&Selection>) -> Vec<(String, String)> {
    hotspots
        .iter()
        .map(|h| {
            let label = match last {
                Some(sel) if sel.hotspot == h.name => sel.sheet_name.clone(),
                _ => NO_SELECTION.to_string(),
            };
            (h.name.clone(), label)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn markers_follow_normalized_positions() {
        let markers = marker_views(&HotspotTable::default());
        assert_eq!(markers.len(), 3);

        let wall = &markers[0];
        assert_eq!(wall.hotspot, "Wall");
        assert!(approx(wall.left_pct, 95.0));
        assert!(approx(wall.top_pct, 15.0));
        assert_eq!(wall.title, "Click to customize Wall");
        assert_eq!(wall.style(), "left: 95.00%; top: 15.00%");
    }

    #[test]
    fn markers_are_independent_of_composite_rects() {
        // Floor marker sits at (0.40, 0.82) while its stamp starts at (0.20, 0.60).
        let floor = marker_views(&HotspotTable::default())
            .into_iter()
            .find(|m| m.hotspot == "Floor")
            .unwrap();
        assert!(approx(floor.left_pct, 40.0));
        assert!(approx(floor.top_pct, 82.0));
    }

    #[test]
    fn rows_default_to_none() {
        let rows = selection_rows(&HotspotTable::default(), None);
        assert!(rows.iter().all(|(_, label)| label == NO_SELECTION));
    }

    #[test]
    fn only_last_selection_is_shown() {
        let last = Selection {
            hotspot: "Floor".into(),
            sheet_name: "Floor Sheet 2".into(),
        };
        let rows = selection_rows(&HotspotTable::default(), Some(&last));
        assert_eq!(
            rows,
            vec![
                ("Wall".to_string(), "None".to_string()),
                ("Pillars".to_string(), "None".to_string()),
                ("Floor".to_string(), "Floor Sheet 2".to_string()),
            ]
        );
    }
}
