//! Overlay filename convention.
//!
//! Convention: `overlay_{hotspot}_{millis}_{suffix}.png`
//!
//! - `hotspot` = lowercase hotspot name, anything outside `[a-z0-9]` becomes `_`
//! - `millis` = Unix timestamp in milliseconds at generation time
//! - `suffix` = 32 hex chars of a random UUID, so two requests landing in
//!   the same millisecond still get distinct names

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Filename prefix shared by every generated overlay.
pub const OVERLAY_PREFIX: &str = "overlay_";

/// Extension of generated overlays (always PNG to keep the alpha channel).
pub const OVERLAY_EXTENSION: &str = "png";

/// Build an overlay filename from its parts.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use roomsheet_core::naming::overlay_filename;
///
/// let at = chrono::Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
/// assert_eq!(
///     overlay_filename("Floor", at, "abc123"),
///     "overlay_floor_1700000000123_abc123.png"
/// );
/// ```
pub fn overlay_filename(hotspot_name: &str, at: DateTime<Utc>, suffix: &str) -> String {
    format!(
        "{OVERLAY_PREFIX}{}_{}_{suffix}.{OVERLAY_EXTENSION}",
        slug(hotspot_name),
        at.timestamp_millis()
    )
}

/// Build a fresh, collision-free overlay filename for `hotspot_name`.
pub fn unique_overlay_filename(hotspot_name: &str) -> String {
    overlay_filename(
        hotspot_name,
        Utc::now(),
        &Uuid::new_v4().simple().to_string(),
    )
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
