//! Client-side overlay and compare controller for the room sheet studio.
//!
//! The controller is UI-toolkit agnostic: it owns an explicit
//! [`StudioState`](studio::StudioState), turns user intents (open picker,
//! select sheet, drag the compare handle) into state transitions and
//! exposes plain view data (marker positions, clip paths, selection rows)
//! for whatever renders it.

pub mod config;
pub mod error;
pub mod markers;
pub mod slider;
pub mod source;
pub mod studio;
