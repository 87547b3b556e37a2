//! Domain logic for the room sheet studio.
//!
//! Everything here is free of HTTP and filesystem side effects except the
//! explicit loaders (`HotspotTable::load`, `SheetCatalog::load`), so the
//! API server and the studio client can share it.

pub mod assets;
pub mod compositor;
pub mod error;
pub mod hotspot;
pub mod naming;
pub mod sheet;
pub mod wire;
