//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the API
//! and maps failures via [`AppError`](crate::error::AppError).

pub mod catalog;
pub mod overlay;
