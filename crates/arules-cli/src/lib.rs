//! Shared CLI infrastructure: logging setup and summary rendering.

pub mod logging;
pub mod summary;
