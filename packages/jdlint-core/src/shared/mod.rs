//! Shared module - Common types used by every feature
//!
//! No filesystem access happens here.

pub mod models;
pub mod ports;

// Re-exports for convenience
pub use models::*;
pub use ports::{IgnoreFilter, NoIgnore};
