//! Ports - seams where callers plug behaviour into the engine

pub mod ignore;

pub use ignore::{IgnoreFilter, NoIgnore};
