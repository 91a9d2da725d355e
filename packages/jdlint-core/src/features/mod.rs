//! Feature modules, one per stage of a lint run
//!
//! classification -> hierarchy (+ duplicates) -> jdex -> reconcile

pub mod classification;
pub mod duplicates;
pub mod hierarchy;
pub mod jdex;
pub mod reconcile;
