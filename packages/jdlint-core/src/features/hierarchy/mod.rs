//! Hierarchy walker (primary tree traversal and registry building)

pub mod walker;

pub use walker::{HierarchyWalker, WalkOutcome};
