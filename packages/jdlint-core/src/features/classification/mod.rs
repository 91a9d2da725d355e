//! Path classification (folder-name grammar per hierarchy level)

mod grammar;

pub mod classifier;

pub use classifier::{classify_area, classify_category, classify_id, Classification};
