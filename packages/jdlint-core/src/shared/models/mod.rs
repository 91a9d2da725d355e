//! Shared models (SSOT for keys, entries and registries)

pub mod entry;
pub mod number_key;
pub mod registry;

pub use entry::{compare_entries, Entry};
pub use number_key::{AreaKey, CategoryKey, IdKey};
pub use registry::{Registration, Registries, Registry};
