//! Common test utilities for jdlint-core
//!
//! Fixtures build throwaway trees in a `TempDir`; assertions compare
//! diagnostic lists by kind and rendered message.

#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::*;
pub use fixtures::*;
