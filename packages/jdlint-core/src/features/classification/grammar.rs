//! Folder-name grammars, compiled once per process
//!
//! Scoped variants (a category under a given area, an ID under a given
//! category) share these patterns: a scoped match is a generic match whose
//! captured parent digits equal the actual parent key.

use once_cell::sync::Lazy;
use regex::Regex;

/// `d0-d9 <label>`; both decade digits are checked for equality by the caller
pub(crate) static AREA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9])0-([0-9])9 (.+)$").expect("area grammar"));

/// `<digit><digit> <label>`
pub(crate) static CATEGORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(([0-9])[0-9]) (.+)$").expect("category grammar"));

/// `<2 digits>.<2 digits> <label>`
pub(crate) static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9][0-9])\.([0-9][0-9]) (.+)$").expect("id grammar"));
