//! Johnny Decimal numbers at each level of the hierarchy
//!
//! - `AreaKey`: the decade digit, `"1"` for `10-19`
//! - `CategoryKey`: two digits, `"11"`
//! - `IdKey`: category plus two digits, `"11.01"`
//!
//! Keys are only built from grammar captures, so their shape is already
//! guaranteed by the time one exists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decade digit identifying an Area.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaKey(String);

impl AreaKey {
    pub fn new(digit: impl Into<String>) -> Self {
        Self(digit.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human form of the area, e.g. `10-19`.
    pub fn range(&self) -> String {
        format!("{0}0-{0}9", self.0)
    }
}

impl fmt::Display for AreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-digit Category number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The area this category belongs to by number.
    pub fn area(&self) -> AreaKey {
        AreaKey::new(&self.0[..1])
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `AC.ID` number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdKey(String);

impl IdKey {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn from_parts(category: &str, id: &str) -> Self {
        Self(format!("{}.{}", category, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category this ID belongs to by number.
    pub fn category(&self) -> CategoryKey {
        CategoryKey::new(&self.0[..2])
    }

    /// `AC.01` is reserved for the category inbox.
    pub fn is_inbox(&self) -> bool {
        self.0.ends_with(".01")
    }
}

impl fmt::Display for IdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_range() {
        assert_eq!(AreaKey::new("1").range(), "10-19");
        assert_eq!(AreaKey::new("9").range(), "90-99");
    }

    #[test]
    fn test_category_area() {
        assert_eq!(CategoryKey::new("42").area(), AreaKey::new("4"));
    }

    #[test]
    fn test_id_parts() {
        let id = IdKey::from_parts("11", "01");
        assert_eq!(id.as_str(), "11.01");
        assert_eq!(id.category(), CategoryKey::new("11"));
        assert!(id.is_inbox());
        assert!(!IdKey::new("11.11").is_inbox());
    }

    #[test]
    fn test_keys_serialize_as_plain_strings() {
        let json = serde_json::to_string(&IdKey::new("11.01")).unwrap();
        assert_eq!(json, "\"11.01\"");
    }
}
