//! Depth-scoped classification of a single folder name
//!
//! For every node exactly one outcome holds:
//! 1. the name matches the grammar scoped to its real parent: `Valid`
//! 2. it has the right shape but its number belongs elsewhere: `WrongParent`
//! 3. neither: `Invalid`

use std::convert::Infallible;

use super::grammar::{AREA_RE, CATEGORY_RE, ID_RE};
use crate::shared::models::{AreaKey, CategoryKey, IdKey};

/// Outcome of classifying one name at one level.
///
/// `P` is the parent key type implied by the number. Areas have no parent,
/// so their `P` is `Infallible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<K, P> {
    Valid { key: K, label: String },
    WrongParent { expected_parent: P },
    Invalid,
}

impl<K, P> Classification<K, P> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Classification::Valid { .. })
    }
}

/// Classify a top-level folder name such as `10-19 Life Admin`.
pub fn classify_area(name: &str) -> Classification<AreaKey, Infallible> {
    match AREA_RE.captures(name) {
        Some(caps) if caps[1] == caps[2] => Classification::Valid {
            key: AreaKey::new(&caps[1]),
            label: caps[3].to_string(),
        },
        _ => Classification::Invalid,
    }
}

/// Classify a folder found inside area `parent`, e.g. `11 Me`.
pub fn classify_category(name: &str, parent: &AreaKey) -> Classification<CategoryKey, AreaKey> {
    let Some(caps) = CATEGORY_RE.captures(name) else {
        return Classification::Invalid;
    };
    let key = CategoryKey::new(&caps[1]);
    let implied = key.area();
    if &implied == parent {
        Classification::Valid {
            key,
            label: caps[3].to_string(),
        }
    } else {
        Classification::WrongParent {
            expected_parent: implied,
        }
    }
}

/// Classify a folder found inside category `parent`, e.g. `11.01 Inbox`.
pub fn classify_id(name: &str, parent: &CategoryKey) -> Classification<IdKey, CategoryKey> {
    let Some(caps) = ID_RE.captures(name) else {
        return Classification::Invalid;
    };
    let key = IdKey::from_parts(&caps[1], &caps[2]);
    let implied = key.category();
    if &implied == parent {
        Classification::Valid {
            key,
            label: caps[3].to_string(),
        }
    } else {
        Classification::WrongParent {
            expected_parent: implied,
        }
    }
}
