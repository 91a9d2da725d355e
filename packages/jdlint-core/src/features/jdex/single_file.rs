//! Single-file JDex layout
//!
//! One entry per line. Lines that match no grammar (headings, prose, blank
//! lines) are dropped without a diagnostic; this layout has no error channel.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::grammar::{parse_line, JdexLine};
use super::CanonicalTables;
use crate::errors::Result;

/// Read a single-file JDex into canonical tables.
///
/// A key declared twice keeps the label of its last line.
pub fn parse_single_file(path: &Path) -> Result<CanonicalTables> {
    let content = fs::read_to_string(path)?;
    Ok(parse_single_file_str(&content))
}

pub(crate) fn parse_single_file_str(content: &str) -> CanonicalTables {
    let mut tables = CanonicalTables::default();
    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(JdexLine::Area(key, label)) => {
                tables.areas.insert(key, label);
            }
            Some(JdexLine::Category(key, label)) => {
                tables.categories.insert(key, label);
            }
            Some(JdexLine::Id(key, label)) => {
                tables.ids.insert(key, label);
            }
            None => debug!("Skipping JDex line {}: {:?}", lineno + 1, line),
        }
    }
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{AreaKey, CategoryKey, IdKey};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_lines_with_comments_and_noise() {
        let tables = parse_single_file_str(
            "10-19 Life Admin\n\
             \x20 11 Projects\n\
             11.01 Inbox // note\n\
             \n\
             this line is not part of any grammar\n",
        );

        assert_eq!(tables.area_label(&AreaKey::new("1")), Some("Life Admin"));
        assert_eq!(
            tables.category_label(&CategoryKey::new("11")),
            Some("Projects")
        );
        assert_eq!(tables.id_label(&IdKey::new("11.01")), Some("Inbox"));
        assert_eq!(tables.len(), 3);
    }

    #[test]
    fn test_last_declaration_wins() {
        let tables = parse_single_file_str("11 Old\n11 New\n");
        assert_eq!(tables.category_label(&CategoryKey::new("11")), Some("New"));
    }
}
