//! JDex line and note grammars
//!
//! Line grammars are fixed and compiled once. Note grammars depend on the
//! numbering convention and the note extension, so they are built per
//! resolution by `NoteGrammar::new`.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::shared::models::{AreaKey, CategoryKey, IdKey};

/// `d0-d9 <label>  // comment`
static LINE_AREA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9])0-([0-9])9 (.+?)\s*(//.*)?$").expect("jdex line area grammar")
});

/// `dd <label>  // comment`
static LINE_CATEGORY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9][0-9]) (.+?)\s*(//.*)?$").expect("jdex line category grammar")
});

/// `dd.dd <label>  // comment`
static LINE_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9][0-9])\.([0-9][0-9]) (.+?)\s*(//.*)?$").expect("jdex line id grammar")
});

/// One parsed line of a single-file JDex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JdexLine {
    Area(AreaKey, String),
    Category(CategoryKey, String),
    Id(IdKey, String),
}

/// Try the area, category and ID line grammars in that order.
///
/// `line` is expected to be trimmed already.
pub fn parse_line(line: &str) -> Option<JdexLine> {
    if let Some(caps) = LINE_AREA_RE.captures(line) {
        if caps[1] == caps[2] {
            return Some(JdexLine::Area(AreaKey::new(&caps[1]), caps[3].to_string()));
        }
    }
    if let Some(caps) = LINE_CATEGORY_RE.captures(line) {
        return Some(JdexLine::Category(
            CategoryKey::new(&caps[1]),
            caps[2].to_string(),
        ));
    }
    if let Some(caps) = LINE_ID_RE.captures(line) {
        return Some(JdexLine::Id(
            IdKey::from_parts(&caps[1], &caps[2]),
            caps[3].to_string(),
        ));
    }
    None
}

/// Note-name grammars for directory JDex layouts.
#[derive(Debug, Clone)]
pub struct NoteGrammar {
    area: Regex,
    category: Regex,
    header: Regex,
    id: Regex,
}

/// A note name split into its ID number parts and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdNote {
    pub category: CategoryKey,
    pub id: IdKey,
    pub label: String,
}

impl NoteGrammar {
    /// Build the note grammars.
    ///
    /// `extension` is the note file extension without its leading dot.
    pub fn new(alt_zeros: bool, extension: &str) -> Result<Self, regex::Error> {
        let ext = format!(r"(\.{})?", regex::escape(extension));

        let area = if alt_zeros {
            format!(r"^0([0-9])\.00 (.+?)( area management)?( index)?{}$", ext)
        } else {
            format!(r"^([0-9])0\.00 (.+?)( area management)?( index)?{}$", ext)
        };
        let category = if alt_zeros {
            format!(
                r"^([0-9][0-9])\.00 (.+?)( (category|area) management)?( index)?{}$",
                ext
            )
        } else {
            format!(r"^([0-9][1-9])\.00 (.+?)( category management)?( index)?{}$", ext)
        };

        Ok(Self {
            area: RegexBuilder::new(&area).case_insensitive(true).build()?,
            category: RegexBuilder::new(&category).case_insensitive(true).build()?,
            header: Regex::new(&format!(r"^([0-9])0\. (.+?){}$", ext))?,
            id: Regex::new(&format!(r"^([0-9][0-9])\.([0-9][0-9]) (.+?){}$", ext))?,
        })
    }

    /// Area-management note, e.g. `10.00 Life Admin.md`.
    pub fn area_note(&self, name: &str) -> Option<(AreaKey, String)> {
        self.area
            .captures(name)
            .map(|caps| (AreaKey::new(&caps[1]), caps[2].to_string()))
    }

    /// Category-management note, e.g. `11.00 Me.md`.
    pub fn category_note(&self, name: &str) -> Option<(CategoryKey, String)> {
        self.category
            .captures(name)
            .map(|caps| (CategoryKey::new(&caps[1]), caps[2].to_string()))
    }

    /// Area header note, e.g. `10. Life Admin.md`.
    pub fn header_note(&self, name: &str) -> Option<(AreaKey, String)> {
        self.header
            .captures(name)
            .map(|caps| (AreaKey::new(&caps[1]), caps[2].to_string()))
    }

    /// Any ID-shaped note, regardless of where it sits.
    pub fn id_note(&self, name: &str) -> Option<IdNote> {
        self.id.captures(name).map(|caps| IdNote {
            category: CategoryKey::new(&caps[1]),
            id: IdKey::from_parts(&caps[1], &caps[2]),
            label: caps[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> NoteGrammar {
        NoteGrammar::new(false, "md").unwrap()
    }

    #[test]
    fn test_line_grammars() {
        assert_eq!(
            parse_line("10-19 Life Admin"),
            Some(JdexLine::Area(AreaKey::new("1"), "Life Admin".into()))
        );
        assert_eq!(
            parse_line("11 Projects   // active"),
            Some(JdexLine::Category(CategoryKey::new("11"), "Projects".into()))
        );
        assert_eq!(
            parse_line("11.01 Inbox // note"),
            Some(JdexLine::Id(IdKey::new("11.01"), "Inbox".into()))
        );
    }

    #[test]
    fn test_line_grammar_rejects_noise() {
        assert_eq!(parse_line("# My JDex"), None);
        assert_eq!(parse_line("10-29 Mismatched"), None);
        assert_eq!(parse_line("11x01 Not an id"), None);
    }

    #[test]
    fn test_area_note_strips_suffixes() {
        let g = grammar();
        assert_eq!(
            g.area_note("10.00 Life Admin Area Management.md"),
            Some((AreaKey::new("1"), "Life Admin".into()))
        );
        assert_eq!(
            g.area_note("20.00 Work index.MD"),
            Some((AreaKey::new("2"), "Work".into()))
        );
        assert_eq!(g.area_note("11.00 Me.md"), None);
    }

    #[test]
    fn test_category_note_excludes_area_slot() {
        let g = grammar();
        assert_eq!(
            g.category_note("11.00 Me Category Management.md"),
            Some((CategoryKey::new("11"), "Me".into()))
        );
        assert_eq!(g.category_note("10.00 Life Admin.md"), None);
    }

    #[test]
    fn test_alt_zero_notes() {
        let g = NoteGrammar::new(true, "md").unwrap();
        assert_eq!(
            g.area_note("01.00 Life Admin Area Management.md"),
            Some((AreaKey::new("1"), "Life Admin".into()))
        );
        assert_eq!(
            g.category_note("01.00 Life Admin Area Management.md"),
            Some((CategoryKey::new("01"), "Life Admin".into()))
        );
        assert_eq!(g.area_note("10.00 Life Admin.md"), None);
    }

    #[test]
    fn test_header_and_id_notes() {
        let g = grammar();
        assert_eq!(
            g.header_note("10. Life Admin.md"),
            Some((AreaKey::new("1"), "Life Admin".into()))
        );
        let note = g.id_note("11.11 Passport.md").unwrap();
        assert_eq!(note.id, IdKey::new("11.11"));
        assert_eq!(note.category, CategoryKey::new("11"));
        assert_eq!(note.label, "Passport");
        assert!(g.id_note("Passport.md").is_none());
    }

    #[test]
    fn test_custom_extension() {
        let g = NoteGrammar::new(false, "txt").unwrap();
        assert_eq!(g.id_note("11.11 Passport.txt").unwrap().label, "Passport");
        assert_eq!(g.id_note("11.11 Passport.md").unwrap().label, "Passport.md");
    }
}
