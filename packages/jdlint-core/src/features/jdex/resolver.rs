//! JDex layout detection and resolution into canonical tables

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use super::grammar::NoteGrammar;
use super::single_file::parse_single_file;
use super::tree::{TreeScan, TreeScanner};
use crate::config::LintOptions;
use crate::errors::{JdlintError, Result};
use crate::features::duplicates::detect_duplicates;
use crate::findings::{sort_diagnostics, Diagnostic, JdexDiagnostic, JdexIssue};
use crate::shared::models::{AreaKey, CategoryKey, IdKey};
use crate::shared::ports::IgnoreFilter;

/// Physical layout a JDex was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JdexLayout {
    SingleFile,
    Flat,
    Nested,
}

impl fmt::Display for JdexLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JdexLayout::SingleFile => "single-file",
            JdexLayout::Flat => "flat",
            JdexLayout::Nested => "nested",
        };
        f.write_str(name)
    }
}

/// Canonical `key -> label` tables declared by a well-formed JDex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalTables {
    pub areas: BTreeMap<AreaKey, String>,
    pub categories: BTreeMap<CategoryKey, String>,
    pub ids: BTreeMap<IdKey, String>,
}

impl CanonicalTables {
    pub fn area_label(&self, key: &AreaKey) -> Option<&str> {
        self.areas.get(key).map(String::as_str)
    }

    pub fn category_label(&self, key: &CategoryKey) -> Option<&str> {
        self.categories.get(key).map(String::as_str)
    }

    pub fn id_label(&self, key: &IdKey) -> Option<&str> {
        self.ids.get(key).map(String::as_str)
    }

    /// Total number of declared keys across all three levels.
    pub fn len(&self) -> usize {
        self.areas.len() + self.categories.len() + self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Either usable tables or the reasons the JDex cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Tables(CanonicalTables),
    Errors(Vec<JdexDiagnostic>),
}

impl Resolution {
    pub fn tables(&self) -> Option<&CanonicalTables> {
        match self {
            Resolution::Tables(tables) => Some(tables),
            Resolution::Errors(_) => None,
        }
    }

    pub fn errors(&self) -> &[JdexDiagnostic] {
        match self {
            Resolution::Tables(_) => &[],
            Resolution::Errors(errors) => errors,
        }
    }
}

/// Resolves a JDex path of any supported layout.
pub struct JdexResolver<'a> {
    path: PathBuf,
    ignore: &'a dyn IgnoreFilter,
    options: &'a LintOptions,
}

impl<'a> JdexResolver<'a> {
    pub fn new(
        path: impl Into<PathBuf>,
        ignore: &'a dyn IgnoreFilter,
        options: &'a LintOptions,
    ) -> Self {
        Self {
            path: path.into(),
            ignore,
            options,
        }
    }

    /// Detect the layout and resolve it.
    ///
    /// Tables are only produced when resolution found no problem at all.
    pub fn resolve(&self) -> Result<Resolution> {
        if !self.path.exists() {
            return Err(JdlintError::RootNotFound(self.path.clone()));
        }

        if !self.path.is_dir() {
            let tables = parse_single_file(&self.path)?;
            info!(
                "Resolved {} JDex {}: {} entries",
                JdexLayout::SingleFile,
                self.path.display(),
                tables.len()
            );
            return Ok(Resolution::Tables(tables));
        }

        let grammar = NoteGrammar::new(self.options.alt_zeros, &self.options.note_extension)?;
        let scan = TreeScanner::new(&self.path, self.ignore, &grammar).scan()?;
        let layout = scan.layout.unwrap_or(JdexLayout::Flat);
        let resolution = finish(scan);

        info!(
            "Resolved {} JDex {}: {} errors",
            layout,
            self.path.display(),
            resolution.errors().len()
        );
        Ok(resolution)
    }
}

/// Duplicate checks, header reconciliation, then tables or errors.
fn finish(scan: TreeScan) -> Resolution {
    let TreeScan {
        registries,
        headers,
        mut diagnostics,
        ..
    } = scan;

    diagnostics.extend(detect_duplicates(&registries.areas, |area| {
        JdexIssue::JdexDuplicateArea { area: area.clone() }
    }));
    diagnostics.extend(detect_duplicates(&registries.categories, |category| {
        JdexIssue::JdexDuplicateCategory {
            category: category.clone(),
        }
    }));
    diagnostics.extend(detect_duplicates(&registries.ids, |id| {
        JdexIssue::JdexDuplicateId { id: id.clone() }
    }));
    diagnostics.extend(detect_duplicates(&headers, |area| {
        JdexIssue::JdexDuplicateAreaHeader { area: area.clone() }
    }));

    for (key, regs) in headers.iter() {
        let Some(area_regs) = registries.areas.get(key) else {
            diagnostics.push(Diagnostic::new(
                JdexIssue::JdexAreaHeaderWithoutArea { area: key.clone() },
                regs.iter().map(|r| r.entry.clone()).collect(),
            ));
            continue;
        };
        if let ([header], [area]) = (regs, area_regs) {
            if header.label != area.label {
                diagnostics.push(Diagnostic::single(
                    JdexIssue::JdexAreaHeaderDifferentFromArea {
                        area: key.clone(),
                        jdex_name: area.label.clone(),
                    },
                    header.entry.clone(),
                ));
            }
        }
    }

    if !diagnostics.is_empty() {
        sort_diagnostics(&mut diagnostics);
        return Resolution::Errors(diagnostics);
    }

    Resolution::Tables(CanonicalTables {
        areas: registries.areas.to_table(),
        categories: registries.categories.to_table(),
        ids: registries.ids.to_table(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::shared::ports::NoIgnore;
    use std::fs;
    use tempfile::TempDir;

    fn resolve(path: &Path) -> Resolution {
        let options = LintOptions::default();
        JdexResolver::new(path, &NoIgnore, &options).resolve().unwrap()
    }

    fn write_notes(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), "").unwrap();
        }
    }

    #[test]
    fn test_single_file_resolves_to_tables() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("jdex.txt");
        fs::write(&file, "10-19 Life Admin\n11 Projects\n11.01 Inbox // note\n").unwrap();

        let tables = match resolve(&file) {
            Resolution::Tables(tables) => tables,
            other => panic!("expected tables, got {:?}", other),
        };
        assert_eq!(tables.area_label(&AreaKey::new("1")), Some("Life Admin"));
        assert_eq!(tables.id_label(&IdKey::new("11.01")), Some("Inbox"));
    }

    #[test]
    fn test_missing_jdex_is_fatal() {
        let dir = TempDir::new().unwrap();
        let options = LintOptions::default();
        let result = JdexResolver::new(dir.path().join("nope"), &NoIgnore, &options).resolve();
        assert!(matches!(result, Err(JdlintError::RootNotFound(_))));
    }

    #[test]
    fn test_header_without_area() {
        let dir = TempDir::new().unwrap();
        write_notes(dir.path(), &["30. Hobbies.md", "11.11 Passport.md"]);

        let resolution = resolve(dir.path());
        let kinds: Vec<&str> = resolution.errors().iter().map(|d| d.kind_name()).collect();
        assert_eq!(kinds, vec!["JDEX_AREA_HEADER_WITHOUT_AREA"]);
        assert!(resolution.tables().is_none());
    }

    #[test]
    fn test_header_different_from_area() {
        let dir = TempDir::new().unwrap();
        write_notes(dir.path(), &["10. Life Admin.md", "10.00 Personal Admin.md"]);

        let resolution = resolve(dir.path());
        assert_eq!(resolution.errors().len(), 1);
        assert_eq!(
            resolution.errors()[0].error,
            JdexIssue::JdexAreaHeaderDifferentFromArea {
                area: AreaKey::new("1"),
                jdex_name: "Personal Admin".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_headers_skip_label_comparison() {
        let dir = TempDir::new().unwrap();
        write_notes(
            dir.path(),
            &["10. Life Admin.md", "10. Other.md", "10.00 Personal Admin.md"],
        );

        let resolution = resolve(dir.path());
        let kinds: Vec<&str> = resolution.errors().iter().map(|d| d.kind_name()).collect();
        assert_eq!(kinds, vec!["JDEX_DUPLICATE_AREA_HEADER"]);
        assert_eq!(resolution.errors()[0].files.len(), 2);
    }

    #[test]
    fn test_flat_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        write_notes(dir.path(), &["11.11 Passport.md", "11.11 Visa.md"]);

        let resolution = resolve(dir.path());
        let kinds: Vec<&str> = resolution.errors().iter().map(|d| d.kind_name()).collect();
        assert_eq!(kinds, vec!["JDEX_DUPLICATE_ID"]);
    }

    #[test]
    fn test_clean_flat_jdex_gives_tables() {
        let dir = TempDir::new().unwrap();
        write_notes(
            dir.path(),
            &["10. Life Admin.md", "10.00 Life Admin.md", "11.00 Me.md", "11.11 Passport.md"],
        );

        let resolution = resolve(dir.path());
        let tables = resolution.tables().unwrap();
        assert_eq!(tables.area_label(&AreaKey::new("1")), Some("Life Admin"));
        assert_eq!(tables.category_label(&CategoryKey::new("11")), Some("Me"));
        assert_eq!(tables.id_label(&IdKey::new("11.11")), Some("Passport"));
        assert_eq!(tables.id_label(&IdKey::new("11.00")), Some("Me"));
    }
}
