//! Directory JDex layouts
//!
//! A JDex directory is first scanned as if it mirrored the primary tree
//! (`10-19 Area/11 Category/11.01 Note.md`). Files found at its root are held
//! back until that pass decides the layout:
//! - any ID or any error from the nested pass: nested, root files are errors
//! - otherwise: flat, root files are classified as notes

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::grammar::NoteGrammar;
use super::JdexLayout;
use crate::errors::Result;
use crate::features::classification::{classify_area, classify_category, Classification};
use crate::findings::{Diagnostic, JdexDiagnostic, JdexIssue};
use crate::shared::models::{AreaKey, CategoryKey, Entry, Registry, Registries};
use crate::shared::ports::IgnoreFilter;

const AREA_DEPTH: usize = 1;
const CATEGORY_DEPTH: usize = 2;
const NOTE_DEPTH: usize = 3;

/// Everything a directory scan registered, before duplicate checks.
#[derive(Debug, Clone, Default)]
pub(crate) struct TreeScan {
    pub layout: Option<JdexLayout>,
    pub registries: Registries,
    pub headers: Registry<AreaKey>,
    pub diagnostics: Vec<JdexDiagnostic>,
}

pub(crate) struct TreeScanner<'a> {
    root: PathBuf,
    ignore: &'a dyn IgnoreFilter,
    grammar: &'a NoteGrammar,
}

impl<'a> TreeScanner<'a> {
    pub fn new(root: &Path, ignore: &'a dyn IgnoreFilter, grammar: &'a NoteGrammar) -> Self {
        Self {
            root: root.to_path_buf(),
            ignore,
            grammar,
        }
    }

    pub fn scan(&self) -> Result<TreeScan> {
        let mut scan = TreeScan::default();
        let root_files = self.nested_pass(&mut scan)?;

        if !scan.registries.ids.is_empty() || !scan.diagnostics.is_empty() {
            debug!(
                "JDex {} is nested ({} root files rejected)",
                self.root.display(),
                root_files.len()
            );
            scan.layout = Some(JdexLayout::Nested);
            scan.diagnostics.extend(
                root_files
                    .into_iter()
                    .map(|entry| Diagnostic::single(JdexIssue::JdexFileOutsideCategory, entry)),
            );
        } else {
            debug!("JDex {} is flat", self.root.display());
            scan.layout = Some(JdexLayout::Flat);
            for entry in root_files {
                self.classify_note(entry, &mut scan);
            }
        }

        info!(
            "Scanned JDex {}: {} areas, {} categories, {} ids, {} headers",
            self.root.display(),
            scan.registries.areas.len(),
            scan.registries.categories.len(),
            scan.registries.ids.len(),
            scan.headers.len()
        );
        Ok(scan)
    }

    /// Walk area and category folders; return the buffered root-level files.
    fn nested_pass(&self, scan: &mut TreeScan) -> Result<Vec<Entry>> {
        let mut root_files = Vec::new();
        let mut current_area: Option<AreaKey> = None;
        let mut current_category: Option<CategoryKey> = None;

        let mut it = WalkDir::new(&self.root)
            .min_depth(AREA_DEPTH)
            .max_depth(NOTE_DEPTH)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|dent| !self.is_ignored(dent));

        while let Some(next) = it.next() {
            let dent = next?;
            let entry = Entry::relative_to(&self.root, dent.path());
            let is_dir = dent.file_type().is_dir();

            match dent.depth() {
                AREA_DEPTH if !is_dir => root_files.push(entry),
                AREA_DEPTH => match classify_area(&entry.name) {
                    Classification::Valid { key, label } => {
                        current_area = Some(key.clone());
                        scan.registries.areas.register(key, label, entry);
                    }
                    Classification::WrongParent { expected_parent } => match expected_parent {},
                    Classification::Invalid => {
                        scan.diagnostics
                            .push(Diagnostic::single(JdexIssue::JdexInvalidAreaName, entry));
                        it.skip_current_dir();
                    }
                },
                CATEGORY_DEPTH if !is_dir => {
                    scan.diagnostics
                        .push(Diagnostic::single(JdexIssue::JdexFileOutsideCategory, entry));
                }
                CATEGORY_DEPTH => {
                    let Some(area) = current_area.clone() else {
                        it.skip_current_dir();
                        continue;
                    };
                    match classify_category(&entry.name, &area) {
                        Classification::Valid { key, label } => {
                            current_category = Some(key.clone());
                            scan.registries.categories.register(key, label, entry);
                        }
                        Classification::WrongParent { expected_parent } => {
                            scan.diagnostics.push(Diagnostic::single(
                                JdexIssue::JdexCategoryInWrongArea {
                                    category_area: expected_parent,
                                    file_area: area,
                                },
                                entry,
                            ));
                            it.skip_current_dir();
                        }
                        Classification::Invalid => {
                            scan.diagnostics.push(Diagnostic::single(
                                JdexIssue::JdexInvalidCategoryName,
                                entry,
                            ));
                            it.skip_current_dir();
                        }
                    }
                }
                NOTE_DEPTH => {
                    let Some(category) = current_category.clone() else {
                        continue;
                    };
                    match self.grammar.id_note(&entry.name) {
                        Some(note) if note.category == category => {
                            scan.registries.ids.register(note.id, note.label, entry);
                        }
                        Some(note) => {
                            scan.diagnostics.push(Diagnostic::single(
                                JdexIssue::JdexIdInWrongCategory {
                                    id_ac: note.category,
                                    file_ac: category,
                                },
                                entry,
                            ));
                        }
                        None => {
                            scan.diagnostics
                                .push(Diagnostic::single(JdexIssue::JdexInvalidIdName, entry));
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(root_files)
    }

    /// Classify one root-level note of a flat JDex.
    ///
    /// Area and category notes are also ID notes; only a header is exclusive.
    fn classify_note(&self, entry: Entry, scan: &mut TreeScan) {
        if let Some((key, label)) = self.grammar.area_note(&entry.name) {
            scan.registries.areas.register(key, label, entry.clone());
        }
        if let Some((key, label)) = self.grammar.category_note(&entry.name) {
            scan.registries.categories.register(key, label, entry.clone());
        }

        if let Some((key, label)) = self.grammar.header_note(&entry.name) {
            scan.headers.register(key, label, entry);
        } else if let Some(note) = self.grammar.id_note(&entry.name) {
            scan.registries.ids.register(note.id, note.label, entry);
        } else {
            debug!("Invalid JDex note: {}", entry.nesting_path());
            scan.diagnostics
                .push(Diagnostic::single(JdexIssue::JdexInvalidIdName, entry));
        }
    }

    fn is_ignored(&self, dent: &DirEntry) -> bool {
        if dent.depth() == 0 {
            return false;
        }
        let entry = Entry::relative_to(&self.root, dent.path());
        self.ignore.is_ignored(&entry.nested_under, &entry.name)
    }
}
