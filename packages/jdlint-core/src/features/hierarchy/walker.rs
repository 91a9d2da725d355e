//! Depth-first walk of the primary tree
//!
//! Levels are fixed: Area (depth 1), Category (depth 2), ID (depth 3).
//! Anything inside an ID folder is opaque, except that an Inbox is counted.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{JdlintError, Result};
use crate::features::classification::{
    classify_area, classify_category, classify_id, Classification,
};
use crate::features::duplicates::detect_duplicates;
use crate::findings::{sort_diagnostics, Diagnostic, LintDiagnostic, LintIssue};
use crate::shared::models::{AreaKey, CategoryKey, Entry, Registries};
use crate::shared::ports::IgnoreFilter;

const AREA_DEPTH: usize = 1;
const CATEGORY_DEPTH: usize = 2;
const ID_DEPTH: usize = 3;

/// Result of walking the primary tree.
#[derive(Debug, Clone, Default)]
pub struct WalkOutcome {
    /// Sorted per-node and duplicate diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Everything that passed classification
    pub registries: Registries,
}

/// Walks one primary root and classifies every visited node.
pub struct HierarchyWalker<'a> {
    root: PathBuf,
    ignore: &'a dyn IgnoreFilter,
}

impl<'a> HierarchyWalker<'a> {
    pub fn new(root: impl Into<PathBuf>, ignore: &'a dyn IgnoreFilter) -> Self {
        Self {
            root: root.into(),
            ignore,
        }
    }

    /// Walk the whole tree, then run duplicate detection and sort.
    ///
    /// Any filesystem failure aborts the walk; a partial registry would make
    /// the duplicate and JDex checks unsound.
    pub fn walk(&self) -> Result<WalkOutcome> {
        if !self.root.exists() {
            return Err(JdlintError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(JdlintError::NotADirectory(self.root.clone()));
        }

        let mut registries = Registries::default();
        let mut diagnostics = Vec::new();
        let mut current_area: Option<AreaKey> = None;
        let mut current_category: Option<CategoryKey> = None;

        let mut it = WalkDir::new(&self.root)
            .min_depth(AREA_DEPTH)
            .max_depth(ID_DEPTH)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|dent| !self.is_ignored(dent));

        while let Some(next) = it.next() {
            let dent = next?;
            let entry = Entry::relative_to(&self.root, dent.path());

            if !dent.file_type().is_dir() {
                debug!("File outside ID: {}", entry.nesting_path());
                diagnostics.push(Diagnostic::single(LintIssue::FileOutsideId, entry));
                continue;
            }

            match dent.depth() {
                AREA_DEPTH => match classify_area(&entry.name) {
                    Classification::Valid { key, label } => {
                        debug!("Area {}: {}", key.range(), entry.nesting_path());
                        current_area = Some(key.clone());
                        registries.areas.register(key, label, entry);
                    }
                    Classification::WrongParent { expected_parent } => match expected_parent {},
                    Classification::Invalid => {
                        debug!("Invalid area name: {}", entry.nesting_path());
                        diagnostics.push(Diagnostic::single(LintIssue::InvalidAreaName, entry));
                        it.skip_current_dir();
                    }
                },
                CATEGORY_DEPTH => {
                    let Some(area) = current_area.clone() else {
                        it.skip_current_dir();
                        continue;
                    };
                    match classify_category(&entry.name, &area) {
                        Classification::Valid { key, label } => {
                            debug!("Category {}: {}", key, entry.nesting_path());
                            current_category = Some(key.clone());
                            registries.categories.register(key, label, entry);
                        }
                        Classification::WrongParent { expected_parent } => {
                            debug!("Category in wrong area: {}", entry.nesting_path());
                            diagnostics.push(Diagnostic::single(
                                LintIssue::CategoryInWrongArea {
                                    category_area: expected_parent,
                                    file_area: area,
                                },
                                entry,
                            ));
                            it.skip_current_dir();
                        }
                        Classification::Invalid => {
                            debug!("Invalid category name: {}", entry.nesting_path());
                            diagnostics
                                .push(Diagnostic::single(LintIssue::InvalidCategoryName, entry));
                            it.skip_current_dir();
                        }
                    }
                }
                ID_DEPTH => {
                    let Some(category) = current_category.clone() else {
                        continue;
                    };
                    match classify_id(&entry.name, &category) {
                        Classification::Valid { key, label } => {
                            debug!("ID {}: {}", key, entry.nesting_path());
                            if key.is_inbox() {
                                let num_items = self.count_inbox(&dent, &entry)?;
                                if num_items > 0 {
                                    diagnostics.push(Diagnostic::single(
                                        LintIssue::NonemptyInbox { num_items },
                                        entry.clone(),
                                    ));
                                }
                            }
                            registries.ids.register(key, label, entry);
                        }
                        Classification::WrongParent { expected_parent } => {
                            debug!("ID in wrong category: {}", entry.nesting_path());
                            diagnostics.push(Diagnostic::single(
                                LintIssue::IdInWrongCategory {
                                    id_ac: expected_parent,
                                    file_ac: category,
                                },
                                entry,
                            ));
                        }
                        Classification::Invalid => {
                            debug!("Invalid ID name: {}", entry.nesting_path());
                            diagnostics.push(Diagnostic::single(LintIssue::InvalidIdName, entry));
                        }
                    }
                }
                _ => {}
            }
        }

        diagnostics.extend(detect_duplicates(&registries.areas, |area| {
            LintIssue::DuplicateArea { area: area.clone() }
        }));
        diagnostics.extend(detect_duplicates(&registries.categories, |category| {
            LintIssue::DuplicateCategory {
                category: category.clone(),
            }
        }));
        diagnostics.extend(detect_duplicates(&registries.ids, |id| LintIssue::DuplicateId {
            id: id.clone(),
        }));
        sort_diagnostics(&mut diagnostics);

        info!(
            "Walked {}: {} areas, {} categories, {} ids, {} errors",
            self.root.display(),
            registries.areas.len(),
            registries.categories.len(),
            registries.ids.len(),
            diagnostics.len()
        );

        Ok(WalkOutcome {
            diagnostics,
            registries,
        })
    }

    fn is_ignored(&self, dent: &DirEntry) -> bool {
        if dent.depth() == 0 {
            return false;
        }
        let entry = Entry::relative_to(&self.root, dent.path());
        let ignored = self.ignore.is_ignored(&entry.nested_under, &entry.name);
        if ignored {
            debug!("Ignoring {}", entry.nesting_path());
        }
        ignored
    }

    /// Count the non-ignored direct children of an inbox folder.
    fn count_inbox(&self, dent: &DirEntry, inbox: &Entry) -> Result<usize> {
        let nesting = inbox.child_nesting();
        let mut count = 0;
        for child in fs::read_dir(dent.path())? {
            let child = child?;
            let name = child.file_name().to_string_lossy().into_owned();
            if !self.ignore.is_ignored(&nesting, &name) {
                count += 1;
            }
        }
        Ok(count)
    }
}
