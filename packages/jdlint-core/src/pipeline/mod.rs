//! End-to-end lint run
//!
//! ```text
//! HierarchyWalker ─┬─ diagnostics ─────────────────────────┐
//!                  └─ registries ─┐                        ├─> LintReport.errors
//! JdexResolver ── Tables ─────────┴─> reconcile ───────────┘
//!              └─ Errors ─────────────────────────────────────> LintReport.jdex_errors
//! ```
//!
//! Disabled kinds are not applied here. Both lists always describe the
//! unfiltered world.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::LintOptions;
use crate::errors::Result;
use crate::features::hierarchy::HierarchyWalker;
use crate::features::jdex::{JdexResolver, Resolution};
use crate::features::reconcile::reconcile;
use crate::findings::{filter_disabled, sort_diagnostics, JdexDiagnostic, LintDiagnostic};
use crate::shared::ports::IgnoreFilter;

/// Both sorted diagnostic lists of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub errors: Vec<LintDiagnostic>,
    pub jdex_errors: Vec<JdexDiagnostic>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.jdex_errors.is_empty()
    }

    /// Remove disabled kinds from both lists.
    pub fn without_disabled(self, disabled: &[String]) -> Self {
        Self {
            errors: filter_disabled(self.errors, disabled),
            jdex_errors: filter_disabled(self.jdex_errors, disabled),
        }
    }
}

/// Lint a primary tree with no JDex.
pub fn lint_dir(root: &Path, ignore: &dyn IgnoreFilter) -> Result<Vec<LintDiagnostic>> {
    let outcome = HierarchyWalker::new(root, ignore).walk()?;
    Ok(outcome.diagnostics)
}

/// Lint a primary tree and cross-check it against a JDex.
///
/// When the JDex itself has problems no cross-check happens: the primary
/// diagnostics and the JDex diagnostics are returned side by side.
pub fn lint_dir_and_jdex(
    root: &Path,
    jdex: &Path,
    ignore: &dyn IgnoreFilter,
    options: &LintOptions,
) -> Result<LintReport> {
    let outcome = HierarchyWalker::new(root, ignore).walk()?;
    let resolution = JdexResolver::new(jdex, ignore, options).resolve()?;

    let report = match resolution {
        Resolution::Errors(jdex_errors) => LintReport {
            errors: outcome.diagnostics,
            jdex_errors,
        },
        Resolution::Tables(tables) => {
            let mut errors = outcome.diagnostics;
            errors.extend(reconcile(&outcome.registries, &tables));
            sort_diagnostics(&mut errors);
            LintReport {
                errors,
                jdex_errors: Vec::new(),
            }
        }
    };

    info!(
        "Lint finished: {} errors, {} JDex errors",
        report.errors.len(),
        report.jdex_errors.len()
    );
    Ok(report)
}

/// Run with an optional JDex.
pub fn run(
    root: &Path,
    jdex: Option<&Path>,
    ignore: &dyn IgnoreFilter,
    options: &LintOptions,
) -> Result<LintReport> {
    match jdex {
        Some(jdex) => lint_dir_and_jdex(root, jdex, ignore, options),
        None => Ok(LintReport {
            errors: lint_dir(root, ignore)?,
            jdex_errors: Vec::new(),
        }),
    }
}
