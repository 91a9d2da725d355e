//! Reconciliation of the primary tree against JDex canonical tables
//!
//! Per level and per registered key:
//! - key absent from the JDex: one NOT_IN_JDEX with every entry for the key
//! - key present, exactly one entry, label differs: one DIFFERENT_FROM_JDEX
//! - duplicated keys are never compared against the JDex label

use std::collections::BTreeMap;

use tracing::debug;

use crate::features::jdex::CanonicalTables;
use crate::findings::{Diagnostic, IssueKind, LintDiagnostic, LintIssue};
use crate::shared::models::{compare_entries, Entry, Registries, Registry};

/// Cross-check every registry against the canonical tables.
///
/// The result is unsorted; callers merge it with the walk diagnostics and
/// sort once.
pub fn reconcile(registries: &Registries, tables: &CanonicalTables) -> Vec<LintDiagnostic> {
    let mut diagnostics = Vec::new();

    diagnostics.extend(reconcile_level(
        &registries.areas,
        &tables.areas,
        |area| LintIssue::AreaNotInJdex { area: area.clone() },
        |area, jdex_name| LintIssue::AreaDifferentFromJdex {
            area: area.clone(),
            jdex_name,
        },
    ));
    diagnostics.extend(reconcile_level(
        &registries.categories,
        &tables.categories,
        |category| LintIssue::CategoryNotInJdex {
            category: category.clone(),
        },
        |category, jdex_name| LintIssue::CategoryDifferentFromJdex {
            category: category.clone(),
            jdex_name,
        },
    ));
    diagnostics.extend(reconcile_level(
        &registries.ids,
        &tables.ids,
        |id| LintIssue::IdNotInJdex { id: id.clone() },
        |id, jdex_name| LintIssue::IdDifferentFromJdex {
            id: id.clone(),
            jdex_name,
        },
    ));

    debug!("Reconciliation produced {} diagnostics", diagnostics.len());
    diagnostics
}

fn reconcile_level<K, I, M, D>(
    registry: &Registry<K>,
    table: &BTreeMap<K, String>,
    missing: M,
    different: D,
) -> Vec<Diagnostic<I>>
where
    K: Ord + Clone,
    I: IssueKind,
    M: Fn(&K) -> I,
    D: Fn(&K, String) -> I,
{
    let mut out = Vec::new();
    for (key, regs) in registry.iter() {
        let Some(jdex_name) = table.get(key) else {
            let mut files: Vec<Entry> = regs.iter().map(|r| r.entry.clone()).collect();
            files.sort_by(compare_entries);
            out.push(Diagnostic::new(missing(key), files));
            continue;
        };
        if let [only] = regs {
            if &only.label != jdex_name {
                out.push(Diagnostic::single(
                    different(key, jdex_name.clone()),
                    only.entry.clone(),
                ));
            }
        }
    }
    out
}
