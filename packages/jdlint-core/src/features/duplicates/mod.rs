//! Duplicate detection over a finished registry
//!
//! Runs once per registry after traversal. Each key claimed by more than
//! one entry yields exactly one diagnostic listing all of them.

use crate::findings::{Diagnostic, IssueKind};
use crate::shared::models::{compare_entries, Entry, Registry};

/// Report every key of `registry` registered more than once.
///
/// `make_issue` builds the taxonomy-specific duplicate variant for a key.
pub fn detect_duplicates<K, I, F>(registry: &Registry<K>, make_issue: F) -> Vec<Diagnostic<I>>
where
    K: Ord + Clone,
    I: IssueKind,
    F: Fn(&K) -> I,
{
    registry
        .iter()
        .filter(|(_, regs)| regs.len() > 1)
        .map(|(key, regs)| {
            let mut files: Vec<Entry> = regs.iter().map(|r| r.entry.clone()).collect();
            files.sort_by(compare_entries);
            Diagnostic::new(make_issue(key), files)
        })
        .collect()
}
