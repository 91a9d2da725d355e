//! Error model
//!
//! Two closed taxonomies: `LintIssue` for the primary file tree and
//! `JdexIssue` for the JDex. Each is wrapped in a `Diagnostic` together
//! with the entries it concerns. Message, explanation and fix come from
//! the `IssueKind` implementation of each taxonomy.

pub mod diagnostic;
pub mod jdex_issue;
pub mod lint_issue;

pub use diagnostic::{filter_disabled, sort_diagnostics, Diagnostic, IssueKind, Rule};
pub use jdex_issue::JdexIssue;
pub use lint_issue::LintIssue;

use jdex_issue::JDEX_RULES;
use lint_issue::LINT_RULES;

/// Diagnostic about the primary file tree
pub type LintDiagnostic = Diagnostic<LintIssue>;

/// Diagnostic about the JDex
pub type JdexDiagnostic = Diagnostic<JdexIssue>;

/// Every kind name across both taxonomies.
pub const ALL_KIND_NAMES: &[&str] = &[
    "AREA_DIFFERENT_FROM_JDEX",
    "AREA_NOT_IN_JDEX",
    "CATEGORY_DIFFERENT_FROM_JDEX",
    "CATEGORY_IN_WRONG_AREA",
    "CATEGORY_NOT_IN_JDEX",
    "DUPLICATE_AREA",
    "DUPLICATE_CATEGORY",
    "DUPLICATE_ID",
    "FILE_OUTSIDE_ID",
    "ID_DIFFERENT_FROM_JDEX",
    "ID_IN_WRONG_CATEGORY",
    "ID_NOT_IN_JDEX",
    "INVALID_AREA_NAME",
    "INVALID_CATEGORY_NAME",
    "INVALID_ID_NAME",
    "NONEMPTY_INBOX",
    "JDEX_AREA_HEADER_DIFFERENT_FROM_AREA",
    "JDEX_AREA_HEADER_WITHOUT_AREA",
    "JDEX_CATEGORY_IN_WRONG_AREA",
    "JDEX_DUPLICATE_AREA",
    "JDEX_DUPLICATE_AREA_HEADER",
    "JDEX_DUPLICATE_CATEGORY",
    "JDEX_DUPLICATE_ID",
    "JDEX_FILE_OUTSIDE_CATEGORY",
    "JDEX_ID_IN_WRONG_CATEGORY",
    "JDEX_INVALID_AREA_NAME",
    "JDEX_INVALID_CATEGORY_NAME",
    "JDEX_INVALID_ID_NAME",
];

/// Look up the documentation of a kind by name (case-insensitive).
pub fn explain_kind(name: &str) -> Option<&'static Rule> {
    let name = name.to_uppercase();
    LINT_RULES
        .iter()
        .chain(JDEX_RULES.iter())
        .find(|rule| rule.kind == name)
}
