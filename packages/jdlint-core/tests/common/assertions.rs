//! Custom assertions for diagnostic lists

use jdlint_core::{Diagnostic, IssueKind};

/// Kind names in report order.
pub fn kinds<I: IssueKind>(diagnostics: &[Diagnostic<I>]) -> Vec<&'static str> {
    diagnostics.iter().map(|d| d.kind_name()).collect()
}

/// Rendered messages in report order.
pub fn messages<I: IssueKind>(diagnostics: &[Diagnostic<I>]) -> Vec<String> {
    diagnostics.iter().map(|d| d.render()).collect()
}

pub fn assert_clean<I: IssueKind + std::fmt::Debug>(diagnostics: &[Diagnostic<I>]) {
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics, got: {:?}",
        messages(diagnostics)
    );
}

pub fn assert_kinds<I: IssueKind>(diagnostics: &[Diagnostic<I>], expected: &[&str]) {
    pretty_assertions::assert_eq!(kinds(diagnostics), expected.to_vec());
}

/// Output order must already be the canonical sort order.
pub fn assert_sorted<I: IssueKind + Clone>(diagnostics: &[Diagnostic<I>]) {
    let mut resorted = diagnostics.to_vec();
    jdlint_core::findings::sort_diagnostics(&mut resorted);
    let before: Vec<String> = diagnostics.iter().map(|d| d.render()).collect();
    let after: Vec<String> = resorted.iter().map(|d| d.render()).collect();
    pretty_assertions::assert_eq!(before, after);
}
