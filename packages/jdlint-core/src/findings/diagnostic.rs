//! Diagnostic container shared by both error taxonomies

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::shared::models::Entry;

/// Static documentation for one error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub kind: &'static str,
    pub explanation: &'static str,
    pub fix: &'static str,
}

const UNDOCUMENTED: Rule = Rule {
    kind: "UNDOCUMENTED",
    explanation: "",
    fix: "",
};

/// Behaviour every error kind provides to reporting.
pub trait IssueKind {
    /// SCREAMING_SNAKE_CASE name, also used for disabling and sorting
    fn kind_name(&self) -> &'static str;

    /// Documentation table for the whole taxonomy
    fn rules() -> &'static [Rule]
    where
        Self: Sized;

    /// Render-ready message; `files[0]` is the subject for singular kinds
    fn render(&self, files: &[Entry]) -> String;

    fn explain(&self) -> &'static Rule
    where
        Self: Sized,
    {
        let kind = self.kind_name();
        Self::rules()
            .iter()
            .find(|rule| rule.kind == kind)
            .unwrap_or(&UNDOCUMENTED)
    }
}

/// One detected problem plus every entry it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic<I> {
    pub error: I,
    pub files: Vec<Entry>,
}

impl<I: IssueKind> Diagnostic<I> {
    pub fn new(error: I, files: Vec<Entry>) -> Self {
        Self { error, files }
    }

    pub fn single(error: I, entry: Entry) -> Self {
        Self {
            error,
            files: vec![entry],
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.error.kind_name()
    }

    pub fn render(&self) -> String {
        self.error.render(&self.files)
    }

    pub fn explain(&self) -> &'static Rule {
        self.error.explain()
    }

    fn cmp_for_report(&self, other: &Self) -> Ordering {
        self.kind_name().cmp(other.kind_name()).then_with(|| {
            let lhs = self.files.iter().map(Entry::sort_key);
            let rhs = other.files.iter().map(Entry::sort_key);
            lhs.cmp(rhs)
        })
    }
}

/// Order by kind name, then by the affected entries' nesting paths and names.
pub fn sort_diagnostics<I: IssueKind>(diagnostics: &mut [Diagnostic<I>]) {
    diagnostics.sort_by(|a, b| a.cmp_for_report(b));
}

/// Drop every diagnostic whose kind is listed in `disabled`.
///
/// Reporting-layer only: never call this before registries and
/// reconciliation are complete.
pub fn filter_disabled<I: IssueKind>(
    diagnostics: Vec<Diagnostic<I>>,
    disabled: &[String],
) -> Vec<Diagnostic<I>> {
    if disabled.is_empty() {
        return diagnostics;
    }
    let disabled: HashSet<&str> = disabled.iter().map(String::as_str).collect();
    diagnostics
        .into_iter()
        .filter(|d| !disabled.contains(d.kind_name()))
        .collect()
}

/// Heading line followed by one indented nesting path per entry.
pub(crate) fn render_duplicate(heading: &str, files: &[Entry]) -> String {
    let lines: Vec<String> = files.iter().map(Entry::nesting_path).collect();
    format!("{}:\n    {}", heading, lines.join("\n    "))
}
