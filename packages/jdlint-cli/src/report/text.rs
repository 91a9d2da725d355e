//! Human-readable report
//!
//! Diagnostics arrive sorted by kind, so grouping is a single pass over
//! consecutive runs of the same kind.

use jdlint_core::{Diagnostic, IssueKind, LintReport};

const INDENT: &str = "    ";

pub fn render_text(report: &LintReport) -> String {
    let mut out = String::new();
    write_section(&mut out, &report.errors);
    if !report.jdex_errors.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("JDex errors:\n\n");
        write_section(&mut out, &report.jdex_errors);
    }
    out
}

fn write_section<I: IssueKind>(out: &mut String, diagnostics: &[Diagnostic<I>]) {
    let mut groups = diagnostics.chunk_by(|a, b| a.kind_name() == b.kind_name()).peekable();
    while let Some(group) = groups.next() {
        let rule = group[0].explain();
        out.push_str(&format!("{}: {}\n", group[0].kind_name(), rule.explanation));
        out.push_str(&format!("Fix: {}\n", rule.fix));
        for diagnostic in group {
            for line in diagnostic.render().lines() {
                out.push_str(INDENT);
                out.push_str(line);
                out.push('\n');
            }
        }
        if groups.peek().is_some() {
            out.push('\n');
        }
    }
}
