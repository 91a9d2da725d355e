//! JSON report
//!
//! `{"errors": [...], "jdex_errors": [...]}`; each item is
//! `{"error": {"type": KIND, ...}, "files": [...]}`.

use jdlint_core::LintReport;

pub fn render_json(report: &LintReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
