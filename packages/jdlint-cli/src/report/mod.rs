//! Report rendering (text and JSON)

mod json;
mod text;

use clap::ValueEnum;
use jdlint_core::LintReport;

pub use json::render_json;
pub use text::render_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(report: &LintReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(render_json(report)?),
    }
}
