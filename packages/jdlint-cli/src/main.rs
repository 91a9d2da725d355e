//! jdlint - Johnny Decimal linter
//!
//! # Usage
//!
//! ```bash
//! # Lint a tree
//! jdlint ~/Documents
//!
//! # Cross-check against a JDex, machine-readable output
//! jdlint ~/Documents --jdex ~/Documents/00-09\ System/00.00\ JDex --format json
//!
//! # Skip dotfiles and silence a rule
//! jdlint ~/Documents --ignore '.*' --disable NONEMPTY_INBOX
//! ```
//!
//! Exit codes: 0 clean, 1 findings, 2 fatal error.

mod ignore;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use jdlint_core::{explain_kind, run, LintConfig};

use crate::ignore::GlobIgnore;
use crate::report::{render, OutputFormat};

const EXIT_FINDINGS: u8 = 1;
const EXIT_FATAL: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "jdlint")]
#[command(version, about = "Lint a Johnny Decimal file system", long_about = None)]
struct Cli {
    /// Root of the Johnny Decimal tree
    #[arg(required_unless_present = "explain")]
    root: Option<PathBuf>,

    /// JDex file or directory to cross-check against
    #[arg(long)]
    jdex: Option<PathBuf>,

    /// Glob of entries to skip (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Error kind to leave out of the report (repeatable)
    #[arg(long = "disable", value_name = "KIND")]
    disable: Vec<String>,

    /// Use alternate zero numbering for JDex notes
    #[arg(long)]
    alt_zeros: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to <ROOT>/.jdlint.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the explanation and fix for an error kind, then exit
    #[arg(long, value_name = "KIND")]
    explain: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("JDLINT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: Cli) -> anyhow::Result<u8> {
    if let Some(kind) = &cli.explain {
        let Some(rule) = explain_kind(kind) else {
            bail!("Unknown error kind: {}", kind);
        };
        println!("{}\n\n{}\n\nFix: {}", rule.kind, rule.explanation, rule.fix);
        return Ok(0);
    }

    let Some(root) = cli.root.clone() else {
        bail!("A root directory is required");
    };
    let config = load_config(&cli, &root)?;
    debug!("Effective config: {:?}", config);

    let ignore = GlobIgnore::new(&config.ignore)?;
    let report = run(
        &root,
        config.jdex.as_deref(),
        &ignore,
        &config.options(),
    )
    .with_context(|| format!("Failed to lint {}", root.display()))?;

    let report = report.without_disabled(&config.disabled);
    let output = render(&report, cli.format)?;
    if !output.is_empty() {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }

    info!(
        "{} errors, {} JDex errors after filtering",
        report.errors.len(),
        report.jdex_errors.len()
    );
    Ok(if report.is_clean() { 0 } else { EXIT_FINDINGS })
}

/// Config file (explicit or discovered), then command-line flags on top.
fn load_config(cli: &Cli, root: &std::path::Path) -> anyhow::Result<LintConfig> {
    let mut config = match &cli.config {
        Some(path) => LintConfig::from_yaml(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LintConfig::discover(root).context("Failed to load .jdlint.yaml")?,
    };

    if let Some(jdex) = &cli.jdex {
        config = config.jdex(jdex);
    }
    config = config
        .ignore(cli.ignore.iter().cloned())
        .disable(cli.disable.iter().map(|kind| kind.to_uppercase()))
        .alt_zeros(cli.alt_zeros);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jdlint").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_extend_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".jdlint.yaml"),
            "version: 1\nignore:\n  - \".*\"\ndisabled:\n  - NONEMPTY_INBOX\n",
        )
        .unwrap();
        let root = dir.path().to_str().unwrap();

        let cli = parse(&[root, "--ignore", "*.tmp", "--disable", "file_outside_id"]);
        let config = load_config(&cli, dir.path()).unwrap();
        assert_eq!(config.ignore, vec![".*".to_string(), "*.tmp".to_string()]);
        assert_eq!(
            config.disabled,
            vec!["NONEMPTY_INBOX".to_string(), "FILE_OUTSIDE_ID".to_string()]
        );
    }

    #[test]
    fn test_unknown_disabled_kind_is_rejected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = parse(&[root, "--disable", "NONEMPTY_INBX"]);
        let err = load_config(&cli, dir.path()).unwrap_err();
        assert!(err.to_string().contains("NONEMPTY_INBOX"), "{}", err);
    }

    #[test]
    fn test_execute_exit_codes() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("10-19 Life Admin/11 Me/11.11 Passport")).unwrap();
        let root = dir.path().to_str().unwrap();
        assert_eq!(execute(parse(&[root])).unwrap(), 0);

        fs::write(dir.path().join("stray.txt"), "").unwrap();
        assert_eq!(execute(parse(&[root, "--format", "json"])).unwrap(), EXIT_FINDINGS);
        assert_eq!(
            execute(parse(&[root, "--disable", "FILE_OUTSIDE_ID"])).unwrap(),
            0
        );
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let cli = parse(&[missing.to_str().unwrap()]);
        assert!(execute(cli).is_err());
    }

    #[test]
    fn test_explain_does_not_need_root() {
        let cli = parse(&["--explain", "nonempty_inbox"]);
        assert_eq!(execute(cli).unwrap(), 0);
    }
}
