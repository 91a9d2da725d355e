/*
 * jdlint-core - Johnny Decimal structure linter
 *
 * Feature-First Architecture:
 * - shared/      : Keys, entries, registries, ignore port
 * - features/    : classification → hierarchy → duplicates → jdex → reconcile
 * - findings/    : Closed diagnostic taxonomies
 * - pipeline/    : End-to-end runs
 *
 * The engine only reports. It never renames or moves anything.
 */

/// Shared models and ports
pub mod shared;

/// Feature modules (one per lint stage)
pub mod features;

/// Diagnostic taxonomies and reporting helpers
pub mod findings;

/// End-to-end entry points
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, LintConfig, LintOptions};
pub use errors::{JdlintError, Result};
pub use features::hierarchy::{HierarchyWalker, WalkOutcome};
pub use features::jdex::{CanonicalTables, JdexLayout, JdexResolver, Resolution};
pub use features::reconcile::reconcile;
pub use findings::{
    explain_kind, Diagnostic, IssueKind, JdexDiagnostic, JdexIssue, LintDiagnostic, LintIssue,
    Rule,
};
pub use pipeline::{lint_dir, lint_dir_and_jdex, run, LintReport};
pub use shared::{Entry, IgnoreFilter, NoIgnore};
