//! Lint configuration
//!
//! A run is configured from up to three layers, later ones winning:
//! - defaults
//! - a YAML file (`.jdlint.yaml` at the root, or an explicit path)
//! - command-line flags, applied by the caller through the setters
//!
//! ```yaml
//! version: 1
//! jdex: ../00-09 System/00.00 JDex.txt
//! ignore:
//!   - ".*"
//!   - "*.tmp"
//! disabled:
//!   - NONEMPTY_INBOX
//! alt_zeros: false
//! note_extension: md
//! ```

pub mod error;

pub use error::{ConfigError, ConfigResult};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::findings::ALL_KIND_NAMES;

/// File name looked up at the lint root when no explicit config is given
pub const DEFAULT_CONFIG_FILE: &str = ".jdlint.yaml";

/// Supported schema versions
const SUPPORTED_VERSIONS: &[u32] = &[1];

fn default_note_extension() -> String {
    "md".to_string()
}

/// YAML schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileV1 {
    version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    jdex: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ignore: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    disabled: Vec<String>,

    #[serde(default)]
    alt_zeros: bool,

    #[serde(default = "default_note_extension")]
    note_extension: String,
}

/// Full configuration of a lint run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// JDex location, file or directory
    pub jdex: Option<PathBuf>,
    /// Glob patterns for entries to skip
    pub ignore: Vec<String>,
    /// Error kinds removed from the report
    pub disabled: Vec<String>,
    /// Alternate zero numbering for JDex notes
    pub alt_zeros: bool,
    /// Extension of JDex note files, without the dot
    pub note_extension: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            jdex: None,
            ignore: Vec::new(),
            disabled: Vec::new(),
            alt_zeros: false,
            note_extension: default_note_extension(),
        }
    }
}

/// The part of the configuration the engine itself reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    pub alt_zeros: bool,
    pub note_extension: String,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            alt_zeros: false,
            note_extension: default_note_extension(),
        }
    }
}

impl LintConfig {
    /// Load and validate a configuration file.
    ///
    /// A relative `jdex` path is resolved against the file's directory.
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)?;

        if let (Some(jdex), Some(dir)) = (config.jdex.as_mut(), path.parent()) {
            if jdex.is_relative() {
                *jdex = dir.join(&*jdex);
            }
        }
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            jdex: file.jdex,
            ignore: file.ignore,
            disabled: file.disabled,
            alt_zeros: file.alt_zeros,
            note_extension: file.note_extension,
        };
        config.validate()?;
        Ok(config)
    }

    /// `<root>/.jdlint.yaml` if it exists, defaults otherwise.
    pub fn discover(root: impl AsRef<Path>) -> ConfigResult<Self> {
        let candidate = root.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("Loading config from {}", candidate.display());
            Self::from_yaml(candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            jdex: self.jdex.clone(),
            ignore: self.ignore.clone(),
            disabled: self.disabled.clone(),
            alt_zeros: self.alt_zeros,
            note_extension: self.note_extension.clone(),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }

    /// Check disabled rule names and the note extension.
    pub fn validate(&self) -> ConfigResult<()> {
        for rule in &self.disabled {
            if !ALL_KIND_NAMES.contains(&rule.as_str()) {
                return Err(ConfigError::unknown_rule_with_suggestion(
                    rule.clone(),
                    ALL_KIND_NAMES,
                ));
            }
        }

        let ext = &self.note_extension;
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidExtension(ext.clone()));
        }
        Ok(())
    }

    pub fn options(&self) -> LintOptions {
        LintOptions {
            alt_zeros: self.alt_zeros,
            note_extension: self.note_extension.clone(),
        }
    }

    // Builder-style setters used when merging command-line flags

    pub fn jdex(mut self, path: impl Into<PathBuf>) -> Self {
        self.jdex = Some(path.into());
        self
    }

    pub fn ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn disable<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled.extend(rules.into_iter().map(Into::into));
        self
    }

    pub fn alt_zeros(mut self, enabled: bool) -> Self {
        self.alt_zeros = self.alt_zeros || enabled;
        self
    }
}
