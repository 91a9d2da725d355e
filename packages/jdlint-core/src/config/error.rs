//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Disabled rule is not one of the known error kinds
    #[error("Unknown rule '{rule}' in 'disabled'. {suggestion}")]
    UnknownRule { rule: String, suggestion: String },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Note extension must be a bare alphanumeric suffix
    #[error("Invalid note extension '{0}'. Use a bare extension such as 'md' or 'txt'")]
    InvalidExtension(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create an unknown rule error with a suggestion drawn from `known`
    pub fn unknown_rule_with_suggestion(rule: impl Into<String>, known: &[&str]) -> Self {
        let rule = rule.into();
        let suggestion = find_closest_match(&rule, known);
        Self::UnknownRule { rule, suggestion }
    }
}

/// Find closest match using simple edit distance
fn find_closest_match(target: &str, candidates: &[&str]) -> String {
    let upper = target.to_uppercase();
    match candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(&upper, candidate))
    {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => "No rules available".to_string(),
    }
}

/// Simple Levenshtein distance implementation
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
