//! Glob-backed ignore filter
//!
//! Patterns match against `nested_under/name` relative to the scanned root.
//! A relative pattern with `n` components matches the last `n` components of
//! the path, so `*.tmp` matches at any depth and `11 Me/*.pdf` matches any
//! pdf directly inside a folder named `11 Me`. A leading `/` anchors the
//! pattern at the root. `*` never crosses `/`.

use std::collections::BTreeMap;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use jdlint_core::{IgnoreFilter, JdlintError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GlobIgnore {
    anchored: GlobSet,
    /// Relative patterns grouped by component count
    by_depth: BTreeMap<usize, GlobSet>,
}

impl GlobIgnore {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, JdlintError> {
        let mut anchored = GlobSetBuilder::new();
        let mut relative: BTreeMap<usize, GlobSetBuilder> = BTreeMap::new();

        for pattern in patterns {
            let original = pattern.as_ref();
            let pattern = match original.trim_end_matches('/') {
                "" => original,
                trimmed => trimmed,
            };
            if let Some(rest) = pattern.strip_prefix('/') {
                anchored.add(compile(original, rest)?);
            } else {
                let depth = pattern.split('/').filter(|c| !c.is_empty()).count();
                relative
                    .entry(depth.max(1))
                    .or_insert_with(GlobSetBuilder::new)
                    .add(compile(original, pattern)?);
            }
        }

        let by_depth: BTreeMap<usize, GlobSet> = relative
            .into_iter()
            .map(|(depth, builder)| {
                builder
                    .build()
                    .map(|set| (depth, set))
                    .map_err(|err| JdlintError::ignore_pattern("<ignore set>", err))
            })
            .collect::<Result<_, JdlintError>>()?;

        Ok(Self {
            anchored: anchored
                .build()
                .map_err(|err| JdlintError::ignore_pattern("<ignore set>", err))?,
            by_depth,
        })
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.anchored.is_empty() && self.by_depth.is_empty()
    }
}

fn compile(original: &str, pattern: &str) -> Result<Glob, JdlintError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|err| JdlintError::ignore_pattern(original, err))
}

impl IgnoreFilter for GlobIgnore {
    fn is_ignored(&self, nested_under: &[String], name: &str) -> bool {
        let mut components: Vec<&str> = nested_under.iter().map(String::as_str).collect();
        components.push(name);

        if self.anchored.is_match(components.join("/")) {
            debug!("Anchored ignore matched {}", components.join("/"));
            return true;
        }

        self.by_depth.iter().any(|(&depth, set)| {
            depth <= components.len()
                && set.is_match(components[components.len() - depth..].join("/"))
        })
    }
}
