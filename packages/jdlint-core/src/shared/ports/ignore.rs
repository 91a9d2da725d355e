//! Ignore abstraction
//!
//! The engine never interprets ignore patterns itself. Callers hand in an
//! `IgnoreFilter` and every visited entry is checked against it before it
//! is classified.

/// Decides whether an entry is skipped entirely.
pub trait IgnoreFilter {
    /// `nested_under` is the ancestor list relative to the scanned root.
    fn is_ignored(&self, nested_under: &[String], name: &str) -> bool;
}

/// Filter that ignores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIgnore;

impl IgnoreFilter for NoIgnore {
    fn is_ignored(&self, _nested_under: &[String], _name: &str) -> bool {
        false
    }
}

impl<F> IgnoreFilter for F
where
    F: Fn(&[String], &str) -> bool,
{
    fn is_ignored(&self, nested_under: &[String], name: &str) -> bool {
        self(nested_under, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ignore() {
        assert!(!NoIgnore.is_ignored(&[], ".DS_Store"));
    }

    #[test]
    fn test_closure_filter() {
        let filter = |_: &[String], name: &str| name.starts_with('.');
        assert!(filter.is_ignored(&[], ".DS_Store"));
        assert!(!filter.is_ignored(&["10-19 A".to_string()], "11 B"));
    }
}
