//! Files and folders seen during a lint run

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;

/// A file or folder encountered while scanning a tree.
///
/// `nested_under` holds the names of every ancestor between the scanned
/// root and this entry (the root itself is not included). It drives both
/// ignore matching and the deterministic ordering of diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub full_path: String,
    pub nested_under: Vec<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, full_path: &Path, nested_under: Vec<String>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.to_string_lossy().into_owned(),
            nested_under,
        }
    }

    /// Build an entry for `path`, recording its ancestors below `root`.
    pub fn relative_to(root: &Path, path: &Path) -> Self {
        let mut components: Vec<String> = path
            .strip_prefix(root)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let name = components.pop().unwrap_or_default();
        Self::new(name, path, components)
    }

    /// Sort key: ancestors first, then the entry's own name.
    pub fn sort_key(&self) -> (&[String], &str) {
        (&self.nested_under, &self.name)
    }

    /// `Area/Category/Name` style path relative to the scanned root.
    pub fn nesting_path(&self) -> String {
        if self.nested_under.is_empty() {
            return self.name.clone();
        }
        format!("{}/{}", self.nested_under.join("/"), self.name)
    }

    /// Ancestor list for the children of this entry.
    pub fn child_nesting(&self) -> Vec<String> {
        let mut nesting = self.nested_under.clone();
        nesting.push(self.name.clone());
        nesting
    }
}

/// Compare two entries by nesting path, then name.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(nested: &[&str], name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            full_path: format!("/root/{}", name),
            nested_under: nested.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_nesting_path_at_root() {
        assert_eq!(entry(&[], "10-19 Life Admin").nesting_path(), "10-19 Life Admin");
    }

    #[test]
    fn test_nesting_path_nested() {
        let e = entry(&["10-19 Life Admin", "11 Me"], "11.01 Inbox");
        assert_eq!(e.nesting_path(), "10-19 Life Admin/11 Me/11.01 Inbox");
    }

    #[test]
    fn test_ordering_prefers_shallower_prefix() {
        let shallow = entry(&["10-19 A"], "zzz");
        let deep = entry(&["10-19 A", "11 B"], "aaa");
        assert_eq!(compare_entries(&shallow, &deep), Ordering::Less);
    }

    #[test]
    fn test_ordering_falls_back_to_name() {
        let a = entry(&["10-19 A"], "11 Alpha");
        let b = entry(&["10-19 A"], "11 Beta");
        assert_eq!(compare_entries(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_relative_to_root() {
        let root = Path::new("/data/jd");
        let path = root.join("10-19 A").join("11 B").join("11.01 Inbox");
        let e = Entry::relative_to(root, &path);
        assert_eq!(e.name, "11.01 Inbox");
        assert_eq!(e.nested_under, vec!["10-19 A".to_string(), "11 B".to_string()]);
        assert_eq!(e.full_path, path.to_string_lossy());
    }

    #[test]
    fn test_child_nesting() {
        let e = entry(&["10-19 A"], "11 B");
        assert_eq!(e.child_nesting(), vec!["10-19 A".to_string(), "11 B".to_string()]);
    }
}
