//! Per-level registries of everything that passed classification

use std::collections::BTreeMap;

use super::entry::Entry;
use super::number_key::{AreaKey, CategoryKey, IdKey};

/// One registration: the label after the number, and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub label: String,
    pub entry: Entry,
}

/// Mapping from a key to every registration that claimed it.
///
/// Registrations for one key keep discovery order. More than one
/// registration under a key means the key is duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<K: Ord> {
    slots: BTreeMap<K, Vec<Registration>>,
}

impl<K: Ord> Default for Registry<K> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> Registry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: K, label: impl Into<String>, entry: Entry) {
        self.slots.entry(key).or_default().push(Registration {
            label: label.into(),
            entry,
        });
    }

    pub fn get(&self, key: &K) -> Option<&[Registration]> {
        self.slots.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[Registration])> {
        self.slots.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The label for `key` when exactly one registration claims it.
    pub fn unique_label(&self, key: &K) -> Option<&str> {
        match self.slots.get(key).map(Vec::as_slice) {
            Some([only]) => Some(&only.label),
            _ => None,
        }
    }

    /// Collapse to `key -> label`, keeping the first registration per key.
    pub fn to_table(&self) -> BTreeMap<K, String> {
        self.slots
            .iter()
            .filter_map(|(k, regs)| regs.first().map(|r| (k.clone(), r.label.clone())))
            .collect()
    }
}

/// The three registries built from one scanned tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registries {
    pub areas: Registry<AreaKey>,
    pub categories: Registry<CategoryKey>,
    pub ids: Registry<IdKey>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(name: &str) -> Entry {
        Entry::new(name, Path::new(name), Vec::new())
    }

    #[test]
    fn test_register_keeps_discovery_order() {
        let mut reg = Registry::new();
        reg.register(AreaKey::new("1"), "B", entry("10-19 B"));
        reg.register(AreaKey::new("1"), "A", entry("10-19 A"));

        let slot = reg.get(&AreaKey::new("1")).unwrap();
        assert_eq!(slot.len(), 2);
        assert_eq!(slot[0].label, "B");
        assert_eq!(slot[1].label, "A");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_unique_label_only_for_single_registration() {
        let mut reg = Registry::new();
        reg.register(CategoryKey::new("11"), "Me", entry("11 Me"));
        assert_eq!(reg.unique_label(&CategoryKey::new("11")), Some("Me"));

        reg.register(CategoryKey::new("11"), "You", entry("11 You"));
        assert_eq!(reg.unique_label(&CategoryKey::new("11")), None);
        assert_eq!(reg.unique_label(&CategoryKey::new("12")), None);
    }

    #[test]
    fn test_to_table() {
        let mut reg = Registry::new();
        reg.register(IdKey::new("11.01"), "Inbox", entry("11.01 Inbox"));
        let table = reg.to_table();
        assert_eq!(table.get(&IdKey::new("11.01")).map(String::as_str), Some("Inbox"));
    }
}
