//! In-memory configuration store: sections of key-value pairs.
//!
//! Both section names and keys are case-insensitive. Each map is keyed by the
//! lowercase fold of the name and remembers the casing the name was first
//! inserted with, so a re-rendered document keeps the user's spelling.
//! `IndexMap` keeps insertion order, which is the order the codec renders in.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

fn fold(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: String,
    value: String,
}

/// A named group of key-value pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    entries: IndexMap<String, Entry>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: IndexMap::new(),
        }
    }

    /// The section name as it was first inserted.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&fold(key)).map(|e| e.value.as_str())
    }

    /// Insert or overwrite `key`. An existing key keeps its original casing.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let folded = fold(key);
        match self.entries.get_mut(&folded) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(
                    folded,
                    Entry {
                        key: key.to_string(),
                        value,
                    },
                );
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(&fold(key)).map(|e| e.value)
    }

    /// Key-value pairs in insertion order, keys in display casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The whole configuration document held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    sections: IndexMap<String, Section>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two-level case-insensitive lookup.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Insert or overwrite a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.ensure_section(section).set(key, value);
    }

    /// Remove a key. The section stays, even if it becomes empty.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        self.sections.get_mut(&fold(section))?.remove(key)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&fold(name))
    }

    /// Get the section called `name`, appending an empty one if it is new.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        self.sections
            .entry(fold(name))
            .or_insert_with(|| Section::new(name))
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Every `(section, key, value)` triple, in render order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.sections()
            .flat_map(|s| s.iter().map(move |(k, v)| (s.name(), k, v)))
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for ConfigStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in self.sections() {
            map.serialize_entry(section.name(), section)?;
        }
        map.end()
    }
}
