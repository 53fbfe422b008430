//! Sectioned output document.
//!
//! Sections keep first-appearance order and entries keep insertion order.
//! Keys are not deduplicated: appending an existing key adds another entry.

use std::fmt;

use indexmap::IndexMap;

/// A single `Key = Value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Borrowed view of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    name: &'a str,
    entries: &'a [Entry],
}

impl<'a> Section<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[must_use]
    pub fn entries(&self) -> &'a [Entry] {
        self.entries
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// Translated renderer config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, Vec<Entry>>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key = value` to `section`, creating the section at the end
    /// when it does not exist yet.
    pub fn append(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        let entry = Entry {
            key: key.into(),
            value: value.into(),
        };

        match self.sections.get_mut(section) {
            Some(entries) => entries.push(entry),
            None => {
                self.sections.insert(section.to_owned(), vec![entry]);
            }
        }
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<Section<'_>> {
        self.sections
            .get_key_value(name)
            .map(|(name, entries)| Section { name, entries })
    }

    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        self.sections
            .iter()
            .map(|(name, entries)| Section { name, entries })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections() {
            writeln!(f, "[{}]", section.name())?;
            for entry in section.entries() {
                writeln!(f, "{} = {}", entry.key, entry.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
