//! Bucket: one ordered chain of entries sharing a hash index.

use core::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    key: i32,
    value: String,
}

impl Entry {
    pub(crate) fn new(key: i32, value: String) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> i32 {
        self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the value in place; the key and chain position stay put.
    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}

/// Formats as `[<key>: <value>]`, the unit of the table dump.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.key, self.value)
    }
}

/// Chain of entries kept in insertion order. The chain itself does not
/// enforce key uniqueness; the table only pushes keys it failed to find.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bucket {
    entries: Vec<Entry>,
}

impl Bucket {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first entry whose key matches, scanning front to back.
    pub(crate) fn position(&self, key: i32) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub fn get(&self, key: i32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub(crate) fn get_mut(&mut self, key: i32) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    pub(crate) fn remove_at(&mut self, index: usize) -> Entry {
        self.entries.remove(index)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
