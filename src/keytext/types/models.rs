//! Core data structures for key-text index components.
//!
//! This module defines the records produced by the page parser and the map
//! produced by the index assembler:
//! - Raw framed records ([`Container`], [`Item`])
//! - Assembled lookup entries ([`IndexEntry`], [`KeyTextIndex`])

use std::collections::HashMap;
use std::fmt;

/// One indexed record as stored in an inflated page.
///
/// Each text field is stored on disk as a u16 byte length followed by
/// UTF-16LE code units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// Byte length of everything after the length field itself.
    pub declared_len: u16,
    /// Opaque value tied to the entry. Stored, never interpreted.
    pub magic_checksum: u32,
    pub entry_chunk_id: u32,
    /// Opaque flag word. Stored, never interpreted.
    pub magic_flag: u16,
    pub search_key: String,
    pub title: String,
    pub entry_ref: String,
    pub anchor: String,
    /// Phonetic reading, only populated by dictionaries that carry readings.
    pub yomi: String,
}

/// A framed group of items sharing one search key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    /// Byte length of the item count plus all items.
    pub declared_len: u32,
    pub item_count: u32,
    pub items: Vec<Item>,
}

/// The two record shapes of a page, used for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Container,
    Item,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordKind::Container => write!(f, "container"),
            RecordKind::Item => write!(f, "item"),
        }
    }
}

/// A single lookup entry of the assembled index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    pub search_key: String,
    pub title: String,
    pub entry_ref: String,
    pub anchor: String,
    pub yomi: String,
}

impl From<Item> for IndexEntry {
    fn from(item: Item) -> Self {
        Self {
            search_key: item.search_key,
            title: item.title,
            entry_ref: item.entry_ref,
            anchor: item.anchor,
            yomi: item.yomi,
        }
    }
}

/// The assembled `search key -> entries` map.
///
/// Keys keep the order in which they first appeared in the file, and each
/// key's entries keep their item order.
#[derive(Debug, Clone, Default)]
pub struct KeyTextIndex {
    groups: Vec<(String, Vec<IndexEntry>)>,
    lookup: HashMap<String, usize>,
}

impl KeyTextIndex {
    /// Returns `true` if `key` is already present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }

    /// Returns the entries grouped under `key`.
    pub fn get(&self, key: &str) -> Option<&[IndexEntry]> {
        self.lookup.get(key).map(|&idx| self.groups[idx].1.as_slice())
    }

    /// Number of distinct search keys ("merged" count).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of entries across all keys ("split" count).
    pub fn num_entries(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Iterates `(key, entries)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IndexEntry])> {
        self.groups
            .iter()
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }

    /// Appends a new key. The caller guarantees the key is not present yet.
    pub(crate) fn insert_new(&mut self, key: String, entries: Vec<IndexEntry>) {
        self.lookup.insert(key.clone(), self.groups.len());
        self.groups.push((key, entries));
    }

    /// Consumes the index into a plain map, dropping key order.
    pub fn into_map(self) -> HashMap<String, Vec<IndexEntry>> {
        self.groups.into_iter().collect()
    }
}
