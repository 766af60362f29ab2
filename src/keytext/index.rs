//! Assembly of parsed containers into the final lookup index.

use log::info;

use super::types::error::{KeyTextError, Result};
use super::types::models::{Container, IndexEntry, KeyTextIndex};

/// Accumulates containers, in scan order, into a [`KeyTextIndex`].
///
/// The index is append-only: a key is inserted once, with all of its
/// entries, and never revised afterwards.
#[derive(Debug)]
pub struct IndexBuilder {
    has_yomi: bool,
    index: KeyTextIndex,
    containers_seen: usize,
}

impl IndexBuilder {
    /// `has_yomi` declares whether items may carry a reading.
    pub fn new(has_yomi: bool) -> Self {
        Self {
            has_yomi,
            index: KeyTextIndex::default(),
            containers_seen: 0,
        }
    }

    /// Validates one container and appends its entries under its key.
    pub fn push_container(&mut self, container: Container) -> Result<()> {
        let index = self.containers_seen;
        self.containers_seen += 1;

        let search_key = match container.items.first() {
            Some(first) => first.search_key.clone(),
            None => return Err(KeyTextError::EmptyContainer { index }),
        };
        if self.index.contains_key(&search_key) {
            return Err(KeyTextError::DuplicateKey { key: search_key });
        }

        let mut entries = Vec::with_capacity(container.items.len());
        for item in container.items {
            if item.search_key != search_key {
                return Err(KeyTextError::KeyMismatch {
                    key: search_key,
                    found: item.search_key,
                });
            }
            if item.entry_ref.is_empty() && !item.anchor.is_empty() {
                return Err(KeyTextError::AnchorWithoutEntry {
                    key: search_key,
                    anchor: item.anchor,
                });
            }
            if !self.has_yomi && !item.yomi.is_empty() {
                return Err(KeyTextError::UnexpectedYomi {
                    key: search_key,
                    yomi: item.yomi,
                });
            }
            entries.push(IndexEntry::from(item));
        }

        self.index.insert_new(search_key, entries);
        Ok(())
    }

    /// Validates and appends every container of one page.
    pub fn extend<I: IntoIterator<Item = Container>>(&mut self, containers: I) -> Result<()> {
        containers
            .into_iter()
            .try_for_each(|container| self.push_container(container))
    }

    pub fn finish(self) -> KeyTextIndex {
        info!(
            "Convert {} (merged) / {} (split) index links",
            self.index.len(),
            self.index.num_entries()
        );
        self.index
    }
}
