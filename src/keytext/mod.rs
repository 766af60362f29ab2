//! Core key-text reader module
//!
//! A key-text file is a blob of back-to-back zlib streams with no offset
//! table. Each stream inflates to a page of framed containers, and each
//! container groups the items indexed under one search key.
//!
//! Decoding runs in one forward pass:
//!
//! ```text
//! file bytes ─► iter::SegmentIterator ─► format::page::PageParser ─► index::IndexBuilder
//!               (find + inflate)          (once per page)              (whole file)
//! ```

pub mod codec;
pub mod format;
pub mod index;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

use std::path::Path;

pub use reader::KeyTextReader;
pub use types::error::{KeyTextError, Result};
pub use types::models::{Container, IndexEntry, Item, KeyTextIndex, RecordKind};

/// Reads and decodes a key-text file in one call.
///
/// `has_yomi` declares whether the dictionary carries readings; when it is
/// `false`, any item with a reading is rejected.
pub fn convert_keytext(path: impl AsRef<Path>, has_yomi: bool) -> Result<KeyTextIndex> {
    KeyTextReader::open(path)?.into_index(has_yomi)
}
