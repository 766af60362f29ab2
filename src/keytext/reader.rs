use std::fs;
use std::path::Path;

use log::{debug, info};

use super::format::page::PageParser;
use super::index::IndexBuilder;
use super::iter::SegmentIterator;
use super::types::error::Result;
use super::types::models::KeyTextIndex;

/// The reader for key-text index files.
///
/// Holds the whole file in memory. Decoding consumes the reader, since the
/// page streams can only be discovered in a single forward pass.
#[derive(Debug)]
pub struct KeyTextReader {
    data: Vec<u8>,
}

impl KeyTextReader {
    /// Read a key-text file from the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening key-text file: {}", path.display());
        let data = fs::read(path)?;
        info!("Key-text file loaded: {} bytes", data.len());
        Ok(Self { data })
    }

    /// Wrap a blob that is already in memory.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Size of the raw blob in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Hands the blob to the stream scanner.
    pub fn into_segments(self) -> SegmentIterator {
        SegmentIterator::new(self.data)
    }

    /// Decodes every page and assembles the lookup index.
    ///
    /// `has_yomi` declares whether the dictionary carries readings.
    ///
    /// # Errors
    /// Returns the first stream, framing or validation error encountered.
    pub fn into_index(self, has_yomi: bool) -> Result<KeyTextIndex> {
        let mut builder = IndexBuilder::new(has_yomi);
        for (page_no, payload) in self.into_segments().enumerate() {
            let payload = payload?;
            let containers = PageParser::new(&payload).parse()?;
            debug!("Page {}: {} containers", page_no, containers.len());
            builder.extend(containers)?;
        }
        Ok(builder.finish())
    }
}
