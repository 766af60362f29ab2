//! # Page Parsing
//!
//! Turns one inflated page into its ordered containers. Every record states
//! its byte span before its contents, and that span is the only integrity
//! signal the format offers: the stored checksum field is never verified.
//! A declared length that disagrees with the bytes actually consumed is
//! therefore treated as corruption.

use log::trace;

use crate::keytext::types::error::{KeyTextError, Result};
use crate::keytext::types::models::{Container, Item, RecordKind};
use crate::keytext::utils::ByteCursor;

/// Recursive-descent parser over one inflated page.
#[derive(Debug)]
pub struct PageParser<'a> {
    cursor: ByteCursor<'a>,
}

impl<'a> PageParser<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(data),
        }
    }

    /// Parses the whole page.
    ///
    /// The page must end exactly on a container boundary. Running out of
    /// bytes anywhere inside a container is an error.
    pub fn parse(mut self) -> Result<Vec<Container>> {
        let mut containers = Vec::new();
        while !self.cursor.is_at_end() {
            containers.push(self.parse_container()?);
        }

        // Unreachable unless a container parse stopped short without an error.
        if !self.cursor.is_at_end() {
            return Err(KeyTextError::TrailingData {
                offset: self.cursor.position(),
                remaining: self.cursor.remaining(),
            });
        }

        trace!("Parsed {} containers from page", containers.len());
        Ok(containers)
    }

    fn parse_container(&mut self) -> Result<Container> {
        let start = self.cursor.position();
        let declared_len = self.cursor.read_u32("container length")?;
        let expected_end = self.cursor.position() + declared_len as usize;

        let item_count = self.cursor.read_u32("item count")?;
        let items = (0..item_count)
            .map(|_| self.parse_item())
            .collect::<Result<Vec<_>>>()?;

        self.expect_end(RecordKind::Container, start, expected_end)?;

        Ok(Container {
            declared_len,
            item_count,
            items,
        })
    }

    fn parse_item(&mut self) -> Result<Item> {
        let start = self.cursor.position();
        let declared_len = self.cursor.read_u16("item length")?;
        let expected_end = self.cursor.position() + declared_len as usize;

        let magic_checksum = self.cursor.read_u32("checksum")?;
        let entry_chunk_id = self.cursor.read_u32("entry chunk id")?;
        let magic_flag = self.cursor.read_u16("flag")?;

        let key_len_offset = self.cursor.position();
        let search_key_len = self.cursor.read_u16("search key length")?;
        if search_key_len == 0 {
            return Err(KeyTextError::ZeroLengthSearchKey { offset: key_len_offset });
        }
        let search_key = self.cursor.read_utf16(search_key_len as usize, "search key")?;

        let title = self.read_text("title length", "title")?;
        let entry_ref = self.read_text("entry length", "entry")?;
        let anchor = self.read_text("anchor length", "anchor")?;
        let yomi = self.read_text("yomi length", "yomi")?;

        self.expect_end(RecordKind::Item, start, expected_end)?;

        Ok(Item {
            declared_len,
            magic_checksum,
            entry_chunk_id,
            magic_flag,
            search_key,
            title,
            entry_ref,
            anchor,
            yomi,
        })
    }

    /// Reads one u16-length-prefixed UTF-16LE field.
    fn read_text(&mut self, len_field: &'static str, field: &'static str) -> Result<String> {
        let len = self.cursor.read_u16(len_field)?;
        self.cursor.read_utf16(len as usize, field)
    }

    fn expect_end(&self, record: RecordKind, start: usize, expected_end: usize) -> Result<()> {
        let actual_end = self.cursor.position();
        if actual_end != expected_end {
            return Err(KeyTextError::Framing {
                record,
                start,
                expected_end,
                actual_end,
            });
        }
        Ok(())
    }
}
