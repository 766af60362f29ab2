//! Low-level byte reading utilities

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::UTF_16LE;

use super::types::error::{KeyTextError, Result};

/// A forward-only cursor over an in-memory payload.
///
/// Every read either consumes exactly the requested bytes or fails with
/// [`KeyTextError::Exhausted`] without moving the cursor.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current offset from the start of the payload.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Read exactly `size` bytes.
    pub fn read_bytes(&mut self, size: usize, field: &'static str) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < size {
            return Err(KeyTextError::Exhausted {
                offset: self.pos,
                field,
                requested: size,
                available,
            });
        }
        let block = &self.data[self.pos..self.pos + size];
        self.pos += size;
        Ok(block)
    }

    /// Read a 2-byte little-endian number.
    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        self.read_bytes(2, field).map(LittleEndian::read_u16)
    }

    /// Read a 4-byte little-endian number.
    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        self.read_bytes(4, field).map(LittleEndian::read_u32)
    }

    /// Read `size` bytes as UTF-16LE text.
    ///
    /// Odd byte counts and unpaired surrogates are rejected rather than
    /// replaced.
    pub fn read_utf16(&mut self, size: usize, field: &'static str) -> Result<String> {
        let offset = self.pos;
        let block = self.read_bytes(size, field)?;
        UTF_16LE
            .decode_without_bom_handling_and_without_replacement(block)
            .map(|text| text.into_owned())
            .ok_or(KeyTextError::InvalidText { offset, field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_numbers() {
        let data = [0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u16("a").unwrap(), 0x1234);
        assert_eq!(cursor.read_u32("b").unwrap(), 0x1234_5678);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn exhausted_read_reports_request_and_leaves_cursor() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_u16("head").unwrap();
        match cursor.read_u32("tail") {
            Err(KeyTextError::Exhausted { offset, field, requested, available }) => {
                assert_eq!((offset, field, requested, available), (2, "tail", 4, 1));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn decodes_utf16_text() {
        let data: Vec<u8> = "りんご".encode_utf16().flat_map(u16::to_le_bytes).collect();
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_utf16(data.len(), "text").unwrap(), "りんご");
    }

    #[test]
    fn rejects_odd_length_and_lone_surrogate() {
        let odd = [0x61, 0x00, 0x62];
        assert!(matches!(
            ByteCursor::new(&odd).read_utf16(3, "text"),
            Err(KeyTextError::InvalidText { offset: 0, .. })
        ));

        let lone = [0x00, 0xD8];
        assert!(matches!(
            ByteCursor::new(&lone).read_utf16(2, "text"),
            Err(KeyTextError::InvalidText { .. })
        ));
    }
}
