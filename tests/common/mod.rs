//! Builders for synthetic key-text pages and blobs.
#![allow(dead_code)]

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

/// Field values of one item, before framing.
#[derive(Debug, Clone, Default)]
pub struct ItemSpec {
    pub checksum: u32,
    pub chunk_id: u32,
    pub flag: u16,
    pub search_key: String,
    pub title: String,
    pub entry_ref: String,
    pub anchor: String,
    pub yomi: String,
}

impl ItemSpec {
    pub fn new(search_key: &str, title: &str, entry_ref: &str) -> Self {
        Self {
            search_key: search_key.to_string(),
            title: title.to_string(),
            entry_ref: entry_ref.to_string(),
            ..Self::default()
        }
    }

    pub fn anchor(mut self, anchor: &str) -> Self {
        self.anchor = anchor.to_string();
        self
    }

    pub fn yomi(mut self, yomi: &str) -> Self {
        self.yomi = yomi.to_string();
        self
    }

    /// Frames the item: u16 length, header fields, five text fields.
    pub fn encode(&self) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(&self.checksum.to_le_bytes());
        body.extend_from_slice(&self.chunk_id.to_le_bytes());
        body.extend_from_slice(&self.flag.to_le_bytes());
        for field in [&self.search_key, &self.title, &self.entry_ref, &self.anchor, &self.yomi] {
            let text = utf16le(field);
            body.extend_from_slice(&(text.len() as u16).to_le_bytes());
            body.extend_from_slice(&text);
        }
        let mut out = (body.len() as u16).to_le_bytes().to_vec();
        out.extend_from_slice(&body);
        out
    }
}

pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Frames a container around already-encoded items.
pub fn encode_container(items: &[Vec<u8>]) -> Vec<u8> {
    encode_container_with_len_delta(items, 0)
}

/// Frames a container whose declared length is off by `delta` bytes.
pub fn encode_container_with_len_delta(items: &[Vec<u8>], delta: i64) -> Vec<u8> {
    let mut body = (items.len() as u32).to_le_bytes().to_vec();
    for item in items {
        body.extend_from_slice(item);
    }
    let declared = (body.len() as i64 + delta) as u32;
    let mut out = declared.to_le_bytes().to_vec();
    out.extend_from_slice(&body);
    out
}

/// A page holding one container per key group.
pub fn encode_page(groups: &[Vec<ItemSpec>]) -> Vec<u8> {
    groups
        .iter()
        .flat_map(|group| {
            let items: Vec<Vec<u8>> = group.iter().map(ItemSpec::encode).collect();
            encode_container(&items)
        })
        .collect()
}

pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Concatenates compressed payloads, each preceded by its padding bytes.
pub fn build_blob<P: AsRef<[u8]>>(pages: &[(&[u8], P)]) -> Vec<u8> {
    let mut blob = Vec::new();
    for (padding, payload) in pages {
        blob.extend_from_slice(padding);
        blob.extend_from_slice(&deflate(payload.as_ref()));
    }
    blob
}
