//! # keytext-reader
//!
//! A reader for compiled dictionary key-text index files.
//! Locates the zlib page streams embedded in the blob, parses their framed
//! containers, and assembles a `search key -> entries` index. A converter for
//! the companion tab-separated body file is included.
pub mod body;
pub mod keytext;

// Re-export the main types for convenience
pub use keytext::{
    convert_keytext,
    KeyTextError,
    KeyTextReader,
    Result,
    types::models::{
        Container,
        IndexEntry,
        Item,
        KeyTextIndex,
    },
};
pub use body::{convert_body, BodyEntry, BodyIndex};
