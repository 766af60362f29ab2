//! Custom error types for the keytext-reader crate.

use thiserror::Error;

use super::models::RecordKind;

/// The primary error type for all operations in this crate.
///
/// Every variant is fatal to the decode that produced it: a framing error
/// miscounts every record after it, so nothing past the first violation can
/// be trusted.
#[derive(Debug, Error)]
pub enum KeyTextError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// Bytes skipped while searching for a stream never led to a new stream.
    #[error("at {offset:#010x}: {unconsumed} trailing bytes are not part of any zlib stream")]
    StreamIntegrity { offset: usize, unconsumed: usize },

    /// A zlib stream started but the blob ended before its end marker.
    #[error("at {offset:#010x}: zlib stream is truncated ({available} bytes available)")]
    TruncatedStream { offset: usize, available: usize },

    /// A record's declared length disagrees with the bytes its fields consumed.
    #[error(
        "at {start:#010x}: {record} length mismatch, expected end at {expected_end:#010x}, currently at {actual_end:#010x}"
    )]
    Framing {
        record: RecordKind,
        start: usize,
        expected_end: usize,
        actual_end: usize,
    },

    /// A field needs more bytes than the payload has left.
    #[error("at {offset:#010x}: expected to read {requested} bytes for {field}, got {available} bytes instead")]
    Exhausted {
        offset: usize,
        field: &'static str,
        requested: usize,
        available: usize,
    },

    /// Parsing stopped before the end of the payload.
    #[error("at {offset:#010x}: read stopped unexpectedly with {remaining} bytes left")]
    TrailingData { offset: usize, remaining: usize },

    /// An item declared an empty search key.
    #[error("at {offset:#010x}: invalid search key length [00 00]")]
    ZeroLengthSearchKey { offset: usize },

    /// A text field is not valid UTF-16LE.
    #[error("at {offset:#010x}: {field} is not valid UTF-16LE")]
    InvalidText { offset: usize, field: &'static str },

    /// A container holds no items, so it has no search key.
    #[error("container #{index} holds no items")]
    EmptyContainer { index: usize },

    /// The same search key heads two containers.
    #[error("duplicated index \"{key}\"")]
    DuplicateKey { key: String },

    /// An item's search key differs from its container's.
    #[error("\"{key}\" -> search != \"{found}\"")]
    KeyMismatch { key: String, found: String },

    /// An item carries an anchor but no entry reference.
    #[error("\"{key}\" -> anchor \"{anchor}\" without entry")]
    AnchorWithoutEntry { key: String, anchor: String },

    /// An item carries a reading although the dictionary declares none.
    #[error("\"{key}\" -> unexpected yomi \"{yomi}\"")]
    UnexpectedYomi { key: String, yomi: String },

    /// A body line does not split into a headword and an explanation.
    #[error("line {line}: wrong body \"{content}\"")]
    InvalidBodyLine { line: usize, content: String },

    /// A body line is not newline-terminated.
    #[error("line {line}: missing line terminator")]
    MissingNewline { line: usize },
}

/// A convenience `Result` type alias using the crate's `KeyTextError` type.
pub type Result<T> = std::result::Result<T, KeyTextError>;
