//! Sequential discovery of the page streams embedded in a key-text blob.
//!
//! The blob carries no offset table. [`SegmentIterator`] therefore treats every
//! byte offset as a candidate stream start: it tries to inflate at the cursor,
//! steps one byte forward when that fails, and jumps over the whole stream when
//! it succeeds.
//!
//! # Example
//! ```no_run
//! # use keytext_reader::KeyTextReader;
//! let reader = KeyTextReader::open("KeyText.data").unwrap();
//! for payload in reader.into_segments() {
//!     println!("page of {} bytes", payload.unwrap().len());
//! }
//! ```

use log::{debug, trace};

use super::codec::compression::{inflate_stream, Inflated};
use super::types::error::{KeyTextError, Result};

/// Scanning stops once fewer than this many bytes remain.
const MIN_WINDOW_LEN: usize = 2;

/// Iterator over the inflated payloads of a key-text blob, in file order.
///
/// The iterator owns the blob and cannot be restarted. After the first error
/// it yields `None`.
///
/// Created by [`KeyTextReader::into_segments()`](crate::KeyTextReader::into_segments).
#[derive(Debug)]
pub struct SegmentIterator {
    data: Vec<u8>,
    pos: usize,
    /// Start of the current run of bytes that did not begin a stream.
    skipped_from: Option<usize>,
    finished: bool,
}

impl SegmentIterator {
    pub fn new(data: Vec<u8>) -> Self {
        debug!("Read data of length {}", data.len());
        Self {
            data,
            pos: 0,
            skipped_from: None,
            finished: false,
        }
    }

    /// Current scan offset into the blob.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn fail(&mut self, error: KeyTextError) -> Option<Result<Vec<u8>>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl Iterator for SegmentIterator {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.data.len() - self.pos >= MIN_WINDOW_LEN {
            match inflate_stream(&self.data[self.pos..]) {
                Inflated::Stream { data, consumed } => {
                    if let Some(start) = self.skipped_from.take() {
                        trace!("Skipped {} bytes of padding at {:#010x}", self.pos - start, start);
                    }
                    debug!(
                        "At {:#010x}: found zlib compressed data of length {}, decompressed data of length {}",
                        self.pos,
                        consumed,
                        data.len()
                    );
                    self.pos += consumed;
                    return Some(Ok(data));
                }
                Inflated::NotAStream => {
                    self.skipped_from.get_or_insert(self.pos);
                    self.pos += 1;
                }
                Inflated::Truncated => {
                    let error = KeyTextError::TruncatedStream {
                        offset: self.pos,
                        available: self.data.len() - self.pos,
                    };
                    return self.fail(error);
                }
            }
        }

        // Skipped bytes that never led to a stream are an unconsumed tail.
        if let Some(start) = self.skipped_from.take() {
            let unconsumed = self.data.len() - start;
            if unconsumed >= MIN_WINDOW_LEN {
                return self.fail(KeyTextError::StreamIntegrity { offset: start, unconsumed });
            }
        }

        self.finished = true;
        None
    }
}

impl std::iter::FusedIterator for SegmentIterator {}
