//! Zlib inflation for embedded page streams.
//!
//! Page streams sit back to back inside the key-text blob with no length
//! table, so the inflater has to report where a stream ends on its own.
//! [`inflate_stream`] feeds the whole remaining blob to a raw flate2
//! [`Decompress`] and reads the stream boundary back from `total_in()` once the
//! end marker has been seen. Everything after that boundary is unused data for
//! the caller's next search window.

use flate2::{Decompress, FlushDecompress, Status};
use log::trace;

/// Initial output buffer size. Grows by doubling.
const INITIAL_OUTPUT_CAPACITY: usize = 16 * 1024;

/// Result of trying to inflate one zlib stream at the start of a window.
#[derive(Debug, PartialEq, Eq)]
pub enum Inflated {
    /// A complete stream was found.
    Stream {
        /// The inflated payload.
        data: Vec<u8>,
        /// Bytes of the window that belong to this stream.
        consumed: usize,
    },
    /// The window does not start with a valid zlib header and body.
    NotAStream,
    /// A valid stream began but the window ended before its end marker.
    Truncated,
}

/// Attempts to inflate one zlib stream starting at `input[0]`.
///
/// Trailing bytes after the stream's end marker are left untouched; the
/// returned `consumed` count says where they begin.
pub fn inflate_stream(input: &[u8]) -> Inflated {
    let mut inflater = Decompress::new(true);
    let mut output = Vec::with_capacity(INITIAL_OUTPUT_CAPACITY);

    loop {
        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let consumed = in_before as usize;

        let status = match inflater.decompress_vec(&input[consumed..], &mut output, FlushDecompress::None) {
            Ok(status) => status,
            Err(e) => {
                trace!("Not a zlib stream after {} bytes: {}", consumed, e);
                return Inflated::NotAStream;
            }
        };

        match status {
            Status::StreamEnd => {
                return Inflated::Stream {
                    data: output,
                    consumed: inflater.total_in() as usize,
                };
            }
            Status::Ok | Status::BufError => {
                if output.len() == output.capacity() {
                    output.reserve(output.capacity());
                    continue;
                }
                let progressed = inflater.total_in() != in_before || inflater.total_out() != out_before;
                if inflater.total_in() as usize == input.len() || !progressed {
                    return Inflated::Truncated;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn reports_stream_boundary_before_unused_data() {
        let mut blob = deflate(b"first page");
        let stream_len = blob.len();
        blob.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);

        assert_eq!(
            inflate_stream(&blob),
            Inflated::Stream { data: b"first page".to_vec(), consumed: stream_len }
        );
    }

    #[test]
    fn grows_output_past_initial_capacity() {
        let payload: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        match inflate_stream(&deflate(&payload)) {
            Inflated::Stream { data, .. } => assert_eq!(data, payload),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_header() {
        assert_eq!(inflate_stream(&[0xff, 0xff, 0x00, 0x01]), Inflated::NotAStream);
    }

    #[test]
    fn detects_truncated_stream() {
        let payload: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 256) as u8).collect();
        let stream = deflate(&payload);
        assert_eq!(inflate_stream(&stream[..stream.len() - 6]), Inflated::Truncated);
    }
}
