//! Codec layer for compressed page streams.
//!
//! # Submodules
//!
//! - [`compression`][]: Single-stream zlib inflation with exact boundary reporting
pub mod compression;
