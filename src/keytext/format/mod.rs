//! Record parsing layer for inflated key-text pages.
//!
//! # Module Organization
//!
//! - [`page`]: Parses one inflated page into framed containers and items
//!
//! # Page Layout
//!
//! ```text
//! Page:
//! ┌──────────────────────────────┐
//! │ Container                    │ ← page::PageParser::parse()
//! │  u32 declared length         │
//! │  u32 item count              │
//! │  ┌────────────────────────┐  │
//! │  │ Item                   │  │
//! │  │  u16 declared length   │  │
//! │  │  u32 checksum          │  │
//! │  │  u32 entry chunk id    │  │
//! │  │  u16 flag              │  │
//! │  │  5 × (u16 len, UTF-16) │  │
//! │  └────────────────────────┘  │
//! ├──────────────────────────────┤
//! │ Container ...                │
//! └──────────────────────────────┘
//! ```

pub mod page;
