//! File format parsing layer for compiled gettext catalogs.
//!
//! This module sits between raw seek/read calls and the high-level
//! [`decode`](crate::mo::decoder::decode) entry point.
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌────────────────────┐
//! │  Header (20 bytes) │ ← header::parse()
//! ├────────────────────┤
//! │  Master table      │ ← index::parse()
//! │  Translation table │
//! ├────────────────────┤
//! │  String bodies     │ ← strings::read_record()
//! │  (NUL-separated    │   strings::split_plural()
//! │   plural forms)    │
//! └────────────────────┘
//! ```

pub mod header;
pub mod index;
pub mod strings;
