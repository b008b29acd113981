//! # mo-reader
//!
//! A reader for GNU gettext compiled message catalogs (`.mo` files).
//! Handles both byte orders and NUL-separated plural records, and rejects
//! truncated or corrupt input with an error instead of panicking.
//!
//! ```no_run
//! use std::fs::File;
//!
//! let file = File::open("locale/de/LC_MESSAGES/app.mo").unwrap();
//! let catalog = mo_reader::decode(file).unwrap();
//! println!("{}", catalog.lookup_plural("one apple", "%d apples", 3));
//! ```
pub mod mo;

// Re-export the main types for convenience
pub use mo::{
    decode,
    Catalog,
    CorruptKind,
    DecodeOptions,
    LoadError,
    MoError,
    loader,
    metadata::Metadata,
    types::models::{Endianness, IndexEntry, MoHeader, Record, Side},
};
