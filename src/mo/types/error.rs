//! Custom error types for the mo-reader crate.

use std::path::PathBuf;
use thiserror::Error;
use super::models::Side;

/// The primary error type for decoding a compiled catalog.
#[derive(Debug, Error)]
pub enum MoError {
    /// The first four bytes match neither the little-endian nor the big-endian magic.
    #[error("Bad magic number: {found:#010x}")]
    BadMagic { found: u32 },

    /// A header, index table or string body is shorter than declared.
    #[error("Unexpected end of data while reading {context}")]
    Truncated { context: &'static str },

    /// A record declares a range or layout that cannot be valid.
    #[error("Corrupt record {index}: {kind}")]
    Corrupt { index: u32, kind: CorruptKind },

    /// A string body is not valid UTF-8 and lossy decoding was not requested.
    #[error("Record {index} has an invalid UTF-8 {side} string")]
    InvalidUtf8 { index: u32, side: Side },

    /// An I/O error from the byte source other than running out of data.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),
}

/// The ways a single record can be structurally invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorruptKind {
    /// `offset + length` points past the end of the file.
    #[error("{side} range ends at byte {end}, but the file is only {file_len} bytes")]
    RangeExceedsFile { side: Side, end: u64, file_len: u64 },

    /// The source has a plural separator but the translation has none.
    #[error("source has a plural form but the translation has no NUL separator")]
    MissingPluralSeparator,
}

/// Errors raised while locating and loading catalogs from disk.
///
/// Kept apart from [`MoError`]: a missing locale file is not a decoding failure.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Catalog not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: MoError,
    },
}

/// A convenience `Result` type alias using the crate's `MoError` type.
pub type Result<T> = std::result::Result<T, MoError>;
