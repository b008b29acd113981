//! Core compiled-catalog reader module

pub mod catalog;
pub mod decoder;
pub mod format;
pub mod loader;
pub mod metadata;
pub mod types;
mod utils;

pub use catalog::Catalog;
pub use decoder::{decode, DecodeOptions};
pub use types::error::{CorruptKind, LoadError, MoError, Result};
