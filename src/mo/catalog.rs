//! The in-memory translation catalog produced by decoding.

use std::collections::HashMap;
use std::io::{Read, Seek};
use log::warn;
use super::decoder;
use super::metadata::Metadata;
use super::types::error::Result;
use super::types::models::MoHeader;

/// Key under which a compiled catalog stores its header entry.
pub const HEADER_KEY: &str = "";

/// An immutable mapping from source strings to their translations.
///
/// Built once by the decoder and never mutated afterwards, so a catalog can be
/// shared between threads (e.g. behind an `Arc`) without locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    header: Option<MoHeader>,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog. Every lookup falls back to the requested key.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_header(header: MoHeader) -> Self {
        Self {
            header: Some(header),
            messages: HashMap::with_capacity(header.message_count as usize),
        }
    }

    /// Decodes a catalog with default options.
    ///
    /// Equivalent to [`decode`](crate::mo::decoder::decode).
    pub fn parse<R: Read + Seek>(reader: R) -> Result<Self> {
        decoder::decode(reader)
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        if self.messages.contains_key(&key) {
            warn!("Duplicate message key {:?}; keeping the later translation", key);
        }
        self.messages.insert(key, value);
    }

    /// Returns the translation of `key`, or `key` itself when there is none.
    ///
    /// An empty stored translation counts as untranslated.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key)
            .filter(|translation| !translation.is_empty())
            .unwrap_or(key)
    }

    /// Returns the singular or plural translation depending on `count`.
    ///
    /// `count == 1` selects `singular_key`; every other count, zero and
    /// negatives included, selects `plural_key`. A missing translation falls
    /// back to the selected key.
    pub fn lookup_plural<'a>(
        &'a self,
        singular_key: &'a str,
        plural_key: &'a str,
        count: i64,
    ) -> &'a str {
        let key = if count == 1 { singular_key } else { plural_key };
        self.lookup(key)
    }

    /// Returns the stored translation of `key`, empty or not.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Number of keys, counting both halves of a plural record.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over all `(key, translation)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The file header this catalog was decoded from; `None` for [`Catalog::empty`].
    pub fn header(&self) -> Option<&MoHeader> {
        self.header.as_ref()
    }

    /// Parsed view of the header entry stored under the empty key.
    pub fn metadata(&self) -> Metadata<'_> {
        Metadata::parse(self.get(HEADER_KEY).unwrap_or_default())
    }
}
