//! Decoding orchestration: header, index tables, string bodies, catalog.

use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom};
use log::{debug, info, warn};
use super::catalog::Catalog;
use super::format;
use super::types::error::{MoError, Result};
use super::types::models::Side;
use super::utils;

/// Options controlling how a catalog is decoded.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use mo_reader::DecodeOptions;
///
/// let file = File::open("de/LC_MESSAGES/app.mo").unwrap();
/// let catalog = DecodeOptions::new().lossy_utf8(true).decode(file).unwrap();
/// println!("{}", catalog.lookup("Hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    lossy_utf8: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace invalid UTF-8 with U+FFFD instead of failing with `InvalidUtf8`.
    pub fn lossy_utf8(mut self, lossy: bool) -> Self {
        self.lossy_utf8 = lossy;
        self
    }

    /// Decodes one compiled catalog from a seekable byte source.
    ///
    /// All offsets in the file are absolute, so decoding always starts from
    /// byte 0 regardless of the current cursor position.
    ///
    /// # Errors
    /// - `BadMagic` if the file does not start with a catalog magic number
    /// - `Truncated` if the header, a table or a string body is cut short
    /// - `Corrupt` if a record points past the end of the file or has an
    ///   unpaired plural form
    /// - `InvalidUtf8` in strict mode when a string is not UTF-8
    pub fn decode<R: Read + Seek>(&self, mut reader: R) -> Result<Catalog> {
        reader.seek(SeekFrom::Start(0))?;
        let header = format::header::parse(&mut reader)?;
        let file_len = utils::stream_len(&mut reader)?;
        info!(
            "Decoding {} catalog: {} records, {} bytes",
            header.endianness, header.message_count, file_len
        );

        let records = format::index::parse(&mut reader, &header, file_len)?;
        debug!("Index tables read: {} records", records.len());

        let mut catalog = Catalog::with_header(header);
        for record in &records {
            let (source, translation) = format::strings::read_record(&mut reader, record, file_len)?;
            for (key, value) in format::strings::split_plural(record.index, &source, &translation)? {
                let key = self.decode_text(record.index, Side::Source, key)?;
                let value = self.decode_text(record.index, Side::Translation, value)?;
                catalog.insert(key, value);
            }
        }

        let metadata = catalog.metadata();
        if metadata.charset_is_utf8() == Some(false)
            && let Some(charset) = metadata.charset()
        {
            warn!("Catalog declares charset {}; strings are used as-is without conversion", charset);
        }

        info!("Catalog decoded: {} keys", catalog.len());
        Ok(catalog)
    }

    fn decode_text(&self, index: u32, side: Side, bytes: &[u8]) -> Result<String> {
        if self.lossy_utf8 {
            return Ok(match String::from_utf8_lossy(bytes) {
                Cow::Borrowed(s) => s.to_owned(),
                Cow::Owned(s) => {
                    debug!("Record {}: replaced invalid UTF-8 in {} string", index, side);
                    s
                }
            });
        }
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| MoError::InvalidUtf8 { index, side })
    }
}

/// Decodes one compiled catalog with default options.
pub fn decode<R: Read + Seek>(reader: R) -> Result<Catalog> {
    DecodeOptions::new().decode(reader)
}
