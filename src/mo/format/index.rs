//! Index table parsing.
//!
//! Both tables hold `message_count` consecutive `(length, offset)` pairs. The
//! entry at position `i` of the master table describes the source string of
//! record `i`; the same position in the translation table describes its
//! translation.

use std::io::{Read, Seek};
use log::debug;
use crate::mo::types::{
    error::{MoError, Result},
    models::{Endianness, IndexEntry, MoHeader, Record, INDEX_ENTRY_SIZE},
};
use crate::mo::utils;

/// Reads both index tables and pairs them up into records.
pub fn parse<R: Read + Seek + ?Sized>(
    reader: &mut R,
    header: &MoHeader,
    file_len: u64,
) -> Result<Vec<Record>> {
    let sources = parse_table(
        reader,
        header.master_table_offset,
        header.message_count,
        header.endianness,
        file_len,
        "master table",
    )?;
    let translations = parse_table(
        reader,
        header.translation_table_offset,
        header.message_count,
        header.endianness,
        file_len,
        "translation table",
    )?;

    Ok(sources
        .into_iter()
        .zip(translations)
        .zip(0u32..)
        .map(|((source, translation), index)| Record {
            index,
            source,
            translation,
        })
        .collect())
}

/// Reads one table of `count` entries starting at `offset`.
///
/// A table that would extend past the end of the file is reported as
/// `Truncated` before anything is allocated, so a bogus count cannot trigger
/// a huge allocation.
fn parse_table<R: Read + Seek + ?Sized>(
    reader: &mut R,
    offset: u32,
    count: u32,
    endianness: Endianness,
    file_len: u64,
    context: &'static str,
) -> Result<Vec<IndexEntry>> {
    let table_len = u64::from(count) * INDEX_ENTRY_SIZE;
    let table_end = u64::from(offset) + table_len;
    if table_end > file_len {
        debug!(
            "{} ends at byte {}, past the end of the file ({} bytes)",
            context, table_end, file_len
        );
        return Err(MoError::Truncated { context });
    }

    let raw = utils::read_at(reader, u64::from(offset), table_len as usize, context)?;
    let mut cursor = raw.as_slice();
    (0..count)
        .map(|_| -> Result<IndexEntry> {
            let length = endianness.read_u32(&mut cursor).map_err(utils::truncated(context))?;
            let offset = endianness.read_u32(&mut cursor).map_err(utils::truncated(context))?;
            Ok(IndexEntry { length, offset })
        })
        .collect()
}
