//! String body extraction and plural form splitting.

use std::io::{Read, Seek};
use log::trace;
use crate::mo::types::{
    error::{CorruptKind, MoError, Result},
    models::{IndexEntry, Record, Side},
};
use crate::mo::utils;

/// Separator between the singular and plural halves of a record.
pub const PLURAL_SEPARATOR: u8 = 0x00;

/// Reads the source and translation bodies of one record.
///
/// Both ranges are checked against `file_len` before either is read.
pub fn read_record<R: Read + Seek + ?Sized>(
    reader: &mut R,
    record: &Record,
    file_len: u64,
) -> Result<(Vec<u8>, Vec<u8>)> {
    check_range(record.index, Side::Source, &record.source, file_len)?;
    check_range(record.index, Side::Translation, &record.translation, file_len)?;

    let source = read_body(reader, &record.source, "source string")?;
    let translation = read_body(reader, &record.translation, "translation string")?;
    trace!(
        "Record {}: source {} bytes, translation {} bytes",
        record.index,
        source.len(),
        translation.len()
    );
    Ok((source, translation))
}

fn check_range(index: u32, side: Side, entry: &IndexEntry, file_len: u64) -> Result<()> {
    let end = entry.end();
    if end > file_len {
        return Err(MoError::Corrupt {
            index,
            kind: CorruptKind::RangeExceedsFile { side, end, file_len },
        });
    }
    Ok(())
}

fn read_body<R: Read + Seek + ?Sized>(
    reader: &mut R,
    entry: &IndexEntry,
    context: &'static str,
) -> Result<Vec<u8>> {
    utils::read_at(reader, u64::from(entry.offset), entry.length as usize, context)
}

/// Splits a record into the `(key, value)` byte pairs it contributes to a catalog.
///
/// A source without a NUL yields a single pair. A source `singular\0plural`
/// is split at its first NUL only, so the plural key is everything after it.
/// The two keys are matched against the first two NUL-separated forms of the
/// translation. Forms past the second are dropped since lookups only ever
/// select between singular and plural.
pub fn split_plural<'a>(
    index: u32,
    source: &'a [u8],
    translation: &'a [u8],
) -> Result<Vec<(&'a [u8], &'a [u8])>> {
    let Some(p) = source.iter().position(|&b| b == PLURAL_SEPARATOR) else {
        return Ok(vec![(source, translation)]);
    };
    let (singular, plural) = (&source[..p], &source[p + 1..]);
    let Some((singular_translation, plural_translation)) = split_forms(translation) else {
        return Err(MoError::Corrupt {
            index,
            kind: CorruptKind::MissingPluralSeparator,
        });
    };

    let extra_forms = translation
        .iter()
        .filter(|&&b| b == PLURAL_SEPARATOR)
        .count()
        .saturating_sub(1);
    if extra_forms > 0 {
        trace!("Record {}: ignoring {} extra plural form(s)", index, extra_forms);
    }

    Ok(vec![
        (singular, singular_translation),
        (plural, plural_translation),
    ])
}

/// Returns the first two NUL-separated forms of a translation, or `None` when
/// there is no separator.
fn split_forms(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let mut forms = bytes.split(|&b| b == PLURAL_SEPARATOR);
    let first = forms.next()?;
    let second = forms.next()?;
    Some((first, second))
}
