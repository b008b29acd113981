//! Catalog header parsing and byte order detection.

use std::io::Read;
use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, trace};
use crate::mo::types::{
    error::{MoError, Result},
    models::{Endianness, MoHeader, HEADER_SIZE, MAGIC_SIZE},
};
use crate::mo::utils;

/// Parses the fixed header from a reader positioned at the start of the file.
///
/// # Header Structure
/// ```text
/// [4 bytes] Magic, read little-endian to pick the byte order
/// [4 bytes] Format version
/// [4 bytes] Message count
/// [4 bytes] Master table offset
/// [4 bytes] Translation table offset
/// ```
///
/// Nothing past the magic is interpreted when the magic is unknown.
pub fn parse<R: Read + ?Sized>(reader: &mut R) -> Result<MoHeader> {
    let magic = reader
        .read_u32::<LittleEndian>()
        .map_err(utils::truncated("magic number"))?;
    trace!("Magic word: {:#010x}", magic);

    let endianness = Endianness::from_magic(magic).ok_or(MoError::BadMagic { found: magic })?;
    debug!("Detected {} catalog", endianness);

    let context = "header";
    let mut words = [0u8; (HEADER_SIZE - MAGIC_SIZE) as usize];
    reader.read_exact(&mut words).map_err(utils::truncated(context))?;
    let mut cursor = &words[..];
    let version = endianness.read_u32(&mut cursor).map_err(utils::truncated(context))?;
    let message_count = endianness.read_u32(&mut cursor).map_err(utils::truncated(context))?;
    let master_table_offset = endianness.read_u32(&mut cursor).map_err(utils::truncated(context))?;
    let translation_table_offset = endianness.read_u32(&mut cursor).map_err(utils::truncated(context))?;

    debug!(
        "Header: version={}, messages={}, master_table={:#x}, translation_table={:#x}",
        version, message_count, master_table_offset, translation_table_offset
    );

    Ok(MoHeader {
        endianness,
        version,
        message_count,
        master_table_offset,
        translation_table_offset,
    })
}
