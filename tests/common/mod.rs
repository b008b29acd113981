//! Helpers for building compiled catalogs in memory.

#![allow(dead_code)]

use mo_reader::Endianness;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::PathBuf;

pub const HEADER_LEN: usize = 20;

pub fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}

pub fn put_u32(buf: &mut Vec<u8>, endianness: Endianness, value: u32) {
    match endianness {
        Endianness::Little => buf.extend_from_slice(&value.to_le_bytes()),
        Endianness::Big => buf.extend_from_slice(&value.to_be_bytes()),
    }
}

/// Overwrites the 32-bit word at `pos`.
pub fn patch_u32(buf: &mut [u8], pos: usize, endianness: Endianness, value: u32) {
    let bytes = match endianness {
        Endianness::Little => value.to_le_bytes(),
        Endianness::Big => value.to_be_bytes(),
    };
    buf[pos..pos + 4].copy_from_slice(&bytes);
}

/// Position of the `(length, offset)` pair of record `i` in the master table.
pub fn master_entry_pos(i: usize) -> usize {
    HEADER_LEN + 8 * i
}

/// Position of the `(length, offset)` pair of record `i` in the translation table.
pub fn translation_entry_pos(count: usize, i: usize) -> usize {
    HEADER_LEN + 8 * count + 8 * i
}

/// Writes a minimal catalog: 20-byte header, both tables, then the string
/// bodies back to back with no terminators, so the last body ends exactly at
/// the end of the file.
pub struct MoBuilder {
    endianness: Endianness,
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl MoBuilder {
    pub fn new(endianness: Endianness) -> Self {
        Self {
            endianness,
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, source: impl AsRef<[u8]>, translation: impl AsRef<[u8]>) -> Self {
        self.entries
            .push((source.as_ref().to_vec(), translation.as_ref().to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let e = self.endianness;
        let n = self.entries.len();
        let master_offset = HEADER_LEN;
        let translation_offset = master_offset + 8 * n;
        let strings_offset = translation_offset + 8 * n;

        let mut out = Vec::new();
        put_u32(&mut out, e, 0x9504_12de);
        put_u32(&mut out, e, 0);
        put_u32(&mut out, e, n as u32);
        put_u32(&mut out, e, master_offset as u32);
        put_u32(&mut out, e, translation_offset as u32);

        let mut bodies = Vec::new();
        let mut translation_table = Vec::new();
        for (source, _) in &self.entries {
            put_u32(&mut out, e, source.len() as u32);
            put_u32(&mut out, e, (strings_offset + bodies.len()) as u32);
            bodies.extend_from_slice(source);
        }
        for (_, translation) in &self.entries {
            put_u32(&mut translation_table, e, translation.len() as u32);
            put_u32(&mut translation_table, e, (strings_offset + bodies.len()) as u32);
            bodies.extend_from_slice(translation);
        }
        out.extend_from_slice(&translation_table);
        out.extend_from_slice(&bodies);
        out
    }
}

/// Wraps a cursor and counts how many bytes were handed out.
pub struct CountingReader {
    inner: Cursor<Vec<u8>>,
    pub bytes_read: usize,
}

impl CountingReader {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(data),
            bytes_read: 0,
        }
    }
}

impl Read for CountingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes_read += n;
        Ok(n)
    }
}

impl Seek for CountingReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// A byte source whose reads always fail with a non-EOF error.
pub struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "device unplugged"))
    }
}

impl Seek for BrokenReader {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Ok(0)
    }
}
