//! Core data structures for the compiled catalog layout.
//!
//! ```text
//! offset  field
//! 0       magic                     0x950412de, byte order detected from it
//! 4       format version
//! 8       message count N
//! 12      master table offset       N x (length, offset)
//! 16      translation table offset  N x (length, offset)
//! ```

use std::fmt;
use std::io::Read;
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

/// Magic word as read from a little-endian file.
pub const LE_MAGIC: u32 = 0x9504_12de;
/// The same magic word read little-endian from a big-endian file.
pub const BE_MAGIC: u32 = 0xde12_0495;

/// Size of the magic word in bytes.
pub const MAGIC_SIZE: u64 = 4;
/// Size of the fixed header in bytes (five 32-bit words).
pub const HEADER_SIZE: u64 = 20;
/// Size of one index table entry in bytes (length + offset).
pub const INDEX_ENTRY_SIZE: u64 = 8;

/// Byte order of every 32-bit word in one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Detects the byte order from the magic word read in little-endian order.
    pub fn from_magic(magic: u32) -> Option<Self> {
        match magic {
            LE_MAGIC => Some(Endianness::Little),
            BE_MAGIC => Some(Endianness::Big),
            _ => None,
        }
    }

    /// Reads one 32-bit word in this byte order.
    pub fn read_u32<R: Read + ?Sized>(self, reader: &mut R) -> std::io::Result<u32> {
        match self {
            Endianness::Little => reader.read_u32::<LittleEndian>(),
            Endianness::Big => reader.read_u32::<BigEndian>(),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}

/// The parsed fixed-size file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoHeader {
    pub endianness: Endianness,
    pub version: u32,
    pub message_count: u32,
    pub master_table_offset: u32,
    pub translation_table_offset: u32,
}

/// Length and absolute offset of one string body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub length: u32,
    pub offset: u32,
}

impl IndexEntry {
    /// One past the last byte of the string body. Computed in 64 bits so it cannot wrap.
    pub fn end(&self) -> u64 {
        u64::from(self.offset) + u64::from(self.length)
    }
}

/// The source and translation entries found at the same table position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub index: u32,
    pub source: IndexEntry,
    pub translation: IndexEntry,
}

/// Which half of a record a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Translation,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Translation => write!(f, "translation"),
        }
    }
}
