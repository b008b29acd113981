//! Low-level byte reading utilities

use std::io::{self, Read, Seek, SeekFrom};
use super::types::error::{MoError, Result};

/// Returns the total byte length of a seekable source.
///
/// Leaves the cursor at the end; callers seek to absolute offsets afterwards.
pub fn stream_len<R: Seek + ?Sized>(reader: &mut R) -> Result<u64> {
    Ok(reader.seek(SeekFrom::End(0))?)
}

/// Maps a running-out-of-data I/O error to `Truncated`, passing other errors through.
pub fn truncated(context: &'static str) -> impl FnOnce(io::Error) -> MoError {
    move |err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            MoError::Truncated { context }
        } else {
            MoError::Io(err)
        }
    }
}

/// Reads exactly `len` bytes starting at absolute `offset`.
///
/// Callers must have checked `offset + len` against the stream length, so the
/// allocation here is bounded by the file size.
pub fn read_at<R: Read + Seek + ?Sized>(
    reader: &mut R,
    offset: u64,
    len: usize,
    context: &'static str,
) -> Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).map_err(truncated(context))?;
    Ok(buf)
}
