//! Whole-file integrity prefix
//!
//! The first four bytes of a roster file hold the CRC32 (IEEE polynomial,
//! zlib-compatible) of everything after them. The game stores the checksum
//! byte-reversed from host order, written little-endian, so the operation is
//! a single `swap_bytes` followed by an LE store regardless of host
//! endianness. The prefix itself is excluded from the checksum input, which
//! makes recalculation idempotent.

use crate::error::{Error, Result};

/// Bytes reserved for the checksum prefix.
pub const PREFIX_LEN: usize = 4;

/// Shortest buffer the checksum operations accept.
pub const MIN_BUFFER_LEN: usize = 8;

/// Recompute the checksum over the payload and overwrite the prefix.
///
/// Returns the value stored in the prefix.
pub fn recalculate(buf: &mut [u8]) -> Result<u32> {
    let stored = payload_checksum(buf)?;
    buf[..PREFIX_LEN].copy_from_slice(&stored.to_le_bytes());
    Ok(stored)
}

/// Check whether the prefix matches the payload.
pub fn verify(buf: &[u8]) -> Result<bool> {
    let expected = payload_checksum(buf)?;
    Ok(buf[..PREFIX_LEN] == expected.to_le_bytes())
}

fn payload_checksum(buf: &[u8]) -> Result<u32> {
    if buf.len() < MIN_BUFFER_LEN {
        return Err(Error::BufferTooSmall {
            length: buf.len(),
            min: MIN_BUFFER_LEN,
        });
    }
    Ok(crc32fast::hash(&buf[PREFIX_LEN..]).swap_bytes())
}
