// src/framing.rs
//! # Length Framing
//!
//! Every blob in an envelope, and the payload hidden in a carrier image, is
//! written as an 8-byte big-endian length followed by exactly that many bytes:
//!
//! ```text
//! [8] length (u64, big-endian)
//! [length] bytes
//! ```

use crate::consts::LENGTH_PREFIX_LEN;
use crate::error::KindiError;
use crate::utils::framing_error;
use std::io::{Read, Write};

/// Total size of a framed blob of `payload_len` bytes.
#[inline]
pub const fn framed_len(payload_len: usize) -> usize {
    LENGTH_PREFIX_LEN + payload_len
}

/// Write `data` as one length-framed blob.
#[inline]
pub fn write_length_encoded<W>(writer: &mut W, data: &[u8]) -> Result<(), KindiError>
where
    W: Write + ?Sized,
{
    writer.write_all(&(data.len() as u64).to_be_bytes())?;
    writer.write_all(data)?;
    Ok(())
}

/// Read only the 8-byte length prefix.
#[inline]
pub fn read_length_prefix<R>(reader: &mut R) -> Result<u64, KindiError>
where
    R: Read + ?Sized,
{
    let mut prefix = [0u8; LENGTH_PREFIX_LEN];
    reader
        .read_exact(&mut prefix)
        .map_err(|e| framing_error(e, "length prefix"))?;
    Ok(u64::from_be_bytes(prefix))
}

/// Read one length-framed blob of at most `max_len` bytes.
///
/// The declared length is checked against `max_len` before anything is
/// allocated, and the body is pulled through [`Read::take`] so a lying
/// prefix cannot force a large up-front allocation.
///
/// # Errors
///
/// - [`KindiError::MalformedFraming`] if the prefix exceeds `max_len` or the
///   data ends before the declared length is satisfied
/// - [`KindiError::Io`] for any other read failure
pub fn read_length_encoded<R>(reader: &mut R, max_len: u64) -> Result<Vec<u8>, KindiError>
where
    R: Read + ?Sized,
{
    let declared = read_length_prefix(reader)?;
    if declared > max_len {
        return Err(KindiError::MalformedFraming(format!(
            "declared length {declared} exceeds limit {max_len}"
        )));
    }

    let mut data = Vec::with_capacity(declared.min(64 * 1024) as usize);
    let got = (&mut *reader).take(declared).read_to_end(&mut data)?;
    if (got as u64) < declared {
        return Err(KindiError::MalformedFraming(format!(
            "declared length {declared}, only {got} bytes available"
        )));
    }
    Ok(data)
}
