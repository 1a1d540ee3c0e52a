// src/utils.rs
//! Utility functions used across the library.

use crate::error::KindiError;
use std::io::{self, Read};

/// Read into `buf`, retrying on [`io::ErrorKind::Interrupted`].
///
/// Returns `Ok(0)` only at end of stream (or for an empty `buf`).
#[inline]
pub fn read_retrying<R>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize>
where
    R: Read + ?Sized,
{
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

/// Map an I/O error raised while reading a framed field.
///
/// An early EOF means the declared length ran past the data, which is a
/// framing error; anything else stays an I/O error.
#[inline]
pub fn framing_error(err: io::Error, what: &str) -> KindiError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        KindiError::MalformedFraming(format!("{what}: unexpected end of data"))
    } else {
        KindiError::Io(err)
    }
}
