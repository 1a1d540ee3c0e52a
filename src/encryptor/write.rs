// src/encryptor/write.rs
//! Envelope write helpers.

use crate::aliases::Tag32;
use crate::error::KindiError;
use crate::framing::write_length_encoded;
use crate::header::EnvelopeHeader;
use std::io::Write;

/// Write the sealed header and header tag as two length frames.
#[inline]
pub fn write_envelope_header<W>(writer: &mut W, header: &EnvelopeHeader) -> Result<(), KindiError>
where
    W: Write + ?Sized,
{
    write_length_encoded(writer, &header.sealed)?;
    write_length_encoded(writer, &header.tag)
}

/// Write the body tag. It is not framed: it is whatever is left at the end.
#[inline]
pub fn write_body_tag<W>(writer: &mut W, tag: &Tag32) -> Result<(), KindiError>
where
    W: Write + ?Sized,
{
    writer.write_all(tag).map_err(KindiError::Io)
}
