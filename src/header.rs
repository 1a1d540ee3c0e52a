// src/header.rs
//! # Envelope Header
//!
//! The header is the first two frames of an envelope:
//!
//! ```text
//! [8]  sealed length
//! [..] sealed header
//!        [8][..] RSA-OAEP wrapped symmetric key      (clear)
//!        [..]    inner header, header-stream encrypted
//! [8]  tag length (always 32)
//! [32] header tag: HMAC over the encrypted inner header
//! ```
//!
//! The inner header is itself three frames: sender email, signature over
//! SHA-1(email), declared filename. Everything after the header tag is the
//! body.

use crate::aliases::Tag32;
use crate::decryptor::read::read_tag_frame;
use crate::error::KindiError;
use crate::framing::{framed_len, read_length_encoded, write_length_encoded};
use std::io::{Cursor, Read};

/// The outer header frames, as they appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeHeader {
    /// Framed wrapped key followed by the encrypted inner header.
    pub sealed: Vec<u8>,
    /// Header tag.
    pub tag: Tag32,
}

/// Read the header frames, leaving `reader` positioned at the body.
///
/// # Errors
///
/// - [`KindiError::MalformedFraming`] if the sealed header is truncated or
///   longer than `max_len`, or the tag frame is not exactly 32 bytes
/// - [`KindiError::Io`] on read failure
pub fn read_envelope_header<R>(reader: &mut R, max_len: u64) -> Result<EnvelopeHeader, KindiError>
where
    R: Read + ?Sized,
{
    let sealed = read_length_encoded(reader, max_len)?;
    let tag = read_tag_frame(reader)?;
    Ok(EnvelopeHeader { sealed, tag })
}

/// Decrypted inner header: who sent it and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerHeader {
    pub sender_email: String,
    pub signature: Vec<u8>,
    pub filename: String,
}

impl InnerHeader {
    pub fn to_bytes(&self) -> Result<Vec<u8>, KindiError> {
        let mut out = Vec::with_capacity(
            framed_len(self.sender_email.len())
                + framed_len(self.signature.len())
                + framed_len(self.filename.len()),
        );
        write_length_encoded(&mut out, self.sender_email.as_bytes())?;
        write_length_encoded(&mut out, &self.signature)?;
        write_length_encoded(&mut out, self.filename.as_bytes())?;
        Ok(out)
    }

    /// Strict parse: exactly three frames, UTF-8 text, no trailing bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, KindiError> {
        let limit = bytes.len() as u64;
        let mut cur = Cursor::new(bytes);

        let sender_email = utf8(read_length_encoded(&mut cur, limit)?, "sender email")?;
        let signature = read_length_encoded(&mut cur, limit)?;
        let filename = utf8(read_length_encoded(&mut cur, limit)?, "filename")?;

        if cur.position() != limit {
            return Err(KindiError::MalformedFraming(format!(
                "{} trailing bytes after inner header",
                limit - cur.position()
            )));
        }

        Ok(Self {
            sender_email,
            signature,
            filename,
        })
    }
}

fn utf8(bytes: Vec<u8>, what: &str) -> Result<String, KindiError> {
    String::from_utf8(bytes)
        .map_err(|_| KindiError::MalformedFraming(format!("{what} is not valid UTF-8")))
}
