// src/decryptor/decrypt.rs
//! Envelope decryption entry points.

use crate::builders::EnvelopeOptions;
use crate::decryptor::session::{open_header, OpenedHeader};
use crate::decryptor::stream::decrypt_body;
use crate::directory::CertificateDirectory;
use crate::error::KindiError;
use crate::header::read_envelope_header;
use crate::identity::Identity;
use std::io::{Read, Write};
use tracing::debug;

/// What a successful decrypt proved about the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeInfo {
    /// Filename declared by the sender.
    pub filename: String,
    /// Email whose signature verified.
    pub sender_email: String,
    /// Plaintext bytes written.
    pub plaintext_len: u64,
}

/// Decrypt an envelope from `input` into `output` with default options.
///
/// See [`decrypt_with_options`].
pub fn decrypt<R, W, D>(
    input: R,
    output: W,
    recipient: &Identity,
    directory: &D,
) -> Result<EnvelopeInfo, KindiError>
where
    R: Read,
    W: Write,
    D: CertificateDirectory + ?Sized,
{
    decrypt_with_options(input, output, recipient, directory, &EnvelopeOptions::default())
}

/// Decrypt an envelope from `input` into `output`.
///
/// The sender is resolved through `directory` and must have signed its own
/// email. Body plaintext is streamed to `output` before the body tag is
/// known; on any error the output must be treated as untrusted.
/// [`decrypt_file`](crate::file_ops::decrypt_file) stages through a temp file
/// for that reason.
///
/// # Errors
///
/// - [`KindiError::CryptoSetup`] - the wrapped key does not unwrap
/// - [`KindiError::Authentication`] - header tag, signature or body tag mismatch
/// - [`KindiError::UnknownSender`] - `directory` has no key for the sender
/// - [`KindiError::MalformedFraming`] - bad header frames
/// - [`KindiError::Io`] - read or write failure
pub fn decrypt_with_options<R, W, D>(
    mut input: R,
    mut output: W,
    recipient: &Identity,
    directory: &D,
    options: &EnvelopeOptions,
) -> Result<EnvelopeInfo, KindiError>
where
    R: Read,
    W: Write,
    D: CertificateDirectory + ?Sized,
{
    let header = read_envelope_header(&mut input, options.max_header_len())?;
    debug!(state = "HeaderRead", sealed_len = header.sealed.len(), "envelope header read");

    let OpenedHeader {
        sender_email,
        filename,
        body,
    } = open_header(header, recipient, directory)?;

    let plaintext_len = decrypt_body(input, &mut output, body, options)?;

    Ok(EnvelopeInfo {
        filename,
        sender_email,
        plaintext_len,
    })
}
