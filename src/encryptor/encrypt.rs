// src/encryptor/encrypt.rs
//! Envelope encryption entry points.

use crate::builders::EnvelopeOptions;
use crate::crypto::asymmetric::wrap_key;
use crate::crypto::stream::SymmetricKey;
use crate::encryptor::session::seal_header;
use crate::encryptor::stream::encrypt_stream;
use crate::encryptor::write::write_envelope_header;
use crate::error::KindiError;
use crate::identity::Identity;
use rsa::RsaPublicKey;
use std::io::{Read, Write};
use tracing::debug;

/// Encrypt `input` for `recipient`, signed as `sender`, with default options.
///
/// See [`encrypt_with_options`].
pub fn encrypt<R, W>(
    input: R,
    output: W,
    filename: &str,
    recipient: &RsaPublicKey,
    sender: &Identity,
) -> Result<(), KindiError>
where
    R: Read,
    W: Write,
{
    encrypt_with_options(
        input,
        output,
        filename,
        recipient,
        sender,
        &EnvelopeOptions::default(),
    )
}

/// Encrypt `input` for `recipient`, signed as `sender`.
///
/// A fresh symmetric key is drawn for every call and dropped (wiped) when it
/// returns. `filename` is carried in the encrypted header and handed back by
/// [`decrypt`](crate::decrypt).
///
/// # Errors
///
/// - [`KindiError::CryptoSetup`] - RNG, key wrap or signing failure
/// - [`KindiError::Io`] - read or write failure; output is then incomplete
pub fn encrypt_with_options<R, W>(
    mut input: R,
    mut output: W,
    filename: &str,
    recipient: &RsaPublicKey,
    sender: &Identity,
    options: &EnvelopeOptions,
) -> Result<(), KindiError>
where
    R: Read,
    W: Write,
{
    let key = SymmetricKey::generate()?;
    let wrapped = wrap_key(recipient, &key)?;
    let streams = key.into_streams()?;
    debug!(state = "KeyGenerated", wrapped_len = wrapped.len(), "symmetric key wrapped");

    let header = seal_header(&wrapped, sender, filename, streams.header)?;
    write_envelope_header(&mut output, &header)?;
    debug!(
        state = "HeaderBuilt",
        sender = sender.email(),
        filename,
        sealed_len = header.sealed.len(),
        "envelope header written"
    );

    debug!(state = "BodyStreaming", "encrypting body");
    let body_len = encrypt_stream(&mut input, &mut output, streams.body, options.io_chunk_size())?;
    debug!(state = "Finalized", body_len, "envelope complete");
    Ok(())
}
