// src/image_ops.rs
//! Envelopes hidden in images.
//!
//! The whole envelope is built in memory, then embedded in a cover with the
//! LSB codec. Capacity is checked before any pixel changes.

use crate::builders::EnvelopeOptions;
use crate::decryptor::{decrypt_with_options, EnvelopeInfo};
use crate::directory::CertificateDirectory;
use crate::encryptor::encrypt_with_options;
use crate::error::KindiError;
use crate::identity::Identity;
use crate::stego::{self, Carrier};
use rsa::RsaPublicKey;
use std::io::{Read, Write};
use tracing::debug;

/// Encrypt `input` and hide the envelope in `cover`, returning PNG bytes.
///
/// # Errors
///
/// [`KindiError::CapacityExceeded`] if the envelope does not fit, plus
/// anything [`encrypt`](crate::encrypt) returns.
pub fn encrypt_to_image<R>(
    cover: &Carrier,
    input: R,
    filename: &str,
    recipient: &RsaPublicKey,
    sender: &Identity,
) -> Result<Vec<u8>, KindiError>
where
    R: Read,
{
    let mut envelope = Vec::new();
    encrypt_with_options(
        input,
        &mut envelope,
        filename,
        recipient,
        sender,
        &EnvelopeOptions::default(),
    )?;
    debug!(
        envelope_len = envelope.len(),
        capacity = cover.payload_capacity(),
        "hiding envelope in cover"
    );
    cover.embed(&envelope)?.to_png()
}

/// Reveal an envelope hidden by [`encrypt_to_image`] and decrypt it.
pub fn decrypt_from_image<W, D>(
    png: &[u8],
    output: W,
    recipient: &Identity,
    directory: &D,
) -> Result<EnvelopeInfo, KindiError>
where
    W: Write,
    D: CertificateDirectory + ?Sized,
{
    let envelope = stego::reveal(png)?;
    decrypt_with_options(
        envelope.as_slice(),
        output,
        recipient,
        directory,
        &EnvelopeOptions::default(),
    )
}
