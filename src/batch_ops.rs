// src/batch_ops.rs
//! Parallel batches of independent envelopes.
//!
//! Every item gets its own key, streams and buffers; the only shared state
//! is read-only (identity, recipient key, directory).

use crate::decryptor::{decrypt, EnvelopeInfo};
use crate::directory::CertificateDirectory;
use crate::encryptor::encrypt;
use crate::error::KindiError;
use crate::identity::Identity;
use rayon::prelude::*;
use rsa::RsaPublicKey;
use std::io::{Read, Write};

/// Encrypt each `(source, destination, filename)` for the same recipient.
///
/// Stops at the first error; other items may be partially written.
pub fn encrypt_batch<R, W, S>(
    batch: &mut [(R, W, S)],
    recipient: &RsaPublicKey,
    sender: &Identity,
) -> Result<(), KindiError>
where
    R: Read + Send,
    W: Write + Send,
    S: AsRef<str> + Send,
{
    batch
        .par_iter_mut()
        .try_for_each(|(src, dst, filename)| encrypt(src, dst, filename.as_ref(), recipient, sender))
}

/// Decrypt each `(source, destination)`, returning results in batch order.
pub fn decrypt_batch<R, W, D>(
    batch: &mut [(R, W)],
    recipient: &Identity,
    directory: &D,
) -> Result<Vec<EnvelopeInfo>, KindiError>
where
    R: Read + Send,
    W: Write + Send,
    D: CertificateDirectory + Sync + ?Sized,
{
    batch
        .par_iter_mut()
        .map(|(src, dst)| decrypt(src, dst, recipient, directory))
        .collect()
}
