// src/encryptor/session.rs
//! Header sealing for the encrypt path.
//!
//! Mirror of `decryptor/session.rs`: signs the sender email and encrypts the
//! inner header under the header stream, next to the already wrapped key.

use crate::crypto::asymmetric::sign_identity;
use crate::crypto::stream::CipherStream;
use crate::error::KindiError;
use crate::framing::{framed_len, write_length_encoded};
use crate::header::{EnvelopeHeader, InnerHeader};
use crate::identity::Identity;

/// Build the sealed header and its tag.
pub fn seal_header(
    wrapped_key: &[u8],
    sender: &Identity,
    filename: &str,
    mut header_stream: CipherStream,
) -> Result<EnvelopeHeader, KindiError> {
    let signature = sign_identity(sender.private_key(), sender.email().as_bytes())?;
    let mut inner = InnerHeader {
        sender_email: sender.email().to_owned(),
        signature,
        filename: filename.to_owned(),
    }
    .to_bytes()?;

    header_stream.encrypt_in_place(&mut inner);
    let tag = header_stream.finalize();

    let mut sealed = Vec::with_capacity(framed_len(wrapped_key.len()) + inner.len());
    write_length_encoded(&mut sealed, wrapped_key)?;
    sealed.extend_from_slice(&inner);

    Ok(EnvelopeHeader { sealed, tag })
}
