// src/decryptor/session.rs
//! Header opening: key recovery, header tag, sender resolution and signature.
//!
//! Order matters. Nothing parsed from the inner header is looked at until
//! the header tag has verified, and the sender email is only trusted once
//! its signature checks out against the directory's key.

use crate::crypto::asymmetric::{unwrap_key, verify_identity};
use crate::crypto::stream::CipherStream;
use crate::decryptor::read::split_sealed_header;
use crate::directory::CertificateDirectory;
use crate::error::KindiError;
use crate::header::{EnvelopeHeader, InnerHeader};
use crate::identity::Identity;
use tracing::{debug, warn};

/// A verified header and the body stream it unlocked.
pub struct OpenedHeader {
    pub sender_email: String,
    pub filename: String,
    pub body: CipherStream,
}

/// Walk the decrypt state machine from `HeaderRead` to `SenderVerified`.
pub fn open_header<D>(
    header: EnvelopeHeader,
    recipient: &Identity,
    directory: &D,
) -> Result<OpenedHeader, KindiError>
where
    D: CertificateDirectory + ?Sized,
{
    let (wrapped, encrypted_inner) = split_sealed_header(&header.sealed)?;

    let key = unwrap_key(recipient.private_key(), wrapped)?;
    debug!(state = "KeyRecovered", recipient = recipient.email(), "symmetric key unwrapped");

    let streams = key.into_streams()?;
    let mut header_stream = streams.header;
    let mut inner = encrypted_inner.to_vec();
    header_stream.decrypt_in_place(&mut inner);
    if let Err(err) = header_stream.verify(&header.tag, "header") {
        warn!(state = "AuthenticationFailed", "header tag mismatch");
        return Err(err);
    }

    let InnerHeader {
        sender_email,
        signature,
        filename,
    } = InnerHeader::parse(&inner)?;

    let sender_key = directory.lookup(&sender_email).ok_or_else(|| {
        warn!(sender = %sender_email, "sender not in directory");
        KindiError::UnknownSender(sender_email.clone())
    })?;
    debug!(state = "SenderResolved", sender = %sender_email, "sender key resolved");

    if let Err(err) = verify_identity(&sender_key, sender_email.as_bytes(), &signature) {
        warn!(state = "AuthenticationFailed", sender = %sender_email, "sender signature mismatch");
        return Err(err);
    }
    debug!(state = "SenderVerified", sender = %sender_email, filename = %filename, "sender verified");

    Ok(OpenedHeader {
        sender_email,
        filename,
        body: streams.body,
    })
}
