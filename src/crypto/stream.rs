// src/crypto/stream.rs
//! Cipher stream adapter: AES-256-OFB keystream plus a running HMAC-SHA256.
//!
//! # Correctness precondition
//!
//! Every [`CipherStream`] runs OFB with an **all-zero IV**. That is only sound
//! because the key it runs under is used for exactly one stream:
//!
//! - a [`SymmetricKey`] is freshly generated per envelope, is not `Clone`, and
//!   is consumed by [`SymmetricKey::into_streams`];
//! - `into_streams` derives separate cipher and MAC sub-keys for the header
//!   and the body, so the two streams of one envelope never share a keystream.
//!
//! Do not add a way to build a stream from a key that outlives one envelope.
//!
//! Both directions feed the MAC with **ciphertext**: encryption updates it
//! after applying the keystream, decryption before.

use crate::aliases::{Aes256Ofb, HmacSha256, Iv16, SubKey32, Tag32};
use crate::consts::{CIPHER_BLOCK_LEN, SYMMETRIC_KEY_LEN, TAG_SIZE};
use crate::crypto::rng::fill_secure;
use crate::error::KindiError;
use hmac::Mac;
use ofb::cipher::{KeyIvInit, StreamCipher};
use std::fmt;
use zeroize::Zeroizing;

/// Which half of an envelope a stream protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPurpose {
    Header,
    Body,
}

impl StreamPurpose {
    const fn cipher_label(self) -> &'static [u8] {
        match self {
            StreamPurpose::Header => b"kindi/v1 header cipher",
            StreamPurpose::Body => b"kindi/v1 body cipher",
        }
    }

    const fn mac_label(self) -> &'static [u8] {
        match self {
            StreamPurpose::Header => b"kindi/v1 header mac",
            StreamPurpose::Body => b"kindi/v1 body mac",
        }
    }
}

/// The one-time 32-byte key of a single envelope. Wiped on drop.
pub struct SymmetricKey(Zeroizing<[u8; SYMMETRIC_KEY_LEN]>);

impl SymmetricKey {
    /// Draw a fresh key from the OS RNG.
    pub fn generate() -> Result<Self, KindiError> {
        let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_LEN]);
        fill_secure(key.as_mut())?;
        Ok(Self(key))
    }

    /// Wrap key material recovered from an envelope header.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KindiError> {
        if bytes.len() != SYMMETRIC_KEY_LEN {
            return Err(KindiError::CryptoSetup(format!(
                "symmetric key must be {SYMMETRIC_KEY_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_LEN]);
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Raw key bytes, for RSA wrapping only.
    pub fn expose_secret(&self) -> &[u8; SYMMETRIC_KEY_LEN] {
        &self.0
    }

    /// Consume the key and derive the header and body streams.
    pub fn into_streams(self) -> Result<EnvelopeStreams, KindiError> {
        Ok(EnvelopeStreams {
            header: self.stream_for(StreamPurpose::Header)?,
            body: self.stream_for(StreamPurpose::Body)?,
        })
    }

    fn stream_for(&self, purpose: StreamPurpose) -> Result<CipherStream, KindiError> {
        let cipher_key = derive_subkey(&self.0[..], purpose.cipher_label())?;
        let mac_key = derive_subkey(&self.0[..], purpose.mac_label())?;
        CipherStream::new(cipher_key.as_ref(), mac_key.as_ref())
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// The two independent streams derived from one [`SymmetricKey`].
pub struct EnvelopeStreams {
    pub header: CipherStream,
    pub body: CipherStream,
}

fn derive_subkey(master: &[u8], label: &[u8]) -> Result<SubKey32, KindiError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(master)
        .map_err(|e| KindiError::CryptoSetup(format!("sub-key derivation: {e}")))?;
    mac.update(label);
    let mut out = Zeroizing::new([0u8; 32]);
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Self-inverse byte stream transform with a keyed-hash accumulator.
pub struct CipherStream {
    cipher: Aes256Ofb,
    mac: HmacSha256,
    processed: u64,
}

impl CipherStream {
    /// Build a stream from a 32-byte cipher key and a MAC key.
    ///
    /// Only [`SymmetricKey::into_streams`] should call this outside tests;
    /// see the module docs for why.
    pub(crate) fn new(cipher_key: &[u8], mac_key: &[u8]) -> Result<Self, KindiError> {
        let iv: Iv16 = [0u8; CIPHER_BLOCK_LEN];
        let cipher = Aes256Ofb::new_from_slices(cipher_key, &iv).map_err(|_| {
            KindiError::CryptoSetup(format!(
                "AES-256-OFB needs a 32-byte key, got {}",
                cipher_key.len()
            ))
        })?;
        let mac = <HmacSha256 as Mac>::new_from_slice(mac_key)
            .map_err(|e| KindiError::CryptoSetup(format!("HMAC key: {e}")))?;
        Ok(Self {
            cipher,
            mac,
            processed: 0,
        })
    }

    /// Encrypt `buf` in place and feed the resulting ciphertext to the MAC.
    #[inline]
    pub fn encrypt_in_place(&mut self, buf: &mut [u8]) {
        self.cipher.apply_keystream(buf);
        self.mac.update(buf);
        self.processed += buf.len() as u64;
    }

    /// Feed ciphertext `buf` to the MAC, then decrypt it in place.
    #[inline]
    pub fn decrypt_in_place(&mut self, buf: &mut [u8]) {
        self.mac.update(buf);
        self.cipher.apply_keystream(buf);
        self.processed += buf.len() as u64;
    }

    /// Bytes pushed through the stream so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Finish the accumulator and return the tag.
    pub fn finalize(self) -> Tag32 {
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(&self.mac.finalize().into_bytes());
        tag
    }

    /// Compare the accumulated tag to `expected` in constant time.
    pub fn verify(self, expected: &[u8], what: &str) -> Result<(), KindiError> {
        self.mac
            .verify_slice(expected)
            .map_err(|_| KindiError::Authentication(format!("{what} tag mismatch")))
    }
}
