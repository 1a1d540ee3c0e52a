// src/directory.rs
//! # Certificate Directory
//!
//! Resolves an email address to an RSA public key. The envelope engine only
//! ever calls [`CertificateDirectory::lookup`]; publishing belongs to the
//! keychain code around it.
//!
//! Keys travel as *key images*: the PKCS#1 DER public key hidden in a cover
//! photo with the LSB codec (see [`embed_public_key`]).

use crate::error::KindiError;
use crate::identity::{public_key_from_der, public_key_to_der};
use crate::stego::{self, Carrier};
use rsa::RsaPublicKey;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Lookup capability injected into every decrypt (and file encrypt) call.
pub trait CertificateDirectory {
    /// The public key registered for `email`, if any.
    fn lookup(&self, email: &str) -> Option<RsaPublicKey>;
}

impl<F> CertificateDirectory for F
where
    F: Fn(&str) -> Option<RsaPublicKey>,
{
    fn lookup(&self, email: &str) -> Option<RsaPublicKey> {
        self(email)
    }
}

/// In-process directory, e.g. a cache of fetched key images or a test double.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    keys: RwLock<HashMap<String, RsaPublicKey>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` for `email`, replacing any previous entry.
    pub fn publish(&self, email: impl Into<String>, key: RsaPublicKey) {
        let email = email.into();
        debug!(email = %email, "publishing public key");
        self.keys
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(email, key);
    }

    /// Register the key revealed from a key image.
    pub fn publish_image(&self, email: impl Into<String>, png: &[u8]) -> Result<(), KindiError> {
        let key = extract_public_key(png)?;
        self.publish(email, key);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.keys
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CertificateDirectory for MemoryDirectory {
    fn lookup(&self, email: &str) -> Option<RsaPublicKey> {
        self.keys
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(email)
            .cloned()
    }
}

/// Hide `key` in `cover` and return the lossless PNG key image.
pub fn embed_public_key(cover: &Carrier, key: &RsaPublicKey) -> Result<Vec<u8>, KindiError> {
    let der = public_key_to_der(key)?;
    cover.embed(&der)?.to_png()
}

/// Reveal and parse the public key hidden in a key image.
pub fn extract_public_key(png: &[u8]) -> Result<RsaPublicKey, KindiError> {
    let der = stego::reveal(png)?;
    public_key_from_der(&der)
}
