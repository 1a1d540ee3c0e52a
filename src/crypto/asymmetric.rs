// src/crypto/asymmetric.rs
//! RSA operations of the envelope header.
//!
//! - the symmetric key is wrapped with RSA-OAEP (SHA-1 label hash)
//! - the sender identity is the email signed as RSASSA-PKCS1-v1_5 over SHA-1(email)

use crate::crypto::rng::secure_rng;
use crate::crypto::stream::SymmetricKey;
use crate::error::KindiError;
use rsa::{Oaep, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::{Digest, Sha1};
use zeroize::Zeroizing;

/// Wrap `key` for `recipient`.
pub fn wrap_key(recipient: &RsaPublicKey, key: &SymmetricKey) -> Result<Vec<u8>, KindiError> {
    let mut rng = secure_rng();
    recipient
        .encrypt(&mut rng, Oaep::new::<Sha1>(), key.expose_secret())
        .map_err(|e| KindiError::CryptoSetup(format!("RSA-OAEP wrap: {e}")))
}

/// Recover the symmetric key from a wrapped key block.
pub fn unwrap_key(recipient: &RsaPrivateKey, wrapped: &[u8]) -> Result<SymmetricKey, KindiError> {
    let raw = Zeroizing::new(
        recipient
            .decrypt(Oaep::new::<Sha1>(), wrapped)
            .map_err(|e| KindiError::CryptoSetup(format!("RSA-OAEP unwrap: {e}")))?,
    );
    SymmetricKey::from_slice(&raw)
}

/// Sign SHA-1(`email`) with the sender's private key.
pub fn sign_identity(sender: &RsaPrivateKey, email: &[u8]) -> Result<Vec<u8>, KindiError> {
    let digest = Sha1::digest(email);
    sender
        .sign(Pkcs1v15Sign::new::<Sha1>(), &digest)
        .map_err(|e| KindiError::CryptoSetup(format!("identity signature: {e}")))
}

/// Check `signature` over SHA-1(`email`) against the resolved sender key.
pub fn verify_identity(
    sender: &RsaPublicKey,
    email: &[u8],
    signature: &[u8],
) -> Result<(), KindiError> {
    let digest = Sha1::digest(email);
    sender
        .verify(Pkcs1v15Sign::new::<Sha1>(), &digest, signature)
        .map_err(|_| KindiError::Authentication("sender signature does not verify".into()))
}
