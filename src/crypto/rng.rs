// src/crypto/rng.rs
//! OS-backed randomness for fresh symmetric keys and RSA padding.

use crate::error::KindiError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Fill `dest` from the operating system's CSPRNG.
///
/// A failing OS RNG is reported as [`KindiError::CryptoSetup`], never papered over.
#[inline]
pub fn fill_secure(dest: &mut [u8]) -> Result<(), KindiError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| KindiError::CryptoSetup(format!("OS RNG failed: {e}")))
}

/// The RNG handed to RSA padding and key generation.
#[inline]
pub fn secure_rng() -> OsRng {
    OsRng
}
