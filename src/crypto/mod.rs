// src/crypto/mod.rs
//! Crypto primitives behind the envelope format.
//!
//! - [`stream`] - per-envelope key schedule and the AES-OFB + HMAC stream adapter
//! - [`asymmetric`] - RSA-OAEP key wrapping and PKCS#1 v1.5 identity signatures
//! - [`rng`] - OS-backed randomness

pub mod asymmetric;
pub mod rng;
pub mod stream;
