// src/aliases.rs
//! # Type Aliases
//!
//! Crypto primitives and fixed-size buffers shared by the encryptor,
//! decryptor and key schedule.
//!
//! ### Primitives
//! - [`HmacSha256`] - keyed-hash accumulator for header and body tags
//! - [`Aes256Ofb`] - AES-256 in output-feedback stream mode
//!
//! ### Fixed-size buffers
//! - [`Tag32`] - one header or body tag
//! - [`SubKey32`] - a derived cipher or MAC key, wiped on drop
//! - [`Iv16`] - the (all-zero) OFB initialization vector

use crate::consts::{CIPHER_BLOCK_LEN, TAG_SIZE};
use hmac::Hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

// ─────────────────────────────────────────────────────────────────────────────
// Primitives
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacSha256 = Hmac<Sha256>;
pub type Aes256Ofb = ofb::Ofb<aes::Aes256>;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size buffers
// ─────────────────────────────────────────────────────────────────────────────
pub type Tag32 = [u8; TAG_SIZE];
pub type Iv16 = [u8; CIPHER_BLOCK_LEN];
pub type SubKey32 = Zeroizing<[u8; 32]>;
