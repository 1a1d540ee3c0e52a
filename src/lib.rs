// src/lib.rs
//! # kindi-rs
//!
//! Email-addressed file envelopes and LSB key images.
//!
//! An envelope is a file encrypted for one recipient under a fresh AES-256
//! key, which is RSA-OAEP wrapped for the recipient. The sender signs their
//! email and the recipient verifies that signature against a key resolved
//! through a [`CertificateDirectory`]. Header and body each carry an
//! HMAC-SHA256 tag; the body is streamed in both directions, with its tag
//! withheld by a [`TailReader`](decryptor::TailReader) until the end.
//!
//! ```text
//! [8]  header length   [..] header   (wrapped key + encrypted sender block)
//! [8]  tag length      [32] header tag
//! [..] body ciphertext [32] body tag
//! ```
//!
//! Public keys travel hidden in ordinary photos, see [`stego`] and
//! [`directory::embed_public_key`].

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod directory;
pub mod encryptor;
pub mod error;
pub mod file_ops;
pub mod framing;
pub mod header;
pub mod identity;
pub mod image_ops;
pub mod stego;
pub mod utils;

pub use builders::EnvelopeOptions;
pub use decryptor::{decrypt, decrypt_with_options, EnvelopeInfo};
pub use directory::{CertificateDirectory, MemoryDirectory};
pub use encryptor::{encrypt, encrypt_with_options};
pub use error::KindiError;
pub use file_ops::{decrypt_file, encrypt_file, DecryptedFile};
pub use identity::Identity;
pub use image_ops::{decrypt_from_image, encrypt_to_image};
pub use stego::Carrier;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
