// src/error.rs
//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, KindiError>`](KindiError); nothing is retried
//! internally, every failure is handed straight back to the caller.

use thiserror::Error;

/// The error type for all envelope and steganography operations.
#[derive(Error, Debug)]
pub enum KindiError {
    /// I/O error on the input or output stream.
    ///
    /// Closing either stream mid-operation surfaces here; that is the only
    /// cancellation mechanism.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cipher, key or RNG could not be set up.
    ///
    /// Used for:
    /// - symmetric keys of the wrong length
    /// - wrapped keys that fail RSA-OAEP unwrapping
    /// - RSA key generation, signing or PEM/DER failures
    #[error("Crypto setup error: {0}")]
    CryptoSetup(String),

    /// A header tag, body tag or sender signature did not verify.
    ///
    /// Any plaintext already written to the output must be discarded.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The certificate directory has no key for the sender email.
    #[error("Unknown sender: {0}")]
    UnknownSender(String),

    /// The certificate directory has no key for the recipient email.
    #[error("Unknown recipient: {0}")]
    UnknownRecipient(String),

    /// The carrier image is too small for the framed payload.
    #[error("Carrier capacity exceeded: need {needed} bytes, carrier holds {available}")]
    CapacityExceeded { needed: usize, available: usize },

    /// The carrier's length field declares more bytes than the carrier holds.
    #[error("Truncated carrier: declared {declared} bytes, carrier holds {available}")]
    TruncatedCarrier { declared: u64, available: usize },

    /// A length-framed field is truncated, oversized or otherwise malformed.
    #[error("Malformed framing: {0}")]
    MalformedFraming(String),

    /// The image's sample format cannot carry 8-bit LSB data.
    #[error("Unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    /// The image could not be decoded or encoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A declared filename would escape the output directory.
    #[error("Unsafe filename: {0}")]
    UnsafeFilename(String),
}

impl KindiError {
    /// `true` for tag and signature failures.
    pub fn is_authentication(&self) -> bool {
        matches!(self, KindiError::Authentication(_))
    }
}
