// src/consts.rs
//! # Constants
//!
//! Sizes that are part of the wire format, plus the defaults used by
//! [`EnvelopeOptions`](crate::builders::EnvelopeOptions).

/// Length of the per-envelope symmetric key (AES-256).
pub const SYMMETRIC_KEY_LEN: usize = 32;

/// Length of a header or body authentication tag (HMAC-SHA256 output).
pub const TAG_SIZE: usize = 32;

/// Length of the big-endian `u64` prefix written before every framed blob.
pub const LENGTH_PREFIX_LEN: usize = 8;

/// AES block size; OFB runs with an all-zero IV of this length.
pub const CIPHER_BLOCK_LEN: usize = 16;

/// Default size of the tail reader's staging buffer.
///
/// Must stay strictly larger than [`TAG_SIZE`].
pub const DEFAULT_STAGING_BUFFER_SIZE: usize = 64 * 1024;

/// Default chunk size used when pumping plaintext/ciphertext through a stream.
pub const DEFAULT_IO_CHUNK_SIZE: usize = 16 * 1024;

/// Largest header frame accepted while decrypting (1 MiB).
///
/// A header holds a wrapped key, an email, a signature and a filename, so
/// anything near this limit is already hostile input.
pub const DEFAULT_MAX_HEADER_LEN: u64 = 1024 * 1024;

/// Modulus size used by [`Identity::generate`](crate::identity::Identity::generate) callers that
/// have no preference.
pub const DEFAULT_RSA_BITS: usize = 2048;

/// Extension appended to encrypted files by [`encrypt_file`](crate::file_ops::encrypt_file).
pub const ENVELOPE_EXTENSION: &str = "kindi";

/// Colour channels per pixel that carry data (R, G, B; never A).
pub const DATA_CHANNELS_PER_PIXEL: usize = 3;

/// Widest image produced by the legacy raw payload codec.
pub const LEGACY_MAX_WIDTH: u32 = 800;
