// src/builders/envelope_options.rs
//! Tunables for a single encrypt or decrypt call.

use crate::consts::{
    DEFAULT_IO_CHUNK_SIZE, DEFAULT_MAX_HEADER_LEN, DEFAULT_STAGING_BUFFER_SIZE, TAG_SIZE,
};

/// Buffer sizes and limits used by the envelope engine.
///
/// Defaults come from [`crate::consts`]. Out-of-range values are raised to
/// the smallest workable setting rather than rejected.
///
/// # Thread Safety
///
/// Plain `Copy` data; share freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeOptions {
    staging_buffer_size: usize,
    io_chunk_size: usize,
    max_header_len: u64,
}

impl EnvelopeOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            staging_buffer_size: DEFAULT_STAGING_BUFFER_SIZE,
            io_chunk_size: DEFAULT_IO_CHUNK_SIZE,
            max_header_len: DEFAULT_MAX_HEADER_LEN,
        }
    }

    /// Staging buffer of the tail reader used while decrypting a body.
    ///
    /// Must exceed [`TAG_SIZE`]; smaller values become `TAG_SIZE + 1`.
    #[must_use]
    pub fn with_staging_buffer_size(mut self, size: usize) -> Self {
        self.staging_buffer_size = size.max(TAG_SIZE + 1);
        self
    }

    /// Chunk size for pumping bytes through the body stream (minimum 1).
    #[must_use]
    pub fn with_io_chunk_size(mut self, size: usize) -> Self {
        self.io_chunk_size = size.max(1);
        self
    }

    /// Largest header frame accepted while decrypting.
    #[must_use]
    pub fn with_max_header_len(mut self, len: u64) -> Self {
        self.max_header_len = len;
        self
    }

    #[must_use]
    pub const fn staging_buffer_size(&self) -> usize {
        self.staging_buffer_size
    }

    #[must_use]
    pub const fn io_chunk_size(&self) -> usize {
        self.io_chunk_size
    }

    #[must_use]
    pub const fn max_header_len(&self) -> u64 {
        self.max_header_len
    }
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self::new()
    }
}
