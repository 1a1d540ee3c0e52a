// src/decryptor/stream/tail.rs
//! Tail-withholding reader.
//!
//! Wraps a source of unknown length and yields every byte except the final
//! `tail_len`, which are kept back until the source is exhausted and then
//! exposed through [`TailReader::tail`]. Memory use is bounded by the staging
//! buffer, never by the source length.
//!
//! ```text
//! staging: [ consumed | releasable ............ | withheld (tail_len) | free ]
//!                     ^start                                         ^end
//! ```
//!
//! A byte is only releasable once at least `tail_len` bytes have been pulled
//! in after it, so a tag can never leak through [`Read::read`].

use crate::consts::DEFAULT_STAGING_BUFFER_SIZE;
use crate::utils::read_retrying;
use std::io::{self, Read};

pub struct TailReader<R> {
    inner: R,
    staging: Box<[u8]>,
    tail_len: usize,
    start: usize,
    end: usize,
    eof: bool,
}

impl<R: Read> TailReader<R> {
    /// Withhold the last `tail_len` bytes, staging through the default buffer.
    pub fn new(inner: R, tail_len: usize) -> Self {
        Self::with_capacity(inner, tail_len, DEFAULT_STAGING_BUFFER_SIZE)
    }

    /// Like [`new`](Self::new) with an explicit staging buffer size.
    ///
    /// The buffer must be larger than `tail_len` to make progress; smaller
    /// values are raised to `tail_len + 1`.
    pub fn with_capacity(inner: R, tail_len: usize, capacity: usize) -> Self {
        let capacity = capacity.max(tail_len + 1);
        Self {
            inner,
            staging: vec![0u8; capacity].into_boxed_slice(),
            tail_len,
            start: 0,
            end: 0,
            eof: false,
        }
    }

    /// Number of bytes withheld at the end of the source.
    pub fn tail_len(&self) -> usize {
        self.tail_len
    }

    /// `true` once the source has ended and every releasable byte was read.
    pub fn is_exhausted(&self) -> bool {
        self.eof && self.releasable() == 0
    }

    /// The withheld suffix, available only after [`is_exhausted`](Self::is_exhausted).
    ///
    /// Holds `min(L, tail_len)` bytes for a source of length `L`; a short
    /// result means the source never had a full tail.
    pub fn tail(&self) -> Option<&[u8]> {
        self.is_exhausted()
            .then(|| &self.staging[self.start..self.end])
    }

    #[inline]
    fn buffered(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    fn releasable(&self) -> usize {
        self.buffered().saturating_sub(self.tail_len)
    }

    /// Pull once from the source, compacting the staging buffer first.
    fn fill(&mut self) -> io::Result<()> {
        if self.start > 0 {
            self.staging.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        let n = read_retrying(&mut self.inner, &mut self.staging[self.end..])?;
        if n == 0 {
            self.eof = true;
        }
        self.end += n;
        Ok(())
    }
}

impl<R: Read> Read for TailReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            let ready = self.releasable();
            if ready > 0 {
                let n = ready.min(buf.len());
                buf[..n].copy_from_slice(&self.staging[self.start..self.start + n]);
                self.start += n;
                return Ok(n);
            }
            if self.eof {
                return Ok(0);
            }
            self.fill()?;
        }
    }
}
