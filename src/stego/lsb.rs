// src/stego/lsb.rs
//! Bit-level cursor over the colour samples of an RGBA8 buffer.
//!
//! Scan order is part of the wire contract:
//!
//! - pixels in raster order (row-major, left to right, top to bottom)
//! - within a pixel R, then G, then B; alpha is skipped
//! - within a byte, bit 0 (least significant) first
//!
//! Each sample's least-significant bit stores one payload bit.

use crate::consts::DATA_CHANNELS_PER_PIXEL;
use std::io::{self, Read, Write};

const BYTES_PER_PIXEL: usize = 4;

/// Offset of the `index`-th data sample inside an RGBA8 buffer.
#[inline(always)]
const fn sample_offset(index: usize) -> usize {
    (index / DATA_CHANNELS_PER_PIXEL) * BYTES_PER_PIXEL + index % DATA_CHANNELS_PER_PIXEL
}

/// Number of data samples (LSB cells) in an RGBA8 buffer.
#[inline]
pub const fn sample_count(rgba_len: usize) -> usize {
    (rgba_len / BYTES_PER_PIXEL) * DATA_CHANNELS_PER_PIXEL
}

/// Writes bytes into sample LSBs. Implements [`Write`]; a full carrier
/// reports [`io::ErrorKind::WriteZero`].
pub struct LsbWriter<'a> {
    rgba: &'a mut [u8],
    cursor: usize,
    samples: usize,
}

impl<'a> LsbWriter<'a> {
    pub fn new(rgba: &'a mut [u8]) -> Self {
        let samples = sample_count(rgba.len());
        Self {
            rgba,
            cursor: 0,
            samples,
        }
    }

    /// Whole bytes that still fit.
    pub fn remaining_bytes(&self) -> usize {
        (self.samples - self.cursor) / 8
    }

    #[inline]
    fn put_byte(&mut self, byte: u8) {
        for bit in 0..8 {
            let offset = sample_offset(self.cursor);
            self.rgba[offset] = (self.rgba[offset] & 0xFE) | ((byte >> bit) & 1);
            self.cursor += 1;
        }
    }
}

impl Write for LsbWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining_bytes());
        if n == 0 && !buf.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "carrier has no free sample bits",
            ));
        }
        for &byte in &buf[..n] {
            self.put_byte(byte);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads bytes back out of sample LSBs in the same order [`LsbWriter`] wrote them.
pub struct LsbReader<'a> {
    rgba: &'a [u8],
    cursor: usize,
    samples: usize,
}

impl<'a> LsbReader<'a> {
    pub fn new(rgba: &'a [u8]) -> Self {
        Self {
            rgba,
            cursor: 0,
            samples: sample_count(rgba.len()),
        }
    }

    /// Whole bytes still readable.
    pub fn remaining_bytes(&self) -> usize {
        (self.samples - self.cursor) / 8
    }

    #[inline]
    fn take_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        for bit in 0..8 {
            byte |= (self.rgba[sample_offset(self.cursor)] & 1) << bit;
            self.cursor += 1;
        }
        byte
    }
}

impl Read for LsbReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.remaining_bytes());
        for slot in &mut buf[..n] {
            *slot = self.take_byte();
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_byte_lands_in_rgb_of_first_pixels() {
        // 3 pixels = 9 samples: room for one byte
        let mut rgba = [0u8; 12];
        let mut w = LsbWriter::new(&mut rgba);
        assert_eq!(w.remaining_bytes(), 1);
        w.write_all(&[0b1010_0101]).unwrap();

        // bit0 -> R0, bit1 -> G0, bit2 -> B0, bit3 -> R1 ...
        assert_eq!(rgba, [1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn alpha_and_upper_bits_untouched() {
        let mut rgba = [0xFEu8; 16 * 4];
        LsbWriter::new(&mut rgba).write_all(&[0xFF; 6]).unwrap();
        for px in rgba.chunks_exact(4) {
            assert_eq!(px[3], 0xFE);
            for &s in &px[..3] {
                assert_eq!(s & 0xFE, 0xFE);
            }
        }
    }

    #[test]
    fn reader_mirrors_writer() {
        let mut rgba: Vec<u8> = (0..40u32 * 4).map(|i| (i * 37) as u8).collect();
        let payload = b"lsb!";
        LsbWriter::new(&mut rgba).write_all(payload).unwrap();

        let mut out = [0u8; 4];
        LsbReader::new(&rgba).read_exact(&mut out).unwrap();
        assert_eq!(&out, payload);
    }

    #[test]
    fn full_carrier_refuses_more() {
        let mut rgba = [0u8; 12];
        let mut w = LsbWriter::new(&mut rgba);
        let err = w.write_all(&[1, 2]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }

    #[test]
    fn reader_stops_at_last_whole_byte() {
        // 5 pixels = 15 samples = 1 whole byte
        let rgba = [0u8; 20];
        let mut r = LsbReader::new(&rgba);
        let mut buf = [0u8; 4];
        assert_eq!(r.read(&mut buf).unwrap(), 1);
        assert_eq!(r.read(&mut buf).unwrap(), 0);
    }
}
