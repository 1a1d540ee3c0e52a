// src/stego/mod.rs
//! # Steganographic Codec
//!
//! Hides a byte payload in the least-significant bits of a raster image's
//! colour samples and recovers it.
//!
//! The payload is framed exactly like an envelope blob (8-byte big-endian
//! length, then the bytes) and written through [`lsb::LsbWriter`], three
//! bits per pixel. Output is always PNG; a lossy re-encode destroys the data.
//!
//! [`legacy`] holds the older raw-pixel format, which is not steganographic.

pub mod carrier;
pub mod legacy;
pub mod lsb;

pub use carrier::Carrier;

use crate::error::KindiError;

/// Decode `cover` (PNG, JPEG, ...), embed `payload`, return PNG bytes.
pub fn hide(cover: &[u8], payload: &[u8]) -> Result<Vec<u8>, KindiError> {
    let mut carrier = Carrier::decode(cover)?;
    carrier.embed_in_place(payload)?;
    carrier.to_png()
}

/// Recover the payload hidden by [`hide`].
pub fn reveal(stego: &[u8]) -> Result<Vec<u8>, KindiError> {
    Carrier::decode_stego(stego)?.extract()
}
