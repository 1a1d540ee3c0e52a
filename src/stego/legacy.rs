// src/stego/legacy.rs
//! Legacy raw payload images.
//!
//! Early key images were not steganographic at all: the payload bytes *are*
//! the pixels. The first pixel's R, G, B, A hold the payload length as a
//! little-endian `u32`; every following pixel carries four payload bytes.
//! There is no cover, so this is only kept to read and write that old
//! format on explicit request. Nothing in the crate falls back to it.

use crate::consts::LEGACY_MAX_WIDTH;
use crate::error::KindiError;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Lay `payload` out as raw RGBA pixels.
pub fn encode_raw_image(payload: &[u8]) -> Result<RgbaImage, KindiError> {
    let len = u32::try_from(payload.len()).map_err(|_| KindiError::CapacityExceeded {
        needed: payload.len(),
        available: u32::MAX as usize,
    })?;

    let num_pixels = payload.len() / 4 + 1;
    let width = ((num_pixels as f64).sqrt() as u32).clamp(1, LEGACY_MAX_WIDTH);
    let height = (num_pixels / width as usize + 1) as u32;

    let mut raw = vec![0u8; width as usize * height as usize * 4];
    raw[..4].copy_from_slice(&len.to_le_bytes());
    raw[4..4 + payload.len()].copy_from_slice(payload);

    RgbaImage::from_raw(width, height, raw).ok_or_else(|| {
        KindiError::MalformedFraming("raw image buffer does not match its dimensions".into())
    })
}

/// Recover the payload from a raw payload image.
pub fn decode_raw_image(image: &DynamicImage) -> Result<Vec<u8>, KindiError> {
    let DynamicImage::ImageRgba8(pixels) = image else {
        return Err(KindiError::UnsupportedPixelFormat(format!(
            "raw payload images are RGBA8, got {:?}",
            image.color()
        )));
    };

    let raw = pixels.as_raw();
    if raw.len() < 4 {
        return Err(KindiError::TruncatedCarrier {
            declared: 4,
            available: raw.len(),
        });
    }

    let declared = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize;
    let available = raw.len() - 4;
    if declared > available {
        return Err(KindiError::TruncatedCarrier {
            declared: declared as u64,
            available,
        });
    }
    Ok(raw[4..4 + declared].to_vec())
}

/// [`encode_raw_image`] straight to PNG bytes.
pub fn encode_raw_png(payload: &[u8]) -> Result<Vec<u8>, KindiError> {
    let mut out = Cursor::new(Vec::new());
    encode_raw_image(payload)?.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// [`decode_raw_image`] from PNG bytes.
pub fn decode_raw_png(png: &[u8]) -> Result<Vec<u8>, KindiError> {
    let image = image::load_from_memory_with_format(png, ImageFormat::Png)?;
    decode_raw_image(&image)
}
