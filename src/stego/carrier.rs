// src/stego/carrier.rs
//! Decoded carrier images and the framed LSB embed/extract operations.

use crate::consts::{DATA_CHANNELS_PER_PIXEL, LENGTH_PREFIX_LEN};
use crate::error::KindiError;
use crate::framing::{framed_len, read_length_prefix, write_length_encoded};
use crate::stego::lsb::{LsbReader, LsbWriter};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::{Cursor, Read};
use tracing::debug;

/// An image decoded into an explicit RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    pixels: RgbaImage,
}

impl Carrier {
    /// Decode any supported raster format to use as a cover.
    pub fn decode(bytes: &[u8]) -> Result<Self, KindiError> {
        Ok(Self::from_image(image::load_from_memory(bytes)?))
    }

    /// Convert any decoded image into an RGBA8 cover.
    ///
    /// Deeper or float samples are quantized to 8 bits; the cover only has
    /// to look right, and the result is always written as 8-bit PNG.
    pub fn from_image(image: DynamicImage) -> Self {
        match image {
            DynamicImage::ImageRgba8(pixels) => Self { pixels },
            other => Self {
                pixels: other.to_rgba8(),
            },
        }
    }

    /// Decode an image that is expected to already hold a payload.
    ///
    /// Only 8-bit RGB/RGBA can carry embedded bits, so anything else fails
    /// closed instead of yielding garbage.
    pub fn decode_stego(bytes: &[u8]) -> Result<Self, KindiError> {
        match image::load_from_memory(bytes)? {
            DynamicImage::ImageRgba8(pixels) => Ok(Self { pixels }),
            rgb @ DynamicImage::ImageRgb8(_) => Ok(Self {
                pixels: rgb.to_rgba8(),
            }),
            other => Err(KindiError::UnsupportedPixelFormat(format!(
                "{:?} cannot hold embedded data",
                other.color()
            ))),
        }
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    /// Total bytes the carrier can hold, framing included: `floor(w*h*3/8)`.
    pub fn capacity(&self) -> usize {
        let (w, h) = self.dimensions();
        (w as usize * h as usize * DATA_CHANNELS_PER_PIXEL) / 8
    }

    /// Largest payload that fits once the 8-byte length prefix is paid for.
    pub fn payload_capacity(&self) -> usize {
        self.capacity().saturating_sub(LENGTH_PREFIX_LEN)
    }

    /// Return a copy of this carrier with `payload` embedded.
    pub fn embed(&self, payload: &[u8]) -> Result<Carrier, KindiError> {
        self.check_fits(payload)?;
        let mut out = self.clone();
        out.embed_in_place(payload)?;
        Ok(out)
    }

    /// Embed `payload` into this carrier.
    ///
    /// The capacity check runs before any sample is touched, so a
    /// [`KindiError::CapacityExceeded`] leaves the carrier unmodified.
    pub fn embed_in_place(&mut self, payload: &[u8]) -> Result<(), KindiError> {
        self.check_fits(payload)?;
        let (width, height) = self.dimensions();
        let mut writer = LsbWriter::new(&mut self.pixels);
        write_length_encoded(&mut writer, payload)?;
        debug!(
            width,
            height,
            payload_len = payload.len(),
            "embedded payload in carrier"
        );
        Ok(())
    }

    /// Extract the framed payload.
    ///
    /// # Errors
    ///
    /// [`KindiError::TruncatedCarrier`] if the carrier is too small for the
    /// length prefix, or the prefix declares more bytes than remain.
    pub fn extract(&self) -> Result<Vec<u8>, KindiError> {
        let mut reader = LsbReader::new(&self.pixels);
        if reader.remaining_bytes() < LENGTH_PREFIX_LEN {
            return Err(KindiError::TruncatedCarrier {
                declared: LENGTH_PREFIX_LEN as u64,
                available: reader.remaining_bytes(),
            });
        }

        let declared = read_length_prefix(&mut reader)?;
        let available = reader.remaining_bytes();
        if declared > available as u64 {
            return Err(KindiError::TruncatedCarrier {
                declared,
                available,
            });
        }

        let mut payload = vec![0u8; declared as usize];
        reader.read_exact(&mut payload)?;
        debug!(payload_len = payload.len(), "extracted payload from carrier");
        Ok(payload)
    }

    /// Encode as PNG, the lossless output format.
    pub fn to_png(&self) -> Result<Vec<u8>, KindiError> {
        let mut out = Cursor::new(Vec::new());
        self.pixels.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    fn check_fits(&self, payload: &[u8]) -> Result<(), KindiError> {
        let needed = framed_len(payload.len());
        let available = self.capacity();
        if needed > available {
            return Err(KindiError::CapacityExceeded { needed, available });
        }
        Ok(())
    }
}
