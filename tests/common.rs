//! tests/common.rs
//! Shared fixtures: the 54-byte payload, cached RSA identities, cover images

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use kindi_rs::{Carrier, Identity, MemoryDirectory};
use std::io::Cursor;
use std::sync::OnceLock;

/// Reference payload for envelope round-trips.
#[allow(dead_code)]
pub const FIXTURE_PAYLOAD: [u8; 55] = [
    0xd9, 0x4a, 0xe0, 0x83, 0x2e, 0x64, 0x45, 0xce, 0x42, 0x33, 0x1c, 0xb0, 0x6d, 0x53, 0x1a,
    0x82, 0xb1, 0xdb, 0x4b, 0xaa, 0xd3, 0x0f, 0x74, 0x6d, 0xc9, 0x16, 0xdf, 0x24, 0xd4, 0xe3,
    0xc2, 0x45, 0x1f, 0xff, 0x59, 0xa6, 0x42, 0x3e, 0xb0, 0xe1, 0xd0, 0x2d, 0x4f, 0xe6, 0x46,
    0xcf, 0x69, 0x9d, 0xfd, 0x81, 0x8c, 0x6e, 0x97, 0xb0, 0x51,
];

#[allow(dead_code)]
pub const SENDER_EMAIL: &str = "foo@gmail.com";
#[allow(dead_code)]
pub const RECIPIENT_EMAIL: &str = "bar@gmail.com";
#[allow(dead_code)]
pub const IMPOSTOR_EMAIL: &str = "mallory@gmail.com";

/// 1024-bit keys keep key generation cheap; generated once per test binary.
const TEST_RSA_BITS: usize = 1024;

fn cached(cell: &'static OnceLock<Identity>, email: &str) -> &'static Identity {
    cell.get_or_init(|| Identity::generate(email, TEST_RSA_BITS).unwrap())
}

#[allow(dead_code)]
pub fn sender() -> &'static Identity {
    static ID: OnceLock<Identity> = OnceLock::new();
    cached(&ID, SENDER_EMAIL)
}

#[allow(dead_code)]
pub fn recipient() -> &'static Identity {
    static ID: OnceLock<Identity> = OnceLock::new();
    cached(&ID, RECIPIENT_EMAIL)
}

#[allow(dead_code)]
pub fn impostor() -> &'static Identity {
    static ID: OnceLock<Identity> = OnceLock::new();
    cached(&ID, IMPOSTOR_EMAIL)
}

/// Directory that knows the sender and the recipient.
#[allow(dead_code)]
pub fn directory() -> MemoryDirectory {
    let dir = MemoryDirectory::new();
    dir.publish(SENDER_EMAIL, sender().public_key());
    dir.publish(RECIPIENT_EMAIL, recipient().public_key());
    dir
}

/// Deterministic pseudo-random bytes.
#[allow(dead_code)]
pub fn pattern(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

/// A smooth gradient, roughly what a photo looks like to the codec.
#[allow(dead_code)]
pub fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
            0xFF,
        ])
    })
}

#[allow(dead_code)]
pub fn cover(width: u32, height: u32) -> Carrier {
    Carrier::from_rgba(gradient(width, height))
}

/// Encode `image` in `format`, as a cover file would arrive from disk.
#[allow(dead_code)]
pub fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

/// Install a test subscriber once; honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
