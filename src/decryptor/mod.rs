// src/decryptor/mod.rs
//! Decrypt path of the envelope engine.
//!
//! `Idle -> HeaderRead -> KeyRecovered -> SenderResolved -> SenderVerified
//! -> BodyStreaming -> TagVerified | AuthenticationFailed`

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod session;
pub mod stream;

pub use decrypt::{decrypt, decrypt_with_options, EnvelopeInfo};
pub use read::{read_tag_frame, split_sealed_header};
pub use session::{open_header, OpenedHeader};
pub use stream::{decrypt_body, TailReader};
