// src/encryptor/mod.rs
//! Encrypt path of the envelope engine.
//!
//! `Idle -> KeyGenerated -> HeaderBuilt -> BodyStreaming -> Finalized`

pub(crate) mod encrypt;
pub(crate) mod session;
pub(crate) mod stream;
pub(crate) mod write;

pub use encrypt::{encrypt, encrypt_with_options};
pub use session::seal_header;
pub use stream::encrypt_stream;
pub use write::{write_body_tag, write_envelope_header};
