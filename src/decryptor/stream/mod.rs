// src/decryptor/stream/mod.rs
//! Body decryption: the tail reader plus the streaming decrypt loop.

pub mod body;
pub mod tail;

pub use body::decrypt_body;
pub use tail::TailReader;
