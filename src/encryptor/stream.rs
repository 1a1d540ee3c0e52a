// src/encryptor/stream.rs
//! Streamed body encryption.

use crate::crypto::stream::CipherStream;
use crate::encryptor::write::write_body_tag;
use crate::error::KindiError;
use crate::utils::read_retrying;
use std::io::{Read, Write};

/// Encrypt all of `source` into `destination`, then append the body tag.
///
/// Nothing is buffered beyond one chunk of `chunk_size` bytes. Returns the
/// number of plaintext bytes consumed.
pub fn encrypt_stream<R, W>(
    source: &mut R,
    destination: &mut W,
    mut stream: CipherStream,
    chunk_size: usize,
) -> Result<u64, KindiError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut chunk = vec![0u8; chunk_size.max(1)];
    loop {
        let n = read_retrying(source, &mut chunk)?;
        if n == 0 {
            break;
        }
        stream.encrypt_in_place(&mut chunk[..n]);
        destination.write_all(&chunk[..n])?;
    }

    let processed = stream.processed();
    write_body_tag(destination, &stream.finalize())?;
    destination.flush()?;
    Ok(processed)
}
