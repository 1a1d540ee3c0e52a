// src/decryptor/stream/body.rs
//! Streamed body decryption with a trailing tag.

use crate::builders::EnvelopeOptions;
use crate::consts::TAG_SIZE;
use crate::crypto::stream::CipherStream;
use crate::decryptor::stream::tail::TailReader;
use crate::error::KindiError;
use crate::utils::read_retrying;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Decrypt the rest of `input` into `output` and verify the body tag.
///
/// Plaintext is written as it is produced, before the tag can be checked.
/// On [`KindiError::Authentication`] everything written so far must be
/// discarded.
///
/// Returns the number of plaintext bytes written.
pub fn decrypt_body<R, W>(
    input: R,
    output: &mut W,
    mut stream: CipherStream,
    options: &EnvelopeOptions,
) -> Result<u64, KindiError>
where
    R: Read,
    W: Write + ?Sized,
{
    let mut reader = TailReader::with_capacity(input, TAG_SIZE, options.staging_buffer_size());
    let mut chunk = vec![0u8; options.io_chunk_size()];

    debug!(state = "BodyStreaming", "decrypting body");
    loop {
        let n = read_retrying(&mut reader, &mut chunk)?;
        if n == 0 {
            break;
        }
        stream.decrypt_in_place(&mut chunk[..n]);
        output.write_all(&chunk[..n])?;
    }
    output.flush()?;

    let body_len = stream.processed();
    let tag = reader
        .tail()
        .ok_or_else(|| KindiError::Authentication("body ended before its tag".into()))?;
    if tag.len() < TAG_SIZE {
        warn!(
            state = "AuthenticationFailed",
            tail_len = tag.len(),
            "body shorter than one tag"
        );
        return Err(KindiError::Authentication(format!(
            "body has {} bytes, shorter than a {TAG_SIZE}-byte tag",
            tag.len()
        )));
    }

    if let Err(err) = stream.verify(tag, "body") {
        warn!(state = "AuthenticationFailed", body_len, "body tag mismatch");
        return Err(err);
    }
    debug!(state = "TagVerified", body_len, "body tag verified");
    Ok(body_len)
}
