// src/decryptor/read.rs
//! Wire-level readers for the decrypt path.

use crate::aliases::Tag32;
use crate::consts::{LENGTH_PREFIX_LEN, TAG_SIZE};
use crate::error::KindiError;
use crate::framing::read_length_prefix;
use crate::utils::framing_error;
use std::io::Read;

/// Read a length-framed tag whose declared length must be exactly [`TAG_SIZE`].
#[inline]
pub fn read_tag_frame<R>(reader: &mut R) -> Result<Tag32, KindiError>
where
    R: Read + ?Sized,
{
    let declared = read_length_prefix(reader)?;
    if declared != TAG_SIZE as u64 {
        return Err(KindiError::MalformedFraming(format!(
            "header tag frame is {declared} bytes, expected {TAG_SIZE}"
        )));
    }
    let mut tag = [0u8; TAG_SIZE];
    reader
        .read_exact(&mut tag)
        .map_err(|e| framing_error(e, "header tag"))?;
    Ok(tag)
}

/// Split a sealed header into the wrapped key and the encrypted inner header.
pub fn split_sealed_header(sealed: &[u8]) -> Result<(&[u8], &[u8]), KindiError> {
    if sealed.len() < LENGTH_PREFIX_LEN {
        return Err(KindiError::MalformedFraming(
            "sealed header too short for wrapped key length".into(),
        ));
    }
    let (prefix, rest) = sealed.split_at(LENGTH_PREFIX_LEN);
    let mut len_bytes = [0u8; LENGTH_PREFIX_LEN];
    len_bytes.copy_from_slice(prefix);
    let declared = u64::from_be_bytes(len_bytes);

    if declared > rest.len() as u64 {
        return Err(KindiError::MalformedFraming(format!(
            "wrapped key declares {declared} bytes, only {} available",
            rest.len()
        )));
    }
    Ok(rest.split_at(declared as usize))
}
