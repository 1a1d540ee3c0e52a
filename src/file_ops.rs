// src/file_ops.rs
//! # File Helpers
//!
//! Path-based wrappers around [`encrypt`](crate::encrypt) and
//! [`decrypt`](crate::decrypt). Both write through a temporary file in the
//! destination directory and only persist it once the operation succeeded,
//! so a failed decrypt never leaves unauthenticated plaintext on disk.

use crate::consts::ENVELOPE_EXTENSION;
use crate::decryptor::decrypt;
use crate::directory::CertificateDirectory;
use crate::encryptor::encrypt;
use crate::error::KindiError;
use crate::identity::Identity;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Result of [`decrypt_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedFile {
    /// Where the plaintext was written.
    pub path: PathBuf,
    /// Verified sender.
    pub sender_email: String,
}

/// Encrypt `path` for `recipient_email` and write `<path>.kindi` next to it.
///
/// The recipient's key comes from `directory`; the envelope carries the
/// file's base name.
///
/// # Errors
///
/// - [`KindiError::UnknownRecipient`] if `directory` has no key for `recipient_email`
/// - [`KindiError::UnsafeFilename`] if `path` has no usable file name
/// - anything [`encrypt`](crate::encrypt) returns
pub fn encrypt_file<P, D>(
    path: P,
    recipient_email: &str,
    sender: &Identity,
    directory: &D,
) -> Result<PathBuf, KindiError>
where
    P: AsRef<Path>,
    D: CertificateDirectory + ?Sized,
{
    let path = path.as_ref();
    let recipient = directory
        .lookup(recipient_email)
        .ok_or_else(|| KindiError::UnknownRecipient(recipient_email.to_owned()))?;

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| KindiError::UnsafeFilename(path.display().to_string()))?;

    let mut out_path = path.as_os_str().to_owned();
    out_path.push(".");
    out_path.push(ENVELOPE_EXTENSION);
    let out_path = PathBuf::from(out_path);

    let input = BufReader::new(File::open(path)?);
    let mut staged = NamedTempFile::new_in(parent_dir(path))?;
    encrypt(
        input,
        BufWriter::new(staged.as_file_mut()),
        filename,
        &recipient,
        sender,
    )?;

    staged.persist(&out_path).map_err(|e| KindiError::Io(e.error))?;
    debug!(path = %out_path.display(), recipient = recipient_email, "envelope file written");
    Ok(out_path)
}

/// Decrypt the envelope at `path` into the filename it declares, in the same
/// directory. An existing file of that name is replaced.
///
/// # Errors
///
/// - [`KindiError::UnsafeFilename`] if the declared name is empty or has
///   path separators or `.`/`..`
/// - anything [`decrypt`](crate::decrypt) returns; no output file is created
pub fn decrypt_file<P, D>(
    path: P,
    recipient: &Identity,
    directory: &D,
) -> Result<DecryptedFile, KindiError>
where
    P: AsRef<Path>,
    D: CertificateDirectory + ?Sized,
{
    let path = path.as_ref();
    let dir = parent_dir(path);

    let input = BufReader::new(File::open(path)?);
    let mut staged = NamedTempFile::new_in(dir)?;
    let info = decrypt(input, BufWriter::new(staged.as_file_mut()), recipient, directory)?;

    let name = checked_filename(&info.filename)?;
    let out_path = dir.join(name);
    staged.persist(&out_path).map_err(|e| KindiError::Io(e.error))?;
    debug!(
        path = %out_path.display(),
        sender = %info.sender_email,
        bytes = info.plaintext_len,
        "decrypted file persisted"
    );

    Ok(DecryptedFile {
        path: out_path,
        sender_email: info.sender_email,
    })
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Accept only a single plain path component.
fn checked_filename(declared: &str) -> Result<&str, KindiError> {
    let unsafe_name = || KindiError::UnsafeFilename(declared.to_owned());
    if declared.is_empty() || declared.contains(['/', '\\', '\0']) {
        return Err(unsafe_name());
    }
    let mut components = Path::new(declared).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(declared),
        _ => Err(unsafe_name()),
    }
}
