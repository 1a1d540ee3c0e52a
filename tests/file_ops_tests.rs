//! tests/file_ops_tests.rs
//! encrypt_file / decrypt_file on a real temporary directory

mod common;
use common::*;

use kindi_rs::{decrypt_file, encrypt, encrypt_file, KindiError};
use std::fs;
use tempfile::TempDir;

#[test]
fn file_roundtrip_restores_name_and_content() {
    let work = TempDir::new().unwrap();
    let plain_path = work.path().join("foofile.dmg");
    fs::write(&plain_path, FIXTURE_PAYLOAD).unwrap();

    let envelope_path = encrypt_file(&plain_path, RECIPIENT_EMAIL, sender(), &directory()).unwrap();
    assert_eq!(envelope_path, work.path().join("foofile.dmg.kindi"));

    // recipient receives only the envelope
    let inbox = TempDir::new().unwrap();
    let received = inbox.path().join("from-foo.kindi");
    fs::rename(&envelope_path, &received).unwrap();

    let decrypted = decrypt_file(&received, recipient(), &directory()).unwrap();
    assert_eq!(decrypted.path, inbox.path().join("foofile.dmg"));
    assert_eq!(decrypted.sender_email, SENDER_EMAIL);
    assert_eq!(fs::read(&decrypted.path).unwrap(), FIXTURE_PAYLOAD);
}

#[test]
fn unknown_recipient_writes_nothing() {
    let work = TempDir::new().unwrap();
    let plain_path = work.path().join("a.txt");
    fs::write(&plain_path, b"hello").unwrap();

    let err = encrypt_file(&plain_path, "nobody@example.com", sender(), &directory()).unwrap_err();
    assert!(matches!(err, KindiError::UnknownRecipient(ref e) if e == "nobody@example.com"));
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 1);
}

#[test]
fn failed_decrypt_leaves_no_plaintext() {
    let work = TempDir::new().unwrap();
    let plain_path = work.path().join("secret.txt");
    fs::write(&plain_path, pattern(10_000)).unwrap();
    let envelope_path = encrypt_file(&plain_path, RECIPIENT_EMAIL, sender(), &directory()).unwrap();
    fs::remove_file(&plain_path).unwrap();

    let mut bytes = fs::read(&envelope_path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x80;
    fs::write(&envelope_path, &bytes).unwrap();

    let err = decrypt_file(&envelope_path, recipient(), &directory()).unwrap_err();
    assert!(err.is_authentication());

    let names: Vec<_> = fs::read_dir(work.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![envelope_path.file_name().unwrap().to_owned()]);
}

#[test]
fn path_traversal_in_declared_name_is_refused() {
    let work = TempDir::new().unwrap();
    let envelope_path = work.path().join("evil.kindi");

    let mut envelope = Vec::new();
    encrypt(
        &b"payload"[..],
        &mut envelope,
        "../escaped.txt",
        &recipient().public_key(),
        sender(),
    )
    .unwrap();
    fs::write(&envelope_path, envelope).unwrap();

    let err = decrypt_file(&envelope_path, recipient(), &directory()).unwrap_err();
    assert!(matches!(err, KindiError::UnsafeFilename(_)));
    assert!(!work.path().join("../escaped.txt").exists());
    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 1);
}

#[test]
fn missing_input_is_io_error() {
    let work = TempDir::new().unwrap();
    let err = encrypt_file(
        work.path().join("absent"),
        RECIPIENT_EMAIL,
        sender(),
        &directory(),
    )
    .unwrap_err();
    assert!(matches!(err, KindiError::Io(_)));
}
