//! tests/envelope_tests.rs
//! Round-trips through encrypt/decrypt and the failure modes of the header

mod common;
use common::*;

use kindi_rs::{
    decrypt, decrypt_with_options, encrypt, encrypt_with_options, EnvelopeOptions, KindiError,
    MemoryDirectory,
};
use std::io::{self, Cursor, Read};

fn seal(plaintext: &[u8], filename: &str) -> Vec<u8> {
    let mut out = Vec::new();
    encrypt(
        Cursor::new(plaintext),
        &mut out,
        filename,
        &recipient().public_key(),
        sender(),
    )
    .unwrap();
    out
}

#[test]
fn roundtrip_edge_sizes() {
    init_tracing();
    let dir = directory();
    for len in [0usize, 1, 15, 16, 17, 4096, 64 * 1024 + 1, 3 * 1024 * 1024 + 5] {
        let plaintext = pattern(len);
        let envelope = seal(&plaintext, "foofile.dmg");

        let mut out = Vec::new();
        let info = decrypt(Cursor::new(&envelope), &mut out, recipient(), &dir).unwrap();

        assert_eq!(out, plaintext, "len {len}");
        assert_eq!(info.filename, "foofile.dmg");
        assert_eq!(info.sender_email, SENDER_EMAIL);
        assert_eq!(info.plaintext_len, len as u64);
    }
}

#[test]
fn envelope_layout() {
    let plaintext = pattern(100);
    let envelope = seal(&plaintext, "a.txt");

    let header_len = u64::from_be_bytes(envelope[..8].try_into().unwrap()) as usize;
    let tag_frame = 8 + header_len;
    let tag_len = u64::from_be_bytes(envelope[tag_frame..tag_frame + 8].try_into().unwrap());
    assert_eq!(tag_len, 32);

    let body_start = tag_frame + 8 + 32;
    assert_eq!(envelope.len() - body_start, plaintext.len() + 32);

    // wrapped key frame opens the header, one RSA block long
    let wrapped_len = u64::from_be_bytes(envelope[8..16].try_into().unwrap());
    assert_eq!(wrapped_len, 128);
}

#[test]
fn every_envelope_uses_a_fresh_key() {
    let a = seal(b"same bytes", "same");
    let b = seal(b"same bytes", "same");
    assert_ne!(a, b);
    assert_ne!(a[a.len() - 42..], b[b.len() - 42..]);
}

#[test]
fn unicode_filename_survives() {
    let envelope = seal(b"x", "résumé – final.pdf");
    let info = decrypt(envelope.as_slice(), io::sink(), recipient(), &directory()).unwrap();
    assert_eq!(info.filename, "résumé – final.pdf");
}

#[test]
fn tiny_buffers_still_roundtrip() {
    let opts = EnvelopeOptions::new()
        .with_io_chunk_size(3)
        .with_staging_buffer_size(33);
    let plaintext = pattern(5000);

    let mut envelope = Vec::new();
    encrypt_with_options(
        plaintext.as_slice(),
        &mut envelope,
        "f",
        &recipient().public_key(),
        sender(),
        &opts,
    )
    .unwrap();

    let mut out = Vec::new();
    decrypt_with_options(envelope.as_slice(), &mut out, recipient(), &directory(), &opts).unwrap();
    assert_eq!(out, plaintext);
}

/// Hands out one byte per call and fails every other call with `Interrupted`.
struct Stuttering<R> {
    inner: R,
    flip: bool,
}

impl<R: Read> Read for Stuttering<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.flip = !self.flip;
        if self.flip {
            return Err(io::ErrorKind::Interrupted.into());
        }
        let n = buf.len().min(1);
        self.inner.read(&mut buf[..n])
    }
}

#[test]
fn interrupted_reads_are_retried() {
    let plaintext = pattern(300);
    let mut envelope = Vec::new();
    encrypt(
        Stuttering { inner: plaintext.as_slice(), flip: false },
        &mut envelope,
        "s",
        &recipient().public_key(),
        sender(),
    )
    .unwrap();

    let mut out = Vec::new();
    decrypt(
        Stuttering { inner: envelope.as_slice(), flip: false },
        &mut out,
        recipient(),
        &directory(),
    )
    .unwrap();
    assert_eq!(out, plaintext);
}

#[test]
fn signature_is_checked_against_directory_key() {
    // directory maps the sender's email to someone else's key
    let dir = MemoryDirectory::new();
    dir.publish(SENDER_EMAIL, impostor().public_key());

    let envelope = seal(&FIXTURE_PAYLOAD, "f");
    let err = decrypt(envelope.as_slice(), io::sink(), recipient(), &dir).unwrap_err();
    assert!(err.is_authentication(), "{err}");
}

#[test]
fn unknown_sender_is_reported() {
    let envelope = seal(&FIXTURE_PAYLOAD, "f");
    let err = decrypt(envelope.as_slice(), io::sink(), recipient(), &MemoryDirectory::new())
        .unwrap_err();
    assert!(matches!(err, KindiError::UnknownSender(ref e) if e == SENDER_EMAIL));
}

#[test]
fn closure_directory_works() {
    let sender_key = sender().public_key();
    let lookup = move |email: &str| (email == SENDER_EMAIL).then(|| sender_key.clone());

    let envelope = seal(&FIXTURE_PAYLOAD, "f");
    let mut out = Vec::new();
    decrypt(envelope.as_slice(), &mut out, recipient(), &lookup).unwrap();
    assert_eq!(out, FIXTURE_PAYLOAD);
}

#[test]
fn wrong_recipient_cannot_unwrap() {
    let envelope = seal(&FIXTURE_PAYLOAD, "f");
    let err = decrypt(envelope.as_slice(), io::sink(), impostor(), &directory()).unwrap_err();
    assert!(matches!(err, KindiError::CryptoSetup(_)), "{err}");
}

#[test]
fn oversized_header_is_rejected() {
    let envelope = seal(&FIXTURE_PAYLOAD, "f");
    let opts = EnvelopeOptions::new().with_max_header_len(64);
    let err = decrypt_with_options(envelope.as_slice(), io::sink(), recipient(), &directory(), &opts)
        .unwrap_err();
    assert!(matches!(err, KindiError::MalformedFraming(_)));
}

#[test]
fn truncated_header_is_malformed() {
    let envelope = seal(&FIXTURE_PAYLOAD, "f");
    for cut in [0, 5, 8, 40, 8 + 200] {
        let err = decrypt(&envelope[..cut], io::sink(), recipient(), &directory()).unwrap_err();
        assert!(matches!(err, KindiError::MalformedFraming(_)), "cut {cut}: {err}");
    }
}

#[test]
fn body_shorter_than_tag_fails_authentication() {
    let envelope = seal(&[], "f");
    let body_start = envelope.len() - 32;
    for keep in [0, 1, 31] {
        let err = decrypt(
            &envelope[..body_start + keep],
            io::sink(),
            recipient(),
            &directory(),
        )
        .unwrap_err();
        assert!(err.is_authentication(), "keep {keep}: {err}");
    }
}
