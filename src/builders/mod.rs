// src/builders/mod.rs
//! # Builders
//!
//! Fluent configuration for envelope operations.
//!
//! - [`envelope_options`] - buffer sizes and parsing limits for
//!   [`encrypt_with_options`](crate::encrypt_with_options) /
//!   [`decrypt_with_options`](crate::decrypt_with_options)

pub mod envelope_options;

pub use envelope_options::EnvelopeOptions;
