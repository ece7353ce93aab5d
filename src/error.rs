// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key length {0}, expected 16, 24 or 32 bytes")]
    InvalidKeyLength(usize),

    #[error("invalid nonce length {0}, expected 12 bytes")]
    InvalidNonceLength(usize),

    #[error("invalid tag length {0}, expected 16 bytes")]
    InvalidTagLength(usize),

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("credential document parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decrypted credential is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Wrong key, or nonce/ciphertext/tag tampered with. Unrecoverable.
    #[error("authentication failed: wrong key or tampered data")]
    Integrity,

    #[error("credential '{0}' not found")]
    NotFound(String),

    /// Bulk-load wrapper carrying the name of the entry that failed
    #[error("credential '{name}' failed to decrypt: {source}")]
    Entry {
        name: String,
        #[source]
        source: Box<CredsError>,
    },
}
