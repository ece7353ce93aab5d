// src/key_ops.rs
//! Key loading
//!
//! Collapses the usual "from bytes / from base64 string / from file"
//! constructor overloads into a single source enum.

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::KeyMaterial;
use crate::consts::DEFAULT_KEY_PATH;
use crate::error::CredsError;

pub type Result<T> = std::result::Result<T, CredsError>;

/// Where the AES key comes from
#[derive(Debug, Clone)]
pub enum KeySource {
    /// Raw key bytes, used as-is
    Bytes(Vec<u8>),
    /// Standard base64 text, surrounding whitespace ignored
    Base64(String),
    /// Path to a key file containing standard base64 text
    Path(PathBuf),
}

impl KeySource {
    /// Resolve the source into key material.
    ///
    /// Length is not checked here: a caller may hold a wrongly sized key,
    /// and every decrypt with it fails with `InvalidKeyLength`.
    pub fn load(&self) -> Result<KeyMaterial> {
        let bytes = match self {
            Self::Bytes(raw) => raw.clone(),
            Self::Base64(text) => STANDARD.decode(text.trim())?,
            Self::Path(path) => {
                let text = std::fs::read_to_string(path)?;
                STANDARD.decode(text.trim())?
            }
        };
        Ok(KeyMaterial::new(bytes))
    }
}

/// Load the key from the conventional `.credential-code/encryption-key.txt`
pub fn load_default_key() -> Result<KeyMaterial> {
    KeySource::Path(PathBuf::from(DEFAULT_KEY_PATH)).load()
}
