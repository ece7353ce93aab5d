// src/crypto.rs
//! Pure AEAD decryption - no I/O, no document parsing
//!
//! This module contains only the raw AES-GCM open operation. Everything here
//! works on in-memory buffers and returns typed failures.

use aes_gcm::aead::generic_array::typenum::U12;
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};

use crate::consts::{AES_KEY_LENGTHS, NONCE_LEN, TAG_LEN};
use crate::error::CredsError;

pub type Result<T> = std::result::Result<T, CredsError>;

// aes-gcm ships aliases for 128 and 256 only
type Aes192Gcm = AesGcm<Aes192, U12>;

/// Authenticated decryption of a detached-tag AES-GCM payload.
///
/// The cipher verifies `ciphertext || tag` as a single buffer, so the two
/// detached fields are re-joined here before the open call. On tag mismatch
/// the whole operation fails and no plaintext is returned.
pub fn open(key: &[u8], nonce: &[u8], ciphertext: &[u8], tag: &[u8]) -> Result<Vec<u8>> {
    if !AES_KEY_LENGTHS.contains(&key.len()) {
        return Err(CredsError::InvalidKeyLength(key.len()));
    }
    if nonce.len() != NONCE_LEN {
        return Err(CredsError::InvalidNonceLength(nonce.len()));
    }
    if tag.len() != TAG_LEN {
        return Err(CredsError::InvalidTagLength(tag.len()));
    }

    let mut sealed = Vec::with_capacity(ciphertext.len() + tag.len());
    sealed.extend_from_slice(ciphertext);
    sealed.extend_from_slice(tag);

    match key.len() {
        16 => open_with::<Aes128Gcm>(key, nonce, &sealed),
        24 => open_with::<Aes192Gcm>(key, nonce, &sealed),
        _ => open_with::<Aes256Gcm>(key, nonce, &sealed),
    }
}

fn open_with<C: Aead + KeyInit>(key: &[u8], nonce: &[u8], sealed: &[u8]) -> Result<Vec<u8>> {
    // Key length already validated against the dispatch arm
    let cipher = C::new_from_slice(key).map_err(|_| CredsError::InvalidKeyLength(key.len()))?;
    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), sealed)
        .map_err(|_| CredsError::Integrity)
}
