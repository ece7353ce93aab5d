// tests/support.rs
//! Test utilities - the encryption half lives here so the library itself
//! stays decrypt-only.

use aes_gcm::aead::generic_array::typenum::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, Nonce};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;
use serde_json::json;

use credential_vault::consts::{NONCE_LEN, TAG_LEN};
use credential_vault::KeyMaterial;

type Aes192Gcm = AesGcm<Aes192, U12>;

#[allow(dead_code)]
pub fn random_key(len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    rand::rng().fill_bytes(&mut key);
    key
}

#[allow(dead_code)]
pub fn key_material(key: &[u8]) -> KeyMaterial {
    KeyMaterial::new(key.to_vec())
}

/// Encrypt `plaintext` under a fresh random nonce, returning the raw
/// (nonce, ciphertext, tag) triple
#[allow(dead_code)]
pub fn seal(key: &[u8], plaintext: &[u8]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    match key.len() {
        16 => seal_with::<Aes128Gcm>(key, plaintext),
        24 => seal_with::<Aes192Gcm>(key, plaintext),
        32 => seal_with::<Aes256Gcm>(key, plaintext),
        other => panic!("unsupported test key length {other}"),
    }
}

fn seal_with<C>(key: &[u8], plaintext: &[u8]) -> (Vec<u8>, Vec<u8>, Vec<u8>)
where
    C: Aead + KeyInit + AeadCore<NonceSize = U12>,
{
    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);
    let cipher = C::new_from_slice(key).expect("valid key length");
    let mut sealed = cipher
        .encrypt(Nonce::<C>::from_slice(&nonce), plaintext)
        .expect("encrypt fixture");
    let tag = sealed.split_off(sealed.len() - TAG_LEN);
    (nonce.to_vec(), sealed, tag)
}

/// One entry as embedded in a `.creds` document (base64 fields)
#[allow(dead_code)]
pub fn sealed_entry_raw(key: &[u8], plaintext: &[u8]) -> serde_json::Value {
    let (nonce, ciphertext, tag) = seal(key, plaintext);
    json!({
        "data": STANDARD.encode(ciphertext),
        "nonce": STANDARD.encode(nonce),
        "tag": STANDARD.encode(tag),
    })
}

#[allow(dead_code)]
pub fn sealed_entry(key: &[u8], plaintext: &str) -> serde_json::Value {
    sealed_entry_raw(key, plaintext.as_bytes())
}

/// A complete document with the given name -> plaintext pairs
#[allow(dead_code)]
pub fn creds_document(key: &[u8], creds: &[(&str, &str)]) -> String {
    let mut entries = serde_json::Map::new();
    for (name, value) in creds {
        entries.insert((*name).to_owned(), sealed_entry(key, value));
    }
    json!({ "credentials": entries }).to_string()
}

/// Flip one bit inside a base64 field
#[allow(dead_code)]
pub fn flip_bit(b64: &str, byte: usize, bit: u8) -> String {
    let mut raw = STANDARD.decode(b64).expect("valid base64 fixture");
    raw[byte] ^= 1 << bit;
    STANDARD.encode(raw)
}
