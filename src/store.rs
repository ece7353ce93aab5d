// src/store.rs
//! Credential document model and the bulk/single decrypt operations

use std::collections::BTreeMap;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::aliases::KeyMaterial;
use crate::crypto::open;
use crate::error::CredsError;

pub type Result<T> = std::result::Result<T, CredsError>;

/// One encrypted credential as embedded in a `.creds` document.
///
/// All three fields are standard base64.
#[derive(Debug, Clone, Deserialize)]
pub struct EncryptedEntry {
    pub data: String,
    pub nonce: String,
    pub tag: String,
}

/// A parsed `.creds` document. Immutable after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialStore {
    pub credentials: BTreeMap<String, EncryptedEntry>,
}

impl CredentialStore {
    /// Parse a document from its JSON text form
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a `.creds` file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.credentials.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

/// Decode one entry's base64 fields and run the authenticated open
fn decrypt_entry(entry: &EncryptedEntry, key: &KeyMaterial) -> Result<String> {
    let ciphertext = STANDARD.decode(&entry.data)?;
    let nonce = STANDARD.decode(&entry.nonce)?;
    let tag = STANDARD.decode(&entry.tag)?;
    let plaintext = open(key.expose_secret(), &nonce, &ciphertext, &tag)?;
    Ok(String::from_utf8(plaintext)?)
}

/// Decrypt every credential in the store.
///
/// Fail-fast: the first entry that fails aborts the whole load and nothing
/// is returned, so a caller never runs with half its secrets missing.
pub fn decrypt_all(store: &CredentialStore, key: &KeyMaterial) -> Result<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    for (name, entry) in &store.credentials {
        let value = decrypt_entry(entry, key).map_err(|source| CredsError::Entry {
            name: name.clone(),
            source: Box::new(source),
        })?;
        out.insert(name.clone(), value);
    }
    Ok(out)
}

/// Decrypt a single named credential
pub fn decrypt_one(store: &CredentialStore, key: &KeyMaterial, name: &str) -> Result<String> {
    let entry = store
        .credentials
        .get(name)
        .ok_or_else(|| CredsError::NotFound(name.to_owned()))?;
    decrypt_entry(entry, key)
}
