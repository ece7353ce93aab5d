// src/cache.rs
//! Name-keyed cache of decrypted credentials with explicit invalidation

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::aliases::KeyMaterial;
use crate::error::CredsError;
use crate::store::{decrypt_one, CredentialStore};

/// Sits in front of the store so repeated lookups of the same name do not
/// re-run the cipher. Clear-all is the only invalidation.
#[derive(Debug, Default)]
pub struct CredentialCache {
    entries: Mutex<HashMap<String, String>>,
    decrypts: AtomicU64,
}

impl CredentialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, decrypting and inserting on a miss.
    ///
    /// The whole read-check-insert runs under one lock so a concurrent
    /// `clear` cannot interleave and leave a stale value behind.
    pub fn get_or_decrypt(
        &self,
        store: &CredentialStore,
        key: &KeyMaterial,
        name: &str,
    ) -> Result<String, CredsError> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(value) = entries.get(name) {
            return Ok(value.clone());
        }
        self.decrypts.fetch_add(1, Ordering::Relaxed);
        let value = decrypt_one(store, key, name)?;
        entries.insert(name.to_owned(), value.clone());
        Ok(value)
    }

    /// Drop every cached value. The next lookup decrypts again.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Number of decrypt invocations performed so far (misses, not hits)
    pub fn decrypt_count(&self) -> u64 {
        self.decrypts.load(Ordering::Relaxed)
    }
}
