// src/lib.rs
//! credential-vault - runtime decryption for credential-code `.creds` files
//!
//! Features:
//! - AES-GCM authenticated decryption (128/192/256-bit keys)
//! - Base64-encoded `.creds` JSON documents
//! - Zeroizing key material (secure-gate)
//! - Optional name-keyed cache with explicit invalidation

pub mod aliases;
pub mod cache;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod key_ops;
pub mod store;

// Re-export everything users need at the crate root
pub use aliases::KeyMaterial;
pub use cache::CredentialCache;
pub use config::load as load_config;
pub use crypto::open;
pub use error::CredsError;
pub use key_ops::{load_default_key, KeySource};
pub use store::{decrypt_all, decrypt_one, CredentialStore, EncryptedEntry};
