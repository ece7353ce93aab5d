// src/consts.rs
//! Shared constants - AEAD parameters and default locations

/// AES-GCM nonce length (96-bit, the standard GCM nonce size)
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length (128-bit)
pub const TAG_LEN: usize = 16;

/// Valid AES key lengths in bytes (AES-128 / AES-192 / AES-256)
pub const AES_KEY_LENGTHS: [usize; 3] = [16, 24, 32];

/// Where `credential-code init` drops the encryption key
pub const DEFAULT_KEY_PATH: &str = ".credential-code/encryption-key.txt";

/// Where `credential-code generate` writes the encrypted document
pub const DEFAULT_CREDS_PATH: &str = "Generated/credentials.creds";
