// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout credential-vault.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(KeyMaterial, Vec<u8>); // AES key bytes (16/24/32), zeroized on drop
