// src/bin/print_creds.rs
//! Print every credential in the configured `.creds` file as pretty JSON.
//!
//! Any single failed entry aborts the run with no credentials printed.

use anyhow::{Context, Result};
use credential_vault::{decrypt_all, load_config, CredentialStore, KeySource};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config();

    let key = KeySource::Path(config.paths.key.clone().into())
        .load()
        .with_context(|| format!("Failed to load key from {}", config.paths.key))?;

    let store = CredentialStore::from_path(&config.paths.credentials)
        .with_context(|| format!("Failed to load {}", config.paths.credentials))?;

    info!(
        "Loaded {} credential(s) from {}",
        store.len(),
        config.paths.credentials
    );

    let decrypted =
        decrypt_all(&store, &key).context("Decrypt failed, no credentials are available")?;

    println!("{}", serde_json::to_string_pretty(&decrypted)?);

    Ok(())
}
