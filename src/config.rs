// src/config.rs
use serde::Deserialize;
use std::sync::OnceLock;

use crate::consts::{DEFAULT_CREDS_PATH, DEFAULT_KEY_PATH};

/// Demo CLI config - loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: Paths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub credentials: String,
    pub key: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime - falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("CREDVAULT_CONFIG").unwrap_or_else(|_| "credvault.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read credvault.toml");
            toml::from_str(&content).expect("Invalid TOML in credvault.toml")
        } else {
            eprintln!("Warning: {config_path} not found, using built-in defaults");
            Config {
                paths: Paths {
                    credentials: DEFAULT_CREDS_PATH.into(),
                    key: DEFAULT_KEY_PATH.into(),
                },
            }
        }
    })
}
