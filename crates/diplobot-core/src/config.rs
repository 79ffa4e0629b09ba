//! TOML-based application configuration.
//!
//! Stores the board page URL and the mail relay endpoint. Relay
//! credentials are deliberately NOT part of the file: they come from the
//! environment and are handed to the mailer as an explicit
//! [`crate::mailer::SmtpCredentials`] value.
//!
//! Configuration is stored at `~/.config/diplobot/config.toml`; a missing
//! file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Mail relay endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_relay_host")]
    pub host: String,
    #[serde(default = "default_relay_port")]
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_relay_host(),
            port: default_relay_port(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/diplobot/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the board page; the game ID is appended as a query
    /// parameter.
    #[serde(default = "default_board_url")]
    pub board_url: String,
    #[serde(default)]
    pub relay: RelayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_url: default_board_url(),
            relay: RelayConfig::default(),
        }
    }
}

fn default_board_url() -> String {
    "https://webdiplomacy.net/board.php".to_string()
}
fn default_relay_host() -> String {
    "smtp.gmail.com".to_string()
}
fn default_relay_port() -> u16 {
    587
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        let path = data_dir()?.join("config.toml");
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("parse {}: {e}", path.display())))
    }
}

/// Returns `~/.config/diplobot[-dev]/` based on DIPLOBOT_ENV.
///
/// Set DIPLOBOT_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DIPLOBOT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("diplobot-dev")
    } else {
        base_dir.join("diplobot")
    };

    std::fs::create_dir_all(&dir).map_err(|e| CoreError::StoreIo {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
