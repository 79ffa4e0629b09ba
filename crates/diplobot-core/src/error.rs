//! Core error types for diplobot-core.
//!
//! One thiserror enum covering the adapter, dispatch, and persistence
//! failure modes. Nothing here is retried; every variant surfaces to the
//! CLI as a terminal failure of that run.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for diplobot-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The board page could not be fetched.
    #[error("game page unavailable: {0}")]
    SourceUnavailable(#[source] reqwest::Error),

    /// The board page was fetched but the deadline could not be read from it.
    #[error("malformed game page: {0}")]
    MalformedSource(String),

    /// Relay credentials are not present in the environment.
    #[error("SMTP credentials missing: set {address_var} and {secret_var}")]
    CredentialsMissing {
        address_var: &'static str,
        secret_var: &'static str,
    },

    /// The relay accepted the connection but delivery failed.
    #[error("reminder delivery failed: {0}")]
    DeliveryFailed(String),

    /// The last-reminder record could not be read or written.
    #[error("last-reminder store error at {path}: {message}")]
    StoreIo { path: PathBuf, message: String },

    /// Configuration file failed to load or parse.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for CoreError.
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
