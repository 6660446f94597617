//! Error handling for the TuneMatch client
//!
//! Data-access calls never fail with these; they report through the
//! response envelope. This type covers setting the client up.

use std::fmt;
use thiserror::Error;
use tunematch_gateway::StoreError;

/// Errors raised while building a client
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Credential storage could not be opened
    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
