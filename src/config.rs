//! Configuration for the TuneMatch client
//!
//! Resolved once at startup and immutable afterwards. The data mode in
//! particular cannot be toggled on a running client.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Selects the data mode (`mock` or `live`)
pub const MODE_VAR: &str = "TUNEMATCH_API_MODE";

/// Base URL of the live backend
pub const API_URL_VAR: &str = "TUNEMATCH_API_URL";

/// Request timeout in whole seconds
pub const TIMEOUT_VAR: &str = "TUNEMATCH_REQUEST_TIMEOUT_SECS";

/// Path of the JSON file holding the session credentials
pub const STORAGE_PATH_VAR: &str = "TUNEMATCH_STORAGE_PATH";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Which backing every data provider uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    /// In-memory fixtures, no network
    #[default]
    Mock,
    /// The HTTP backend
    Live,
}

impl DataMode {
    pub fn is_mock(&self) -> bool {
        *self == DataMode::Mock
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataMode::Mock => "mock",
            DataMode::Live => "live",
        }
    }
}

impl FromStr for DataMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(DataMode::Mock),
            "live" => Ok(DataMode::Live),
            other => Err(Error::config(format!(
                "{} must be `mock` or `live`, got `{}`",
                MODE_VAR, other
            ))),
        }
    }
}

impl fmt::Display for DataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Mock or live backing
    pub mode: DataMode,

    /// Base URL of the live backend
    pub api_base_url: Url,

    /// The request timeout
    pub request_timeout: Duration,

    /// Where credentials are persisted; in memory when `None`
    pub storage_path: Option<PathBuf>,
}

impl Config {
    /// Create a configuration, validating the base URL
    pub fn new(mode: DataMode, api_base_url: &str) -> Result<Self> {
        Ok(Self {
            mode,
            api_base_url: Url::parse(api_base_url)?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            storage_path: None,
        })
    }

    /// Mock-backed configuration with the default base URL
    pub fn mock() -> Result<Self> {
        Self::new(DataMode::Mock, DEFAULT_API_URL)
    }

    /// Resolve the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through `lookup`; unset variables take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match read(MODE_VAR) {
            Some(raw) => raw.parse()?,
            None => DataMode::default(),
        };

        let mut config = Self::new(mode, read(API_URL_VAR).as_deref().unwrap_or(DEFAULT_API_URL))?;

        if let Some(raw) = read(TIMEOUT_VAR) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::config(format!("{} must be a whole number of seconds", TIMEOUT_VAR))
            })?;
            if secs == 0 {
                return Err(Error::config(format!("{} must be positive", TIMEOUT_VAR)));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        config.storage_path = read(STORAGE_PATH_VAR).map(PathBuf::from);
        Ok(config)
    }

    /// Set the data mode
    pub fn with_mode(mut self, mode: DataMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the backend base URL
    pub fn with_api_base_url(mut self, url: Url) -> Self {
        self.api_base_url = url;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Persist credentials at `path`
    pub fn with_storage_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.mode, DataMode::Mock);
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn test_live_mode_from_lookup() {
        let config = Config::from_lookup(lookup(&[
            (MODE_VAR, " LIVE "),
            (API_URL_VAR, "https://api.tunematch.app"),
            (TIMEOUT_VAR, "10"),
            (STORAGE_PATH_VAR, "/tmp/tunematch.json"),
        ]))
        .unwrap();

        assert_eq!(config.mode, DataMode::Live);
        assert_eq!(config.api_base_url.host_str(), Some("api.tunematch.app"));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/tunematch.json")));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[(MODE_VAR, "staging")])).is_err());
        assert!(Config::from_lookup(lookup(&[(API_URL_VAR, "not a url")])).is_err());
        assert!(Config::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).is_err());
    }
}
