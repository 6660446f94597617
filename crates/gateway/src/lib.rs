//! TuneMatch request gateway
//!
//! Every outbound call of the TuneMatch client goes through [`Gateway`]:
//! it attaches the stored bearer token and the shared headers, enforces a
//! fixed timeout and folds every outcome into an [`ApiResponse`]. Callers
//! never see an `Err` or a panic from this crate.

pub mod credentials;
pub mod envelope;
pub mod error;
pub mod fetch;

use log::{debug, warn};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub use credentials::{
    CredentialStore, Credentials, FileStore, MemoryStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
pub use envelope::{codes, ApiError, ApiResponse, Localize};
pub use error::{GatewayError, StoreError};
pub use fetch::FetchBuilder;
pub use reqwest::Method as HttpMethod;

/// Sent with every request
pub const CLIENT_INFO: &str = concat!("tunematch/", env!("CARGO_PKG_VERSION"));

/// Single choke-point for outbound HTTP calls
#[derive(Clone)]
pub struct Gateway {
    base_url: Url,
    http_client: Client,
    credentials: Credentials,
    timeout: Duration,
}

impl Gateway {
    /// Default per-call budget
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a gateway for `base_url` reading tokens from `credentials`
    pub fn new(base_url: Url, credentials: Credentials) -> Self {
        Self {
            base_url,
            http_client: Client::new(),
            credentials,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Issue a request and resolve to an envelope
    ///
    /// `path` is relative to the base URL (e.g. `/api/v1/events`). The
    /// payload is deserialized into `T`; a payload that does not fit `T`
    /// is reported as `INVALID_RESPONSE`.
    pub async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match self.send(method.clone(), path, body).await {
            Ok(data) => ApiResponse::ok(data),
            Err(err) => {
                warn!("{} {} failed: {}", method, path, err);
                ApiResponse::err(err.into())
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!("{} {}", method, url);

        let mut fetch = FetchBuilder::new(&self.http_client, url, method)
            .header("X-Client-Info", CLIENT_INFO)
            .timeout(self.timeout);

        if let Some(token) = self.credentials.access_token() {
            fetch = fetch.bearer_auth(&token);
        }
        if let Some(body) = body {
            fetch = fetch.json(body)?;
        }

        let payload = fetch.execute().await?;
        serde_json::from_value(payload).map_err(GatewayError::InvalidResponse)
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }
}

/// Encode `raw` as exactly one path segment.
///
/// Reserved characters are percent-encoded. Empty and dot segments are
/// rejected since URL parsing would collapse them into the parent path.
pub fn path_segment(raw: &str) -> Result<String, GatewayError> {
    match raw {
        "" | "." | ".." => Err(GatewayError::InvalidRequest(format!(
            "{:?} is not a valid path segment",
            raw
        ))),
        _ => Ok(urlencoding::encode(raw).into_owned()),
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let gateway = Gateway::new(
            Url::parse("https://api.example.com/prefix/").unwrap(),
            Credentials::in_memory(),
        );
        let url = gateway.endpoint("/api/v1/events/3").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/prefix/api/v1/events/3");
    }

    #[test]
    fn test_path_segment_escapes_reserved_characters() {
        assert_eq!(path_segment("42").unwrap(), "42");
        assert_eq!(path_segment("a/b?c#d").unwrap(), "a%2Fb%3Fc%23d");
        assert_eq!(path_segment("50% off").unwrap(), "50%25%20off");
    }

    #[test]
    fn test_path_segment_rejects_dot_segments() {
        for raw in ["", ".", ".."] {
            let err = path_segment(raw).unwrap_err();
            assert_eq!(err.code(), codes::INVALID_REQUEST);
        }
    }

    #[test]
    fn test_encoded_segment_is_not_resolved() {
        let gateway = Gateway::new(
            Url::parse("https://api.example.com").unwrap(),
            Credentials::in_memory(),
        );
        let path = format!("/api/v1/events/{}", path_segment("../users").unwrap());
        let url = gateway.endpoint(&path).unwrap();
        assert_eq!(url.path(), "/api/v1/events/..%2Fusers");
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        let gateway = Gateway::new(
            Url::parse("http://localhost:8000").unwrap(),
            Credentials::in_memory(),
        );
        assert_eq!(gateway.timeout(), Duration::from_secs(30));
    }
}
