//! The uniform response envelope returned by every data-access call

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known envelope error codes
pub mod codes {
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const INVALID_RESPONSE: &str = "INVALID_RESPONSE";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

    /// Code for a non-2xx status without a structured error body
    pub fn http(status: u16) -> String {
        format!("HTTP_{}", status)
    }
}

/// Localization lookup used when rendering error messages
pub trait Localize {
    /// Look up a translated string, `None` when the key is unknown
    fn t(&self, key: &str) -> Option<String>;
}

/// Structured error carried by a failed envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Message translated through `errors.<code>`, falling back to the raw message
    pub fn localized_message(&self, localizer: &dyn Localize) -> String {
        localizer
            .t(&format!("errors.{}", self.code))
            .unwrap_or_else(|| self.message.clone())
    }
}

/// Response envelope
///
/// Wire shape: `{ success, data?, error?: { code, message }, timestamp }`.
/// A successful envelope always carries `data` (possibly `null`) and no
/// error; a failed one carries an error and no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default = "Option::default")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope with a payload
    pub fn ok(data: T) -> Self {
        Self::from_option(Some(data))
    }

    /// Successful envelope with a `null` payload
    pub fn empty() -> Self {
        Self::from_option(None)
    }

    /// Successful envelope, `None` serializing as `null`
    pub fn from_option(data: Option<T>) -> Self {
        Self {
            success: true,
            data,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Failed envelope
    pub fn err(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }

    /// Failed envelope built from a code and message
    pub fn failure<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self::err(ApiError::new(code, message))
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Error code of a failed envelope
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }

    /// Transform the payload, passing errors through untouched
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            timestamp: self.timestamp,
        }
    }

    /// Re-type a failed envelope, dropping any payload
    pub fn cast<U>(self) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: None,
            error: self.error,
            timestamp: self.timestamp,
        }
    }

    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self.error {
            Some(error) if !self.success => Err(error),
            _ => Ok(self.data),
        }
    }
}

impl<T> ApiResponse<Option<T>> {
    /// Collapse a nullable payload into the envelope's own `data`
    pub fn flatten(self) -> ApiResponse<T> {
        ApiResponse {
            success: self.success,
            data: self.data.flatten(),
            error: self.error,
            timestamp: self.timestamp,
        }
    }
}

impl<T> From<ApiError> for ApiResponse<T> {
    fn from(error: ApiError) -> Self {
        Self::err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    struct Table(HashMap<&'static str, &'static str>);

    impl Localize for Table {
        fn t(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|s| s.to_string())
        }
    }

    #[test]
    fn test_empty_success_serializes_null_data() {
        let response: ApiResponse<u32> = ApiResponse::empty();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(true));
        assert!(value.get("data").is_some());
        assert!(value["data"].is_null());
        assert!(value.get("error").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_failure_carries_error_only() {
        let response: ApiResponse<u32> = ApiResponse::failure("TIMEOUT", "Request timed out");
        assert!(!response.is_success());
        assert_eq!(response.error_code(), Some("TIMEOUT"));
        assert!(response.data.is_none());
        assert!(response.into_result().is_err());
    }

    #[test]
    fn test_map_keeps_error_branch() {
        let failed: ApiResponse<u32> = ApiResponse::failure("HTTP_500", "boom");
        let mapped = failed.map(|n| n.to_string());
        assert_eq!(mapped.error_code(), Some("HTTP_500"));

        let ok = ApiResponse::ok(2).map(|n| n * 21);
        assert_eq!(ok.data, Some(42));
    }

    #[test]
    fn test_deserialize_backend_envelope_without_timestamp() {
        let response: ApiResponse<Vec<String>> =
            serde_json::from_value(json!({ "success": true, "data": ["a"] })).unwrap();
        assert!(response.success);
        assert_eq!(response.data, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_localized_message_falls_back() {
        let table = Table(HashMap::from([("errors.TIMEOUT", "Zeitüberschreitung")]));
        let timeout = ApiError::new("TIMEOUT", "Request timed out");
        let other = ApiError::new("HTTP_418", "Request failed with status 418");
        assert_eq!(timeout.localized_message(&table), "Zeitüberschreitung");
        assert_eq!(other.localized_message(&table), "Request failed with status 418");
    }
}
