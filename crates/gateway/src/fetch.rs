//! HTTP request builder used by the gateway

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::envelope::codes;
use crate::error::{GatewayError, Result};

/// Helper for building and executing a single JSON request
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: Url,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder with the shared JSON headers
    pub fn new(client: &'a Client, url: Url, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            client,
            url,
            method,
            headers,
            body: None,
            timeout: None,
        }
    }

    /// Add a header to the request, ignoring names or values that are not valid HTTP
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let json = serde_json::to_vec(body)
            .map_err(|e| GatewayError::InvalidRequest(format!("unserializable body: {}", e)))?;
        self.body = Some(json);
        Ok(self)
    }

    /// Abort the whole exchange (connect, send, body read) after `limit`
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Execute the request and return the unwrapped JSON payload
    pub async fn execute(&self) -> Result<Value> {
        let mut req = self
            .client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers.clone());

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }
        if let Some(limit) = self.timeout {
            req = req.timeout(limit);
        }

        let exchange = async {
            let response = req.send().await?;
            let status = response.status();
            let text = response.text().await?;
            Ok::<_, GatewayError>((status, text))
        };

        let (status, text) = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| GatewayError::Timeout(limit))??,
            None => exchange.await?,
        };

        if !status.is_success() {
            return Err(error_from_body(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        let value: Value = serde_json::from_str(&text).map_err(GatewayError::InvalidResponse)?;
        unwrap_envelope(value)
    }
}

/// Pull the payload out of a backend envelope, or pass a bare body through
fn unwrap_envelope(value: Value) -> Result<Value> {
    let mut object = match value {
        Value::Object(object) if matches!(object.get("success"), Some(Value::Bool(_))) => object,
        other => return Ok(other),
    };

    if let Some(Value::Bool(true)) = object.get("success") {
        return Ok(object.remove("data").unwrap_or(Value::Null));
    }

    Err(structured_error(object.get("error")).unwrap_or_else(|| {
        GatewayError::api(codes::UNKNOWN_ERROR, "Request was not successful")
    }))
}

/// Build the error for a non-2xx response
fn error_from_body(status: StatusCode, text: &str) -> GatewayError {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|body| structured_error(body.get("error")))
        .unwrap_or_else(|| GatewayError::Status {
            status: status.as_u16(),
            body: text.to_string(),
        })
}

/// Read `{ code, message }` out of an error field
fn structured_error(error: Option<&Value>) -> Option<GatewayError> {
    let error = error?.as_object()?;
    let code = error.get("code")?.as_str()?;
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(code);
    Some(GatewayError::api(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope_success() {
        let value = unwrap_envelope(json!({ "success": true, "data": [1, 2] })).unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_unwrap_envelope_bare_body() {
        let value = unwrap_envelope(json!({ "id": "7", "success_rate": 3 })).unwrap();
        assert_eq!(value["id"], json!("7"));
    }

    #[test]
    fn test_unwrap_envelope_declared_error() {
        let err = unwrap_envelope(json!({
            "success": false,
            "error": { "code": "INVALID_CREDENTIALS", "message": "Wrong password" }
        }))
        .unwrap_err();
        assert_eq!(err.code(), "INVALID_CREDENTIALS");
        assert_eq!(err.to_string(), "Wrong password");
    }

    #[test]
    fn test_error_from_body_falls_back_to_status() {
        let err = error_from_body(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.code(), "HTTP_502");

        let err = error_from_body(
            StatusCode::CONFLICT,
            r#"{"error":{"code":"EMAIL_ALREADY_EXISTS"}}"#,
        );
        assert_eq!(err.code(), "EMAIL_ALREADY_EXISTS");
        assert_eq!(err.to_string(), "EMAIL_ALREADY_EXISTS");
    }
}
