//! Types for sign-in, registration and token refresh

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::users::{normalize_user, User, UserDto};

/// Email and password sign-in
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New account details
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl RegisterRequest {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            age: None,
            gender: None,
            location: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// A signed-in user with the tokens issued for them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Lifetime of the access token in seconds
    pub expires_in: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthSession {
    /// Whether the access token has run out, when the lifetime is known
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |at| at <= now)
    }
}

/// Session payload of the login and register endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSessionDto {
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default, alias = "accessToken", alias = "token")]
    pub access_token: Option<String>,
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(default, alias = "tokenType")]
    pub token_type: Option<String>,
    #[serde(default, alias = "expiresIn")]
    pub expires_in: Option<i64>,
}

/// Payload of the refresh endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshDto {
    #[serde(default, alias = "accessToken", alias = "token")]
    pub access_token: Option<String>,
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Build a session from the backend payload.
///
/// `None` when the payload lacks a user or an access token.
pub fn normalize_auth_session(dto: AuthSessionDto, now: DateTime<Utc>) -> Option<AuthSession> {
    let user = normalize_user(dto.user?);
    let access_token = dto.access_token.filter(|t| !t.is_empty())?;
    let expires_at = dto.expires_in.map(|secs| now + Duration::seconds(secs));

    Some(AuthSession {
        user,
        access_token,
        refresh_token: dto.refresh_token.filter(|t| !t.is_empty()),
        token_type: dto.token_type.unwrap_or_else(|| "bearer".to_string()),
        expires_in: dto.expires_in,
        expires_at,
    })
}
