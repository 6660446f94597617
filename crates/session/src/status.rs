//! Session classification from the stored access token

use chrono::{DateTime, Utc};
use log::{debug, warn};
use tunematch_gateway::Credentials;

use crate::claims::decode_claims;

/// How close to expiry a token may get before it is refreshed in the background
pub const NEAR_EXPIRY_WINDOW_SECS: i64 = 5 * 60;

/// State of the locally stored session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Valid,
    NearExpiry,
    Expired,
    Missing,
}

impl SessionStatus {
    /// Whether the status lets a navigation through without a refresh
    pub fn is_usable(&self) -> bool {
        matches!(self, SessionStatus::Valid | SessionStatus::NearExpiry)
    }
}

/// Classify a token at `now` with no side effects.
///
/// Tokens that cannot be decoded count as missing. A token without an
/// `exp` claim never expires from the client's point of view.
pub fn classify(token: Option<&str>, now: DateTime<Utc>) -> SessionStatus {
    let Some(token) = token else {
        return SessionStatus::Missing;
    };

    let claims = match decode_claims(token) {
        Ok(claims) => claims,
        Err(err) => {
            debug!("Stored access token is not decodable: {}", err);
            return SessionStatus::Missing;
        }
    };

    let Some(exp) = claims.exp else {
        return SessionStatus::Valid;
    };

    let remaining = exp - now.timestamp();
    if remaining <= 0 {
        SessionStatus::Expired
    } else if remaining <= NEAR_EXPIRY_WINDOW_SECS {
        SessionStatus::NearExpiry
    } else {
        SessionStatus::Valid
    }
}

/// Classify the stored access token, clearing it when it is expired or unreadable
pub fn check_session(credentials: &Credentials, now: DateTime<Utc>) -> SessionStatus {
    let token = credentials.access_token();
    let status = classify(token.as_deref(), now);

    if token.is_some() && matches!(status, SessionStatus::Expired | SessionStatus::Missing) {
        debug!("Clearing stored access token ({:?})", status);
        if let Err(err) = credentials.clear_access_token() {
            warn!("Failed to clear stored access token: {}", err);
        }
    }

    status
}
