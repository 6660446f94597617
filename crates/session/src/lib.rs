//! TuneMatch session guard
//!
//! Classifies the stored access token by its `exp` claim and decides
//! whether a protected navigation may proceed, refreshing the token in
//! the background or inline as needed.

pub mod claims;
pub mod guard;
pub mod refresh;
pub mod status;

use thiserror::Error;
use tunematch_gateway::{ApiError, StoreError};

pub use claims::{decode_claims, AccessClaims};
pub use guard::{Access, Navigator, Redirect, SessionGuard, DEFAULT_ENTRY_POINT};
pub use refresh::{refresh_and_store, RefreshState, RefreshTask, TokenPair, TokenRefresher};
pub use status::{check_session, classify, SessionStatus, NEAR_EXPIRY_WINDOW_SECS};

/// Errors raised while checking or refreshing a session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Refresh rejected ({}): {}", .0.code, .0.message)]
    Refresh(ApiError),

    #[error("Credential store error: {0}")]
    Store(#[from] StoreError),

    #[error("Missing refresh token")]
    MissingRefreshToken,
}

impl From<ApiError> for SessionError {
    fn from(error: ApiError) -> Self {
        SessionError::Refresh(error)
    }
}
