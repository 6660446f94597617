//! Sign-in, registration and token refresh
//!
//! Live calls store the issued tokens in the shared credential store so
//! the gateway attaches them to every later request.

mod types;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use tunematch_gateway::{codes, ApiError, ApiResponse, Credentials};
use tunematch_session::{SessionError, TokenPair, TokenRefresher};
use uuid::Uuid;

use crate::backend::{find_by_id, Backend};
use crate::fixtures;
use crate::users::User;

pub use types::*;
use types::RefreshRequest;

const AUTH_PATH: &str = "/api/v1/auth";

/// Error codes produced by the auth provider itself
pub mod error_codes {
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const EMAIL_ALREADY_EXISTS: &str = "EMAIL_ALREADY_EXISTS";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
}

const MOCK_ACCESS_PREFIX: &str = "mock-access-";
const MOCK_REFRESH_PREFIX: &str = "mock-refresh-";
const MOCK_EXPIRES_IN: i64 = 3600;

/// Provider for authentication
#[derive(Debug, Clone)]
pub struct AuthApi {
    backend: Backend,
}

impl AuthApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    fn credentials(&self) -> &Credentials {
        self.backend.gateway().credentials()
    }

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> ApiResponse<AuthSession> {
        let response = if self.backend.is_mock() {
            self.mock_login(email, password)
        } else {
            let body = LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            };
            self.post_session(&format!("{}/login", AUTH_PATH), &body).await
        };
        self.store_session(response)
    }

    /// Create an account and sign in as it
    pub async fn register(&self, request: &RegisterRequest) -> ApiResponse<AuthSession> {
        let response = if self.backend.is_mock() {
            self.mock_register(request)
        } else {
            self.post_session(&format!("{}/register", AUTH_PATH), request).await
        };
        self.store_session(response)
    }

    /// Exchange a refresh token for a new token pair and store it
    pub async fn refresh(&self, refresh_token: &str) -> ApiResponse<TokenPair> {
        let response = self.request_refresh(refresh_token).await;
        if let Some(pair) = &response.data {
            if let Err(err) = self
                .credentials()
                .set_tokens(&pair.access_token, pair.refresh_token.as_deref())
            {
                warn!("Failed to store refreshed tokens: {}", err);
            }
        }
        response
    }

    /// The signed-in user
    pub async fn me(&self) -> ApiResponse<User> {
        if !self.backend.is_mock() {
            return self
                .backend
                .fetch_one(&format!("{}/me", AUTH_PATH), crate::users::normalize_user)
                .await;
        }

        let user_id = self
            .credentials()
            .access_token()
            .and_then(|token| token.strip_prefix(MOCK_ACCESS_PREFIX).map(str::to_string));
        match user_id {
            Some(id) => ApiResponse::from_option(find_by_id(fixtures::users(), &id, |u| &u.id)),
            None => ApiResponse::failure(error_codes::UNAUTHORIZED, "Not signed in"),
        }
    }

    /// Forget the stored tokens. Local only.
    pub async fn logout(&self) -> ApiResponse<()> {
        match self.credentials().clear() {
            Ok(()) => {
                info!("Signed out");
                ApiResponse::ok(())
            }
            Err(err) => ApiResponse::failure(codes::UNKNOWN_ERROR, err.to_string()),
        }
    }

    async fn post_session<B>(&self, path: &str, body: &B) -> ApiResponse<AuthSession>
    where
        B: serde::Serialize + ?Sized,
    {
        let response = self
            .backend
            .gateway()
            .post::<Option<AuthSessionDto>, _>(path, body)
            .await
            .flatten();
        if !response.is_success() {
            return response.cast();
        }
        let now = Utc::now();
        match response.data.and_then(|dto| normalize_auth_session(dto, now)) {
            Some(session) => ApiResponse::ok(session),
            None => ApiResponse::failure(
                codes::INVALID_RESPONSE,
                "Session payload is missing the user or access token",
            ),
        }
    }

    async fn request_refresh(&self, refresh_token: &str) -> ApiResponse<TokenPair> {
        if self.backend.is_mock() {
            return match refresh_token.strip_prefix(MOCK_REFRESH_PREFIX) {
                Some(id) if !id.is_empty() => ApiResponse::ok(mock_token_pair(id)),
                _ => ApiResponse::failure(error_codes::UNAUTHORIZED, "Unknown refresh token"),
            };
        }

        let body = RefreshRequest { refresh_token };
        let response = self
            .backend
            .gateway()
            .post::<Option<RefreshDto>, _>(&format!("{}/refresh", AUTH_PATH), &body)
            .await
            .flatten();
        if !response.is_success() {
            return response.cast();
        }
        let pair = response.data.and_then(|dto| {
            let access_token = dto.access_token.filter(|t| !t.is_empty())?;
            Some(TokenPair {
                access_token,
                refresh_token: dto.refresh_token.filter(|t| !t.is_empty()),
            })
        });
        match pair {
            Some(pair) => ApiResponse::ok(pair),
            None => ApiResponse::failure(
                codes::INVALID_RESPONSE,
                "Refresh payload is missing the access token",
            ),
        }
    }

    fn store_session(&self, response: ApiResponse<AuthSession>) -> ApiResponse<AuthSession> {
        if let Some(session) = &response.data {
            match self
                .credentials()
                .set_tokens(&session.access_token, session.refresh_token.as_deref())
            {
                Ok(()) => info!("Signed in as user {}", session.user.id),
                Err(err) => warn!("Failed to store session tokens: {}", err),
            }
        }
        response
    }

    fn mock_login(&self, email: &str, password: &str) -> ApiResponse<AuthSession> {
        let account = fixtures::accounts()
            .into_iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password);
        let user = account.and_then(|a| find_by_id(fixtures::users(), a.user_id, |u| &u.id));

        match user {
            Some(user) => ApiResponse::ok(mock_session(user)),
            None => {
                debug!("Mock login rejected for {}", email);
                ApiResponse::failure(error_codes::INVALID_CREDENTIALS, "Invalid email or password")
            }
        }
    }

    fn mock_register(&self, request: &RegisterRequest) -> ApiResponse<AuthSession> {
        let email = request.email.trim();
        let taken = fixtures::accounts()
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(email));
        if taken {
            return ApiResponse::failure(
                error_codes::EMAIL_ALREADY_EXISTS,
                "An account with this email already exists",
            );
        }

        let user = crate::users::normalize_user(crate::users::UserDto {
            id: Uuid::new_v4().to_string(),
            name: Some(request.name.clone()),
            email: Some(email.to_string()),
            age: request.age,
            gender: request.gender.clone(),
            location: request.location.clone(),
            ..Default::default()
        });
        ApiResponse::ok(mock_session(user))
    }
}

fn mock_token_pair(user_id: &str) -> TokenPair {
    TokenPair {
        access_token: format!("{}{}", MOCK_ACCESS_PREFIX, user_id),
        refresh_token: Some(format!("{}{}", MOCK_REFRESH_PREFIX, user_id)),
    }
}

fn mock_session(user: User) -> AuthSession {
    let pair = mock_token_pair(&user.id);
    AuthSession {
        user,
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        token_type: "bearer".to_string(),
        expires_in: Some(MOCK_EXPIRES_IN),
        expires_at: Some(Utc::now() + chrono::Duration::seconds(MOCK_EXPIRES_IN)),
    }
}

#[async_trait]
impl TokenRefresher for AuthApi {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError> {
        if refresh_token.is_empty() {
            return Err(SessionError::MissingRefreshToken);
        }
        match self.request_refresh(refresh_token).await.into_result() {
            Ok(Some(pair)) => Ok(pair),
            Ok(None) => Err(SessionError::Refresh(ApiError::new(
                codes::INVALID_RESPONSE,
                "Empty refresh payload",
            ))),
            Err(err) => Err(SessionError::Refresh(err)),
        }
    }
}
