//! Likes and matches
//!
//! Backend records name users by id. After the primary call the provider
//! loads the user collection and resolves every id against it.

mod types;

use log::{debug, warn};
use serde::Serialize;
use tunematch_gateway::ApiResponse;
use uuid::Uuid;

use crate::backend::Backend;
use crate::fixtures;
use crate::users::{normalize_user, User, UserDto};

pub use types::*;

const MATCHING_PATH: &str = "/api/v1/matching";
const USERS_PATH: &str = "/api/v1/users";

#[derive(Debug, Serialize)]
struct LikeRequest<'a> {
    target_user_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct MatchingApi {
    backend: Backend,
}

impl MatchingApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Like `user_id`. The result reports whether the like completed a match.
    pub async fn send_like(&self, user_id: &str) -> ApiResponse<LikeResult> {
        if self.backend.is_mock() {
            let is_match = fixtures::likes().iter().any(|like| {
                like.from_user_id.as_deref() == Some(user_id)
                    && like.to_user_id.as_deref() == Some(fixtures::CURRENT_USER_ID)
            });
            return ApiResponse::ok(LikeResult {
                like_id: Some(Uuid::new_v4().to_string()),
                target_user_id: user_id.to_string(),
                is_match,
                match_id: is_match.then(|| Uuid::new_v4().to_string()),
            });
        }

        let body = LikeRequest {
            target_user_id: user_id,
        };
        self.backend
            .gateway()
            .post::<Option<LikeResultDto>, _>(&format!("{}/likes", MATCHING_PATH), &body)
            .await
            .map(|dto| normalize_like_result(dto.unwrap_or_default(), user_id))
    }

    pub async fn get_matches(&self) -> ApiResponse<Vec<Match>> {
        if self.backend.is_mock() {
            let directory = UserDirectory::new(fixtures::users());
            let matches = fixtures::matches()
                .into_iter()
                .map(|dto| enrich_match(dto, &directory))
                .collect();
            return ApiResponse::ok(matches);
        }

        let response = self
            .backend
            .gateway()
            .get::<Vec<MatchDto>>(&format!("{}/matches", MATCHING_PATH))
            .await;
        if !response.is_success() {
            return response.cast();
        }

        let directory = self.user_directory().await;
        response.map(|records| {
            records
                .into_iter()
                .map(|dto| enrich_match(dto, &directory))
                .collect()
        })
    }

    /// Likes sent by the signed-in user, resolved to the liked profiles
    pub async fn get_sent_likes(&self) -> ApiResponse<Vec<Like>> {
        self.get_likes(LikeDirection::Sent).await
    }

    /// Likes received by the signed-in user, resolved to the likers
    pub async fn get_received_likes(&self) -> ApiResponse<Vec<Like>> {
        self.get_likes(LikeDirection::Received).await
    }

    async fn get_likes(&self, direction: LikeDirection) -> ApiResponse<Vec<Like>> {
        if self.backend.is_mock() {
            let directory = UserDirectory::new(fixtures::users());
            let likes = fixtures::likes()
                .into_iter()
                .filter(|like| {
                    let own = match direction {
                        LikeDirection::Sent => &like.from_user_id,
                        LikeDirection::Received => &like.to_user_id,
                    };
                    own.as_deref() == Some(fixtures::CURRENT_USER_ID)
                })
                .map(|dto| enrich_like(dto, direction, &directory))
                .collect();
            return ApiResponse::ok(likes);
        }

        let response = self
            .backend
            .gateway()
            .get::<Vec<LikeDto>>(&format!("{}/likes/{}", MATCHING_PATH, direction.as_str()))
            .await;
        if !response.is_success() {
            return response.cast();
        }

        let directory = self.user_directory().await;
        response.map(|records| {
            records
                .into_iter()
                .map(|dto| enrich_like(dto, direction, &directory))
                .collect()
        })
    }

    /// Secondary fetch of the user collection; failures leave every id unresolved
    async fn user_directory(&self) -> UserDirectory {
        let response = self.backend.gateway().get::<Vec<UserDto>>(USERS_PATH).await;
        match response.into_result() {
            Ok(users) => {
                let users: Vec<User> = users
                    .unwrap_or_default()
                    .into_iter()
                    .map(normalize_user)
                    .collect();
                debug!("Resolving matching records against {} users", users.len());
                UserDirectory::new(users)
            }
            Err(err) => {
                warn!(
                    "User lookup for matching failed ({}): {}; using placeholders",
                    err.code, err.message
                );
                UserDirectory::empty()
            }
        }
    }
}
