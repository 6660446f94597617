//! User profiles

mod types;

use log::debug;
use tunematch_gateway::ApiResponse;

use crate::backend::{find_by_id, record_path, Backend};
use crate::fixtures;

pub use types::*;

const USERS_PATH: &str = "/api/v1/users";

/// Provider for user profiles
#[derive(Debug, Clone)]
pub struct UsersApi {
    backend: Backend,
}

impl UsersApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Every profile the backend returns, private ones included.
    ///
    /// Visibility is applied by [`search_users`](Self::search_users).
    pub async fn get_users(&self) -> ApiResponse<Vec<User>> {
        if self.backend.is_mock() {
            return ApiResponse::ok(fixtures::users());
        }
        self.backend.fetch_list(USERS_PATH, normalize_user).await
    }

    /// A single profile, `data: None` when the id is unknown
    pub async fn get_user_by_id(&self, id: &str) -> ApiResponse<User> {
        if self.backend.is_mock() {
            return ApiResponse::from_option(find_by_id(fixtures::users(), id, |u| &u.id));
        }
        self.backend
            .fetch_record(USERS_PATH, id, normalize_user)
            .await
    }

    /// Update a profile and return the stored result
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ApiResponse<User> {
        if self.backend.is_mock() {
            let user = find_by_id(fixtures::users(), id, |u| &u.id);
            return ApiResponse::from_option(user.map(|u| u.updated(update)));
        }
        let path = match record_path(USERS_PATH, id, "") {
            Ok(path) => path,
            Err(err) => return ApiResponse::err(err),
        };
        self.backend
            .gateway()
            .put::<Option<UserDto>, _>(&path, update)
            .await
            .flatten()
            .map(normalize_user)
    }

    /// Profiles matching `filters`.
    ///
    /// Always fetched through [`get_users`](Self::get_users) and filtered
    /// locally, in both modes.
    pub async fn search_users(&self, filters: &SearchFilters) -> ApiResponse<Vec<User>> {
        let response = self.get_users().await;
        let response = response.map(|users| {
            users
                .into_iter()
                .filter(|user| filters.matches(user))
                .collect::<Vec<_>>()
        });
        if let Some(found) = &response.data {
            debug!("Profile search matched {} users", found.len());
        }
        response
    }
}
