//! Blog posts

mod types;

use tunematch_gateway::ApiResponse;

use crate::backend::{find_by_id, Backend};
use crate::fixtures;

pub use types::*;

const BLOG_PATH: &str = "/api/v1/blog";

#[derive(Debug, Clone)]
pub struct BlogApi {
    backend: Backend,
}

impl BlogApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn get_blog_posts(&self) -> ApiResponse<Vec<BlogPost>> {
        if self.backend.is_mock() {
            return ApiResponse::ok(fixtures::blog_posts());
        }
        self.backend.fetch_list(BLOG_PATH, normalize_blog_post).await
    }

    pub async fn get_blog_post_by_id(&self, id: &str) -> ApiResponse<BlogPost> {
        if self.backend.is_mock() {
            return ApiResponse::from_option(find_by_id(fixtures::blog_posts(), id, |p| &p.id));
        }
        self.backend
            .fetch_record(BLOG_PATH, id, normalize_blog_post)
            .await
    }
}
