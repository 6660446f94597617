//! Community forum sections and topics

mod types;

use tunematch_gateway::ApiResponse;

use crate::backend::{record_path, Backend};
use crate::fixtures;

pub use types::*;

const SECTIONS_PATH: &str = "/api/v1/forum/sections";

#[derive(Debug, Clone)]
pub struct ForumApi {
    backend: Backend,
}

impl ForumApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn get_sections(&self) -> ApiResponse<Vec<ForumSection>> {
        if self.backend.is_mock() {
            return ApiResponse::ok(fixtures::forum_sections());
        }
        self.backend.fetch_list(SECTIONS_PATH, normalize_section).await
    }

    /// Topics of one section, pinned first; empty for an unknown section
    pub async fn get_section_topics(&self, section_id: &str) -> ApiResponse<Vec<ForumTopic>> {
        let response = if self.backend.is_mock() {
            let topics: Vec<ForumTopic> = fixtures::forum_topics()
                .into_iter()
                .filter(|t| t.section_id == section_id)
                .collect();
            ApiResponse::ok(topics)
        } else {
            match record_path(SECTIONS_PATH, section_id, "/topics") {
                Ok(path) => self.backend.fetch_list(&path, normalize_topic).await,
                Err(err) => ApiResponse::err(err),
            }
        };

        response.map(|mut topics: Vec<ForumTopic>| {
            for topic in topics.iter_mut().filter(|t| t.section_id.is_empty()) {
                topic.section_id = section_id.to_string();
            }
            sort_topics(&mut topics);
            topics
        })
    }
}
