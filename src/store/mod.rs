//! Merch store

mod types;

use tunematch_gateway::ApiResponse;

use crate::backend::{find_by_id, Backend};
use crate::fixtures;

pub use types::*;

const STORE_PATH: &str = "/api/v1/store";

#[derive(Debug, Clone)]
pub struct StoreApi {
    backend: Backend,
}

impl StoreApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn get_store_items(&self) -> ApiResponse<Vec<StoreItem>> {
        if self.backend.is_mock() {
            return ApiResponse::ok(fixtures::store_items());
        }
        self.backend.fetch_list(STORE_PATH, normalize_store_item).await
    }

    pub async fn get_store_item_by_id(&self, id: &str) -> ApiResponse<StoreItem> {
        if self.backend.is_mock() {
            return ApiResponse::from_option(find_by_id(fixtures::store_items(), id, |i| &i.id));
        }
        self.backend
            .fetch_record(STORE_PATH, id, normalize_store_item)
            .await
    }
}
