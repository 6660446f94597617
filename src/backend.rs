//! Shared plumbing of the domain data providers

use serde::de::DeserializeOwned;
use tunematch_gateway::{path_segment, ApiError, ApiResponse, Gateway};

use crate::config::DataMode;

/// Mode flag plus gateway, handed to every provider at construction
#[derive(Debug, Clone)]
pub(crate) struct Backend {
    mode: DataMode,
    gateway: Gateway,
}

impl Backend {
    pub(crate) fn new(mode: DataMode, gateway: Gateway) -> Self {
        Self { mode, gateway }
    }

    pub(crate) fn is_mock(&self) -> bool {
        self.mode == DataMode::Mock
    }

    pub(crate) fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// GET a collection and normalize every element
    pub(crate) async fn fetch_list<D, V, F>(&self, path: &str, normalize: F) -> ApiResponse<Vec<V>>
    where
        D: DeserializeOwned,
        F: Fn(D) -> V,
    {
        self.gateway
            .get::<Vec<D>>(path)
            .await
            .map(|items| items.into_iter().map(normalize).collect())
    }

    /// GET a single record and normalize it; a `null` payload stays `None`
    pub(crate) async fn fetch_one<D, V, F>(&self, path: &str, normalize: F) -> ApiResponse<V>
    where
        D: DeserializeOwned,
        F: FnOnce(D) -> V,
    {
        self.gateway
            .get::<Option<D>>(path)
            .await
            .flatten()
            .map(normalize)
    }

    /// GET `collection/<id>` and normalize it
    pub(crate) async fn fetch_record<D, V, F>(
        &self,
        collection: &str,
        id: &str,
        normalize: F,
    ) -> ApiResponse<V>
    where
        D: DeserializeOwned,
        F: FnOnce(D) -> V,
    {
        match record_path(collection, id, "") {
            Ok(path) => self.fetch_one(&path, normalize).await,
            Err(err) => ApiResponse::err(err),
        }
    }
}

/// `collection/<id><suffix>` with `id` encoded as a single path segment
pub(crate) fn record_path(collection: &str, id: &str, suffix: &str) -> Result<String, ApiError> {
    let segment = path_segment(id)?;
    Ok(format!("{}/{}{}", collection, segment, suffix))
}

/// Look up a fixture record by id
pub(crate) fn find_by_id<T, F>(items: Vec<T>, id: &str, key: F) -> Option<T>
where
    F: Fn(&T) -> &str,
{
    items.into_iter().find(|item| key(item) == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunematch_gateway::codes;

    #[test]
    fn test_record_path_keeps_id_in_one_segment() {
        assert_eq!(
            record_path("/api/v1/forum/sections", "a/b?c", "/topics").unwrap(),
            "/api/v1/forum/sections/a%2Fb%3Fc/topics"
        );
        assert_eq!(record_path("/api/v1/users", "12", "").unwrap(), "/api/v1/users/12");
    }

    #[test]
    fn test_record_path_rejects_parent_segment() {
        let err = record_path("/api/v1/events", "..", "").unwrap_err();
        assert_eq!(err.code, codes::INVALID_REQUEST);
    }
}
