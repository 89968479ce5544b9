//! `CatalogPort` implementation for `MetClient`.
//!
//! This module implements the core-owned `CatalogPort` trait for
//! `MetClient`, mapping internal errors to the port's domain errors at the
//! boundary.

use artex_core::{
    CatalogError, CatalogPort, CatalogResult, Department, ObjectDetail, ObjectId, SearchFilter,
};
use async_trait::async_trait;

use crate::client::MetClient;
use crate::error::MetError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `MetError` to core `CatalogError`.
fn map_error(err: MetError) -> CatalogError {
    match err {
        MetError::ApiRequestFailed { status, url } => {
            if status == 429 {
                CatalogError::RateLimited
            } else {
                CatalogError::Network {
                    message: format!("API request failed with status {status}: {url}"),
                }
            }
        }
        MetError::ObjectNotFound { object_id } => CatalogError::InvalidResponse {
            message: format!("object {object_id} not found"),
        },
        MetError::InvalidResponse { message } => CatalogError::InvalidResponse { message },
        MetError::Network(e) => CatalogError::Network {
            message: e.to_string(),
        },
        MetError::InvalidUrl(e) => CatalogError::Configuration {
            message: e.to_string(),
        },
        MetError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> CatalogPort for MetClient<B> {
    async fn departments(&self) -> CatalogResult<Vec<Department>> {
        self.fetch_departments().await.map_err(map_error)
    }

    async fn highlight_ids(&self) -> CatalogResult<Vec<ObjectId>> {
        self.fetch_highlight_ids().await.map_err(map_error)
    }

    async fn search(&self, filter: &SearchFilter) -> CatalogResult<Vec<ObjectId>> {
        self.fetch_search(filter).await.map_err(map_error)
    }

    async fn object_detail(&self, id: ObjectId) -> Option<ObjectDetail> {
        self.fetch_detail(id).await
    }

    fn clear_detail_cache(&self) {
        self.cache.clear_details();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use crate::models::MetConfig;
    use serde_json::json;

    #[test]
    fn test_map_error_rate_limited() {
        let err = MetError::ApiRequestFailed {
            status: 429,
            url: "https://example.test/search".to_string(),
        };
        assert!(matches!(map_error(err), CatalogError::RateLimited));
    }

    #[test]
    fn test_map_error_server_failure_is_network() {
        let err = MetError::ApiRequestFailed {
            status: 503,
            url: "https://example.test/search".to_string(),
        };
        match map_error(err) {
            CatalogError::Network { message } => {
                assert!(message.contains("503"));
            }
            other => panic!("expected Network, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_json_parse_is_invalid_response() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            map_error(MetError::from(err)),
            CatalogError::InvalidResponse { .. }
        ));
    }

    #[tokio::test]
    async fn test_port_search_and_detail_round_trip() {
        let backend = FakeBackend::new()
            .with_response("search", json!({"objectIDs": [1]}))
            .with_response("objects/1", json!({"objectID": 1, "title": "Helmet"}));
        let client = MetClient::with_backend(MetConfig::default(), backend);
        let port: &dyn CatalogPort = &client;

        let ids = port
            .search(&SearchFilter::new().with_query("helmet"))
            .await
            .unwrap();
        assert_eq!(ids, vec![1]);

        let detail = port.object_detail(1).await.unwrap();
        assert_eq!(detail.title.as_deref(), Some("Helmet"));

        // A missing object degrades silently to None through the port
        assert!(port.object_detail(2).await.is_none());
    }

    #[tokio::test]
    async fn test_port_clear_detail_cache_resets_memoization() {
        let backend = FakeBackend::new()
            .with_response("objects/1", json!({"objectID": 1, "title": "Helmet"}));
        let client = MetClient::with_backend(MetConfig::default(), backend);

        assert!(client.object_detail(1).await.is_some());
        assert!(client.object_detail(1).await.is_some());
        assert_eq!(client.backend.request_count(), 1);

        client.clear_detail_cache();

        assert!(client.object_detail(1).await.is_some());
        assert_eq!(client.backend.request_count(), 2);
    }
}
