//! HTTP backend abstraction for the Met collection API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Each request is a single attempt: a failure is terminal
//! for that call and surfaces again only when the user re-triggers it.

use crate::error::{MetError, MetResult};
use crate::models::MetConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the
/// `CatalogPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> MetResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &MetConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

/// Try to extract an object id from an API path.
fn extract_object_id_from_path(path: &str) -> Option<u64> {
    let (_, rest) = path.rsplit_once("/objects/")?;
    rest.parse().ok()
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> MetResult<T> {
        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();

        if !status.is_success() {
            // 404 on the objects endpoint means an invalid or retired id
            if status.as_u16() == 404 {
                if let Some(object_id) = extract_object_id_from_path(url.path()) {
                    return Err(MetError::ObjectNotFound { object_id });
                }
            }

            return Err(MetError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A fake HTTP backend that returns canned responses and counts every
    /// request it receives, so tests can assert on memoization.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Mutex<HashMap<String, serde_json::Value>>,
        failing: Mutex<Vec<String>>,
        requests: AtomicUsize,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), json);
            self
        }

        /// Make URLs matching a pattern fail with a server error.
        pub fn with_error(self, url_contains: &str) -> Self {
            self.failing.lock().unwrap().push(url_contains.to_string());
            self
        }

        /// Number of requests issued so far.
        pub fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }

        fn find_response(&self, url: &str) -> Option<serde_json::Value> {
            // Most specific (longest) matching pattern wins
            let responses = self.responses.lock().unwrap();
            responses
                .iter()
                .filter(|(pattern, _)| url.contains(pattern.as_str()))
                .max_by_key(|(pattern, _)| pattern.len())
                .map(|(_, response)| response.clone())
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> MetResult<T> {
            self.requests.fetch_add(1, Ordering::SeqCst);

            let failing = self.failing.lock().unwrap().clone();
            if failing.iter().any(|pattern| url.as_str().contains(pattern)) {
                return Err(MetError::ApiRequestFailed {
                    status: 500,
                    url: url.to_string(),
                });
            }

            let response =
                self.find_response(url.as_str())
                    .ok_or_else(|| MetError::ApiRequestFailed {
                        status: 404,
                        url: url.to_string(),
                    })?;

            serde_json::from_value(response).map_err(Into::into)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeBackend;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_object_id_from_path() {
        assert_eq!(
            extract_object_id_from_path("/public/collection/v1/objects/436535"),
            Some(436_535)
        );
        assert_eq!(extract_object_id_from_path("/public/collection/v1/search"), None);
        assert_eq!(
            extract_object_id_from_path("/public/collection/v1/objects/not-a-number"),
            None
        );
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let config = MetConfig::default();
        let _backend = ReqwestBackend::new(&config);
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend =
            FakeBackend::new().with_response("departments", json!({"departments": []}));

        let url = Url::parse("https://example.test/v1/departments").unwrap();
        let result: serde_json::Value = backend.get_json(&url).await.unwrap();

        assert_eq!(result["departments"], json!([]));
        assert_eq!(backend.request_count(), 1);
    }

    #[tokio::test]
    async fn test_fake_backend_404_for_unknown_url() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://example.test/unknown").unwrap();

        let result: MetResult<serde_json::Value> = backend.get_json(&url).await;
        assert!(matches!(
            result,
            Err(MetError::ApiRequestFailed { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_fake_backend_injected_error() {
        let backend = FakeBackend::new()
            .with_response("search", json!({"objectIDs": [1]}))
            .with_error("search");

        let url = Url::parse("https://example.test/v1/search?q=cat").unwrap();
        let result: MetResult<serde_json::Value> = backend.get_json(&url).await;

        assert!(matches!(
            result,
            Err(MetError::ApiRequestFailed { status: 500, .. })
        ));
        assert_eq!(backend.request_count(), 1);
    }
}
