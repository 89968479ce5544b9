//! Met collection client for searching objects and fetching records.
//!
//! This module provides the main client for the collection API. All
//! operations are memoized in a [`ResponseCache`] shared across every
//! session served by the process.

mod objects;
mod search;

use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::config::MetClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::MetConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Met collection client using the reqwest HTTP backend.
pub type DefaultMetClient = MetClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Met collection API.
///
/// Generic over an HTTP backend for testability. Use `DefaultMetClient` in
/// production code; external callers interact with it through the
/// `CatalogPort` trait from `artex-core`.
pub struct MetClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: MetConfig,
    pub(crate) cache: Arc<ResponseCache>,
}

impl DefaultMetClient {
    /// Create a new client with the given configuration and its own cache.
    pub fn new(config: &MetClientConfig) -> Self {
        Self::with_cache(config, Arc::new(ResponseCache::new()))
    }

    /// Create a new client over a shared response cache.
    pub fn with_cache(config: &MetClientConfig, cache: Arc<ResponseCache>) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
            cache,
        }
    }

    fn to_internal_config(config: &MetClientConfig) -> MetConfig {
        MetConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://collectionapi.metmuseum.org/public/collection/v1")
                    .expect("default URL is valid")
            }),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }
}

impl<B: HttpBackend> MetClient<B> {
    /// Create a client with a custom backend and a fresh cache.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) fn with_backend(config: MetConfig, backend: B) -> Self {
        Self {
            backend,
            config,
            cache: Arc::new(ResponseCache::new()),
        }
    }
}
