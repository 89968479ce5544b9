//! CLI bootstrap - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together: the
//! process-wide response cache, the Met client over it, and the explorer
//! service. Command handlers receive the composed context and delegate to it.

use std::sync::Arc;

use anyhow::Result;
use artex_core::{CatalogPort, Explorer};
use artex_met::{DefaultMetClient, MetClientConfig, ResponseCache};
use tracing::debug;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Override for the collection API base URL.
    pub base_url: Option<String>,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The catalog port, for the renderer's per-object detail fetches.
    pub catalog: Arc<dyn CatalogPort>,
    /// The query controller.
    pub explorer: Explorer,
}

/// Wire the catalog client and explorer together.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let mut client_config = MetClientConfig::new();
    if let Some(ref base_url) = config.base_url {
        debug!("using catalog base URL {base_url}");
        client_config = client_config.with_base_url(base_url.clone());
    }

    let cache = Arc::new(ResponseCache::new());
    let catalog: Arc<dyn CatalogPort> =
        Arc::new(DefaultMetClient::with_cache(&client_config, cache));
    let explorer = Explorer::new(Arc::clone(&catalog));

    Ok(CliContext { catalog, explorer })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_with_defaults() {
        let ctx = bootstrap(&CliConfig::default()).unwrap();
        // The context is wired and the port is object-safe behind an Arc
        let _catalog: &Arc<dyn CatalogPort> = &ctx.catalog;
    }

    #[test]
    fn test_bootstrap_with_base_url_override() {
        let config = CliConfig {
            base_url: Some("https://example.test/v1".to_string()),
        };
        assert!(bootstrap(&config).is_ok());
    }
}
