//! Query controller: translates user actions into catalog calls and
//! session-state mutations.
//!
//! Each operation follows the same pattern: mutate, call the catalog,
//! mutate. Catalog-level failures (departments, highlights, search) degrade
//! to empty results with a warning; per-object failures are handled further
//! down by the renderer and never reach this layer.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::warn;

use crate::domain::{Department, ObjectId, SearchFilter};
use crate::ports::CatalogPort;
use crate::session::SessionState;

/// Drives a browsing session against a catalog.
///
/// Holds no per-session state of its own; the [`SessionState`] is passed
/// into every operation so one explorer can serve any number of sessions.
pub struct Explorer {
    catalog: Arc<dyn CatalogPort>,
}

impl Explorer {
    /// Create an explorer over a catalog port.
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// List departments, degrading to empty with a warning on failure.
    ///
    /// Callers must treat an empty list as "unknown", not as a catalog with
    /// zero departments.
    pub async fn departments(&self) -> Vec<Department> {
        match self.catalog.departments().await {
            Ok(departments) => departments,
            Err(err) => {
                warn!("failed to load departments: {err}");
                Vec::new()
            }
        }
    }

    /// Run a user-submitted search, applying the no-results fallback policy.
    ///
    /// A non-trivial filter that comes back empty is replaced by a fresh
    /// search for the general highlights set, so the user never lands on a
    /// dead end; the session's fallback flag is armed for one render cycle.
    /// The fallback deliberately issues a second search rather than reusing
    /// the highlights pool; the search endpoint returns a ranked subset,
    /// not the whole pool.
    pub async fn submit_search(&self, state: &mut SessionState, filter: &SearchFilter) {
        state.reset_page();

        let mut ids = self.search_soft(filter).await;

        if ids.is_empty() && !filter.is_trivial() {
            state.set_fallback(true);
            ids = self.search_soft(&SearchFilter::highlights_fallback()).await;
        } else {
            state.set_fallback(false);
        }

        state.set_results(ids);
        // A new search always forces fresh detail fetches
        self.catalog.clear_detail_cache();
    }

    /// Pick one random highlight and make it the sole result.
    ///
    /// An empty highlights pool yields an empty result set without error.
    pub async fn surprise_me(&self, state: &mut SessionState) {
        state.reset_page();

        let pool = match self.catalog.highlight_ids().await {
            Ok(pool) => pool,
            Err(err) => {
                warn!("failed to load highlights: {err}");
                Vec::new()
            }
        };

        let results: Vec<ObjectId> = pool
            .choose(&mut rand::thread_rng())
            .map(|id| vec![*id])
            .unwrap_or_default();

        state.set_fallback(false);
        state.set_results(results);
        self.catalog.clear_detail_cache();
    }

    /// Drill into everything by one artist, discarding prior filters.
    ///
    /// Drill-downs are intentional and shown as-is, including empty; no
    /// fallback applies.
    pub async fn explore_artist(&self, state: &mut SessionState, name: &str) {
        self.drill(state, name).await;
    }

    /// Drill into everything matching one tag term, discarding prior filters.
    pub async fn explore_tag(&self, state: &mut SessionState, term: &str) {
        self.drill(state, term).await;
    }

    /// Move one page in either direction, guarded by the result bounds.
    /// Returns whether the page actually changed.
    pub fn change_page(&self, state: &mut SessionState, delta: i32) -> bool {
        match delta {
            1 => state.next_page(),
            -1 => state.prev_page(),
            _ => false,
        }
    }

    async fn drill(&self, state: &mut SessionState, term: &str) {
        state.reset_page();
        let ids = self.search_soft(&SearchFilter::for_term(term)).await;
        state.set_fallback(false);
        state.set_results(ids);
        self.catalog.clear_detail_cache();
    }

    async fn search_soft(&self, filter: &SearchFilter) -> Vec<ObjectId> {
        match self.catalog.search(filter).await {
            Ok(ids) => ids,
            Err(err) => {
                warn!("catalog search failed: {err}");
                Vec::new()
            }
        }
    }
}
