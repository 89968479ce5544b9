//! Catalog client port trait.

use super::error::CatalogResult;
use crate::domain::{Department, ObjectDetail, ObjectId, SearchFilter};
use async_trait::async_trait;

/// Port trait for the remote artwork catalog.
///
/// This trait defines the interface the core domain uses to reach the
/// catalog. The implementation lives in `artex-met`. All operations are
/// read-only and idempotent against the remote system, and implementations
/// memoize each call by exact argument value, so repeated identical requests
/// must not re-issue network round trips.
///
/// Error tiers: `departments`, `highlight_ids`, and `search` surface their
/// failures to the caller (who degrades them to an empty result with a
/// user-visible warning); `object_detail` fails soft to `None` because
/// partial unavailability of individual objects is routine and must not spam
/// the user.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// List the museum's departments.
    async fn departments(&self) -> CatalogResult<Vec<Department>>;

    /// List every object id flagged as a highlight (the surprise pool).
    async fn highlight_ids(&self) -> CatalogResult<Vec<ObjectId>>;

    /// Search object ids matching a filter. Order is API-defined and
    /// preserved; it is the basis for pagination slicing.
    async fn search(&self, filter: &SearchFilter) -> CatalogResult<Vec<ObjectId>>;

    /// Fetch the full record for one object, or `None` if it cannot be
    /// retrieved for any reason.
    async fn object_detail(&self, id: ObjectId) -> Option<ObjectDetail>;

    /// Drop the memoized detail records as a unit.
    ///
    /// Called by the query controller whenever a new action replaces the
    /// active result set, so stale details are never served for reused ids.
    fn clear_detail_cache(&self);
}
