//! Object detail fetches for the Met collection client.

use artex_core::{ObjectDetail, ObjectId};
use tracing::debug;

use crate::http::HttpBackend;
use crate::models::ObjectRecord;
use crate::url::build_object_url;

use super::MetClient;

impl<B: HttpBackend> MetClient<B> {
    /// Fetch one object's record, memoizing the outcome either way.
    ///
    /// Per-object failures are routine (retired ids, partial records) and
    /// fail soft to `None` without a user-facing warning. The absence is
    /// cached too, so a dead id costs one request per detail-cache
    /// generation rather than one per render.
    pub(crate) async fn fetch_detail(&self, id: ObjectId) -> Option<ObjectDetail> {
        if let Some(hit) = self.cache.detail_hit(id) {
            return hit;
        }

        let url = build_object_url(&self.config, id);
        let detail = match self.backend.get_json::<ObjectRecord>(&url).await {
            Ok(record) => Some(record.into_detail()),
            Err(err) => {
                debug!("object {id} unavailable: {err}");
                None
            }
        };

        self.cache.store_detail(id, detail.clone());
        detail
    }
}
