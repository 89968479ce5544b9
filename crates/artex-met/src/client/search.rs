//! Listing and search operations for the Met collection client.

use artex_core::{Department, ObjectId, SearchFilter};

use crate::error::MetResult;
use crate::http::HttpBackend;
use crate::models::{DepartmentRecord, DepartmentsResponse, SearchResponse};
use crate::url::{build_departments_url, build_highlights_url, build_search_url};

use super::MetClient;

impl<B: HttpBackend> MetClient<B> {
    /// Fetch the department list, memoized for the cache's lifetime.
    pub(crate) async fn fetch_departments(&self) -> MetResult<Vec<Department>> {
        if let Some(hit) = self.cache.departments() {
            return Ok(hit);
        }

        let url = build_departments_url(&self.config);
        let response: DepartmentsResponse = self.backend.get_json(&url).await?;
        let departments: Vec<Department> = response
            .departments
            .into_iter()
            .map(DepartmentRecord::into_domain)
            .collect();

        self.cache.store_departments(&departments);
        Ok(departments)
    }

    /// Fetch every highlight id (the surprise pool), memoized.
    pub(crate) async fn fetch_highlight_ids(&self) -> MetResult<Vec<ObjectId>> {
        if let Some(hit) = self.cache.highlights() {
            return Ok(hit);
        }

        let url = build_highlights_url(&self.config);
        let response: SearchResponse = self.backend.get_json(&url).await?;
        let ids = response.into_ids();

        self.cache.store_highlights(&ids);
        Ok(ids)
    }

    /// Search object ids for a filter, memoized by exact filter value.
    ///
    /// Order is API-defined and preserved as the basis for pagination.
    pub(crate) async fn fetch_search(&self, filter: &SearchFilter) -> MetResult<Vec<ObjectId>> {
        if let Some(hit) = self.cache.search_hit(filter) {
            return Ok(hit);
        }

        let url = build_search_url(&self.config, filter);
        let response: SearchResponse = self.backend.get_json(&url).await?;
        let ids = response.into_ids();

        self.cache.store_search(filter.clone(), &ids);
        Ok(ids)
    }
}
