//! Internal API response types for the Met collection.
//!
//! These types mirror the wire format and are internal to `artex-met`.
//! External consumers see the domain types from `artex-core`; the
//! conversions here normalize the API's habit of sending empty strings for
//! missing fields into proper absence.

use artex_core::{Department, ObjectDetail, ObjectId};
use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Met collection client.
#[derive(Debug, Clone)]
pub struct MetConfig {
    /// Base URL for the collection API
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: std::time::Duration,
}

impl Default for MetConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://collectionapi.metmuseum.org/public/collection/v1")
                .expect("default Met API URL is valid"),
            user_agent: concat!("artex-met/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: std::time::Duration::from_secs(30),
        }
    }
}

// ============================================================================
// Departments endpoint
// ============================================================================

/// Envelope of the `departments` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsResponse {
    #[serde(default)]
    pub departments: Vec<DepartmentRecord>,
}

/// One department as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub department_id: u32,
    pub display_name: String,
}

impl DepartmentRecord {
    pub fn into_domain(self) -> Department {
        Department::new(self.department_id, self.display_name)
    }
}

// ============================================================================
// Search endpoint
// ============================================================================

/// Envelope of the `search` endpoint. `objectIDs` is `null` (not an empty
/// array) when nothing matches.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<ObjectId>>,
}

impl SearchResponse {
    /// The matched ids in API order, treating `null` as empty.
    pub fn into_ids(self) -> Vec<ObjectId> {
        self.object_ids.unwrap_or_default()
    }
}

// ============================================================================
// Objects endpoint
// ============================================================================

/// Full object record as returned by the `objects/{id}` endpoint.
///
/// Only the fields the explorer renders are modeled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectRecord {
    #[serde(rename = "objectID")]
    pub object_id: ObjectId,
    pub title: Option<String>,
    pub artist_display_name: Option<String>,
    pub artist_display_bio: Option<String>,
    pub object_date: Option<String>,
    pub medium: Option<String>,
    pub object_name: Option<String>,
    pub culture: Option<String>,
    pub period: Option<String>,
    pub dimensions: Option<String>,
    pub department: Option<String>,
    pub credit_line: Option<String>,
    pub primary_image_small: Option<String>,
    pub additional_images: Vec<String>,
    pub tags: Option<Vec<TagRecord>>,
    #[serde(rename = "objectURL")]
    pub object_url: Option<String>,
}

/// One tag entry; only the term is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TagRecord {
    pub term: Option<String>,
}

/// The API reports missing text as `""` at least as often as `null`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl ObjectRecord {
    /// Convert to the domain detail record, degrading empty strings to
    /// absence.
    pub fn into_detail(self) -> ObjectDetail {
        ObjectDetail {
            object_id: self.object_id,
            title: non_empty(self.title),
            artist: non_empty(self.artist_display_name),
            artist_bio: non_empty(self.artist_display_bio),
            object_date: non_empty(self.object_date),
            medium: non_empty(self.medium),
            object_kind: non_empty(self.object_name),
            culture: non_empty(self.culture),
            period: non_empty(self.period),
            dimensions: non_empty(self.dimensions),
            department: non_empty(self.department),
            credit_line: non_empty(self.credit_line),
            primary_image: non_empty(self.primary_image_small),
            additional_images: self
                .additional_images
                .into_iter()
                .filter(|u| !u.trim().is_empty())
                .collect(),
            tags: self
                .tags
                .unwrap_or_default()
                .into_iter()
                .filter_map(|tag| non_empty(tag.term))
                .collect(),
            object_url: non_empty(self.object_url),
        }
    }
}
