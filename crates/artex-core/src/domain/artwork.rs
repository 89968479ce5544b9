//! Artwork identifiers and detail records.

use serde::{Deserialize, Serialize};

/// Catalog object identifier.
pub type ObjectId = u64;

/// Full record for one catalog object.
///
/// Every field except the identifier is optional: partial records are
/// routine, and absence degrades to a display placeholder rather than an
/// error. An object without a primary image is still a valid, displayable
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDetail {
    /// Catalog identifier
    pub object_id: ObjectId,
    /// Artwork title
    pub title: Option<String>,
    /// Artist display name
    pub artist: Option<String>,
    /// Short artist biography line
    pub artist_bio: Option<String>,
    /// Object date as a display string (may span years or be approximate)
    pub object_date: Option<String>,
    /// Medium / materials
    pub medium: Option<String>,
    /// Object kind (e.g. "Painting", "Sword")
    pub object_kind: Option<String>,
    /// Culture of origin
    pub culture: Option<String>,
    /// Historical period
    pub period: Option<String>,
    /// Physical dimensions as a display string
    pub dimensions: Option<String>,
    /// Owning department name
    pub department: Option<String>,
    /// Credit line
    pub credit_line: Option<String>,
    /// Primary image URL
    pub primary_image: Option<String>,
    /// Additional image URLs
    #[serde(default)]
    pub additional_images: Vec<String>,
    /// Tag terms attached to the object
    #[serde(default)]
    pub tags: Vec<String>,
    /// Canonical object page URL
    pub object_url: Option<String>,
}

impl ObjectDetail {
    /// Create an otherwise-empty record for an identifier.
    pub fn empty(object_id: ObjectId) -> Self {
        Self {
            object_id,
            title: None,
            artist: None,
            artist_bio: None,
            object_date: None,
            medium: None,
            object_kind: None,
            culture: None,
            period: None,
            dimensions: None,
            department: None,
            credit_line: None,
            primary_image: None,
            additional_images: Vec::new(),
            tags: Vec::new(),
            object_url: None,
        }
    }

    /// Whether a primary image is available.
    pub fn has_image(&self) -> bool {
        self.primary_image.is_some()
    }

    /// The artist name, if it is actually known.
    ///
    /// The drill-down affordance is only offered for a real name, so the
    /// catalog's own "Unknown" marker counts as absent here.
    pub fn known_artist(&self) -> Option<&str> {
        self.artist
            .as_deref()
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("unknown"))
    }
}
