//! URL construction helpers for the Met collection API.
//!
//! Pure functions building the four endpoint URLs. The search serializer is
//! strict about the wire contract: absent/empty filter fields are omitted
//! from the query string entirely (the API treats their presence as active
//! constraints), and `isHighlight` is the literal string `true` since the
//! API does not recognize a bare boolean.

use crate::models::MetConfig;
use artex_core::{ObjectId, SearchFilter};
use url::Url;

/// Append a path segment to the configured base URL.
fn endpoint(config: &MetConfig, segment: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{segment}"));
    url
}

/// Build the departments listing URL.
pub fn build_departments_url(config: &MetConfig) -> Url {
    endpoint(config, "departments")
}

/// Build a search URL for a filter set.
pub fn build_search_url(config: &MetConfig, filter: &SearchFilter) -> Url {
    let mut url = endpoint(config, "search");

    let mut params: Vec<String> = Vec::new();
    if let Some(ref query) = filter.query {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if filter.highlight_only {
        params.push("isHighlight=true".to_string());
    }
    if let Some(department_id) = filter.department_id {
        params.push(format!("departmentId={department_id}"));
    }
    if let Some(year) = filter.year_from {
        params.push(format!("dateBegin={year}"));
    }
    if let Some(year) = filter.year_to {
        params.push(format!("dateEnd={year}"));
    }

    if !params.is_empty() {
        url.set_query(Some(&params.join("&")));
    }

    url
}

/// Build the URL for the full highlights pool.
///
/// This is its own endpoint shape (`isHighlight=true&q=`, with the empty
/// `q` present) and returns every highlight id, unlike a highlight-only
/// search which returns a ranked subset.
pub fn build_highlights_url(config: &MetConfig) -> Url {
    let mut url = endpoint(config, "search");
    url.set_query(Some("isHighlight=true&q="));
    url
}

/// Build the URL for one object's detail record.
pub fn build_object_url(config: &MetConfig, id: ObjectId) -> Url {
    endpoint(config, &format!("objects/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> MetConfig {
        MetConfig::default()
    }

    #[test]
    fn test_build_departments_url() {
        let url = build_departments_url(&default_config());
        assert_eq!(
            url.as_str(),
            "https://collectionapi.metmuseum.org/public/collection/v1/departments"
        );
    }

    #[test]
    fn test_empty_filter_serializes_no_parameters() {
        let url = build_search_url(&default_config(), &SearchFilter::new());

        assert_eq!(
            url.as_str(),
            "https://collectionapi.metmuseum.org/public/collection/v1/search"
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_full_filter_serializes_all_parameters() {
        let filter = SearchFilter::new()
            .with_query("van gogh")
            .highlights_only(true)
            .with_department(11)
            .with_year_range(Some(1880), Some(1890));

        let url = build_search_url(&default_config(), &filter);

        assert_eq!(
            url.query(),
            Some("q=van%20gogh&isHighlight=true&departmentId=11&dateBegin=1880&dateEnd=1890")
        );
    }

    #[test]
    fn test_is_highlight_serializes_as_literal_string() {
        let url = build_search_url(
            &default_config(),
            &SearchFilter::new().highlights_only(true),
        );
        assert_eq!(url.query(), Some("isHighlight=true"));

        // Absent/false omits the parameter entirely
        let url = build_search_url(&default_config(), &SearchFilter::new().with_query("cat"));
        assert_eq!(url.query(), Some("q=cat"));
    }

    #[test]
    fn test_single_year_bound_serializes_alone() {
        let filter = SearchFilter::new().with_year_range(None, Some(1500));
        let url = build_search_url(&default_config(), &filter);
        assert_eq!(url.query(), Some("dateEnd=1500"));
    }

    #[test]
    fn test_build_highlights_url_keeps_empty_query_param() {
        let url = build_highlights_url(&default_config());
        assert_eq!(
            url.as_str(),
            "https://collectionapi.metmuseum.org/public/collection/v1/search?isHighlight=true&q="
        );
    }

    #[test]
    fn test_build_object_url() {
        let url = build_object_url(&default_config(), 436_535);
        assert_eq!(
            url.as_str(),
            "https://collectionapi.metmuseum.org/public/collection/v1/objects/436535"
        );
    }

    #[test]
    fn test_base_url_with_trailing_slash() {
        let config = MetConfig {
            base_url: Url::parse("https://example.test/api/v1/").unwrap(),
            ..Default::default()
        };
        let url = build_departments_url(&config);
        assert_eq!(url.as_str(), "https://example.test/api/v1/departments");
    }
}
