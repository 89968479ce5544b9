//! Search filter value object.

/// Filter set for a catalog search.
///
/// Constructed fresh per search action and never mutated afterwards. Absent
/// fields must be omitted from the outgoing request entirely; the remote
/// API treats their mere presence as active constraints. Hashable so it can
/// key the search response cache by exact argument value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchFilter {
    /// Free-text query; never stored as an empty string
    pub query: Option<String>,
    /// Restrict to a single department
    pub department_id: Option<u32>,
    /// Restrict to objects flagged as highlights
    pub highlight_only: bool,
    /// Inclusive lower bound on the object date
    pub year_from: Option<i32>,
    /// Inclusive upper bound on the object date
    pub year_to: Option<i32>,
}

impl SearchFilter {
    /// Create an empty (trivial) filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query. Blank input clears the field.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        let trimmed = query.trim();
        self.query = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Restrict the search to one department.
    pub const fn with_department(mut self, department_id: u32) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Toggle the highlights-only restriction.
    pub const fn highlights_only(mut self, highlight_only: bool) -> Self {
        self.highlight_only = highlight_only;
        self
    }

    /// Set the year range bounds. Either side may be open.
    pub const fn with_year_range(mut self, from: Option<i32>, to: Option<i32>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    /// Filter for a drill-down action: the term alone, all other fields reset.
    pub fn for_term(term: &str) -> Self {
        Self::new().with_query(term)
    }

    /// The trivial highlights-only filter used by the no-results fallback.
    pub const fn highlights_fallback() -> Self {
        Self {
            query: None,
            department_id: None,
            highlight_only: true,
            year_from: None,
            year_to: None,
        }
    }

    /// A trivial filter constrains nothing; searching with one is a plain
    /// browse and must never trigger the fallback substitution.
    pub fn is_trivial(&self) -> bool {
        self.query.is_none()
            && self.department_id.is_none()
            && !self.highlight_only
            && self.year_from.is_none()
            && self.year_to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_is_trivial() {
        assert!(SearchFilter::new().is_trivial());
    }

    #[test]
    fn test_any_field_makes_filter_non_trivial() {
        assert!(!SearchFilter::new().with_query("cat").is_trivial());
        assert!(!SearchFilter::new().with_department(4).is_trivial());
        assert!(!SearchFilter::new().highlights_only(true).is_trivial());
        assert!(
            !SearchFilter::new()
                .with_year_range(Some(1880), None)
                .is_trivial()
        );
        assert!(
            !SearchFilter::new()
                .with_year_range(None, Some(1890))
                .is_trivial()
        );
    }

    #[test]
    fn test_blank_query_normalizes_to_absent() {
        let filter = SearchFilter::new().with_query("   ");
        assert_eq!(filter.query, None);
        assert!(filter.is_trivial());

        let filter = SearchFilter::new().with_query("  armor ");
        assert_eq!(filter.query, Some("armor".to_string()));
    }

    #[test]
    fn test_fallback_filter_shape() {
        let fallback = SearchFilter::highlights_fallback();
        assert!(fallback.highlight_only);
        assert!(fallback.query.is_none());
        assert!(fallback.department_id.is_none());
        assert!(!fallback.is_trivial());
    }

    #[test]
    fn test_drill_filter_discards_prior_constraints() {
        let filter = SearchFilter::for_term("Claude Monet");
        assert_eq!(filter.query, Some("Claude Monet".to_string()));
        assert!(filter.department_id.is_none());
        assert!(!filter.highlight_only);
        assert!(filter.year_from.is_none());
        assert!(filter.year_to.is_none());
    }

    #[test]
    fn test_filters_compare_by_value() {
        let a = SearchFilter::new().with_query("cat").with_department(4);
        let b = SearchFilter::new().with_query("cat").with_department(4);
        assert_eq!(a, b);
        assert_ne!(a, SearchFilter::new().with_query("cat"));
    }
}
