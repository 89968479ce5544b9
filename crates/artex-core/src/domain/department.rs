//! Museum departments and selector resolution.

use serde::{Deserialize, Serialize};

/// A curatorial department of the museum.
///
/// Sourced verbatim from the remote catalog; used to populate the filter
/// selector and to map a display name back to an identifier for searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier as assigned by the catalog
    pub id: u32,
    /// Human-readable department name
    pub display_name: String,
}

impl Department {
    /// Create a new department.
    pub fn new(id: u32, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

/// Resolve a user-supplied department selector to an identifier.
///
/// A purely numeric selector is taken as an id directly, without consulting
/// the list: an empty department list means "unknown", not "no departments
/// exist", so a numeric id is passed through rather than rejected. Anything
/// else is matched case-insensitively against display names.
pub fn resolve_department(departments: &[Department], selector: &str) -> Option<u32> {
    let selector = selector.trim();
    if selector.is_empty() {
        return None;
    }

    if let Ok(id) = selector.parse::<u32>() {
        return Some(id);
    }

    departments
        .iter()
        .find(|dept| dept.display_name.eq_ignore_ascii_case(selector))
        .map(|dept| dept.id)
}
