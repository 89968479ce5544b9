//! Artwork rendering for CLI output.
//!
//! The renderer is read-only against the session state except for consuming
//! the one-shot fallback notice. Missing optional text degrades to a
//! placeholder; sections without data are omitted entirely rather than
//! rendered as empty labels.

use std::sync::Arc;

use artex_core::{CatalogPort, ObjectDetail, ObjectId, SessionState};

/// Placeholder for a missing title.
const UNTITLED: &str = "Untitled";
/// Placeholder for missing artist/date/medium/department text.
const UNKNOWN: &str = "Unknown";

/// At most this many additional images are shown per object.
const MAX_ADDITIONAL_IMAGES: usize = 4;
/// Tag terms are laid out in rows of at most this many.
const TAGS_PER_ROW: usize = 5;

/// Per-result affordances carried back to the interactive loop.
///
/// Mirrors the per-result buttons of the catalog UI: a "more from this
/// artist" action when the artist is actually known, and one action per tag.
#[derive(Debug, Clone)]
pub struct PageEntry {
    /// The rendered object's id
    pub object_id: ObjectId,
    /// Artist name, only when known (drives the artist drill-down)
    pub artist: Option<String>,
    /// Tag terms (drive the tag drill-downs)
    pub tags: Vec<String>,
}

/// Format one artwork as a multi-line block, title first.
pub fn format_artwork(detail: &ObjectDetail) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(detail.title.as_deref().unwrap_or(UNTITLED).to_string());
    lines.push(format!(
        "    Artist: {}",
        detail.artist.as_deref().unwrap_or(UNKNOWN)
    ));
    if let Some(ref bio) = detail.artist_bio {
        lines.push(format!("    Artist Bio: {bio}"));
    }
    lines.push(format!(
        "    Date: {}",
        detail.object_date.as_deref().unwrap_or(UNKNOWN)
    ));
    lines.push(format!(
        "    Medium: {}",
        detail.medium.as_deref().unwrap_or(UNKNOWN)
    ));
    if let Some(ref kind) = detail.object_kind {
        lines.push(format!("    Object Type: {kind}"));
    }
    if let Some(ref culture) = detail.culture {
        lines.push(format!("    Culture: {culture}"));
    }
    if let Some(ref period) = detail.period {
        lines.push(format!("    Period: {period}"));
    }
    if let Some(ref dimensions) = detail.dimensions {
        lines.push(format!("    Dimensions: {dimensions}"));
    }
    lines.push(format!(
        "    Department: {}",
        detail.department.as_deref().unwrap_or(UNKNOWN)
    ));
    if let Some(ref credit) = detail.credit_line {
        lines.push(format!("    Credit Line: {credit}"));
    }
    lines.push(format!(
        "    Image: {}",
        detail.primary_image.as_deref().unwrap_or("(no image available)")
    ));
    if let Some(ref url) = detail.object_url {
        lines.push(format!("    View online: {url}"));
    }

    if !detail.additional_images.is_empty() {
        lines.push("    Additional Images:".to_string());
        for url in detail.additional_images.iter().take(MAX_ADDITIONAL_IMAGES) {
            lines.push(format!("      {url}"));
        }
    }

    if !detail.tags.is_empty() {
        lines.push("    Tags:".to_string());
        for row in detail.tags.chunks(TAGS_PER_ROW) {
            lines.push(format!("      {}", row.join(", ")));
        }
    }

    lines.join("\n")
}

/// Print one artwork block to stdout.
pub fn display_artwork(detail: &ObjectDetail) {
    println!("{}", format_artwork(detail));
}

/// Render the current page of the session to stdout.
///
/// Consumes the fallback notice, prints the result header, fetches each
/// visible object's record (skipping silently to a minimal degraded entry
/// when absent), and returns the per-result affordances for drill-downs.
pub async fn render_page(
    catalog: &Arc<dyn CatalogPort>,
    state: &mut SessionState,
) -> Vec<PageEntry> {
    if state.take_fallback() {
        println!("No direct matches found for your query. Showing popular highlights instead.");
    }

    if state.is_empty() {
        println!("Nothing to show yet. Run a search to explore the collection.");
        return Vec::new();
    }

    let total = state.result_count();
    let (start, end) = state.page_bounds();
    println!("Found {total} matching artworks.");
    println!("Showing results {} - {end} of {total}", start + 1);

    let mut entries = Vec::new();
    let slice: Vec<ObjectId> = state.page_slice().to_vec();
    for (index, id) in slice.into_iter().enumerate() {
        let slot = index + 1;
        println!("{}", "─".repeat(72));

        match catalog.object_detail(id).await {
            Some(detail) => {
                println!("{slot:2}. {}", format_artwork(&detail));
                entries.push(PageEntry {
                    object_id: id,
                    artist: detail.known_artist().map(String::from),
                    tags: detail.tags.clone(),
                });
            }
            None => {
                println!("{slot:2}. Object {id}: details unavailable");
                entries.push(PageEntry {
                    object_id: id,
                    artist: None,
                    tags: Vec::new(),
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_detail() -> ObjectDetail {
        let mut detail = ObjectDetail::empty(436_535);
        detail.title = Some("Wheat Field with Cypresses".to_string());
        detail.artist = Some("Vincent van Gogh".to_string());
        detail.artist_bio = Some("Dutch, 1853–1890".to_string());
        detail.object_date = Some("1889".to_string());
        detail.medium = Some("Oil on canvas".to_string());
        detail.object_kind = Some("Painting".to_string());
        detail.culture = Some("Dutch".to_string());
        detail.period = Some("Post-Impressionism".to_string());
        detail.dimensions = Some("28 7/8 × 36 3/4 in.".to_string());
        detail.department = Some("European Paintings".to_string());
        detail.credit_line = Some("Purchase, 1993".to_string());
        detail.primary_image = Some("https://images.example.test/primary.jpg".to_string());
        detail.object_url = Some("https://example.test/art/436535".to_string());
        detail
    }

    #[test]
    fn test_full_record_renders_every_section() {
        let output = format_artwork(&full_detail());

        assert!(output.starts_with("Wheat Field with Cypresses"));
        assert!(output.contains("Artist: Vincent van Gogh"));
        assert!(output.contains("Artist Bio: Dutch, 1853–1890"));
        assert!(output.contains("Object Type: Painting"));
        assert!(output.contains("Culture: Dutch"));
        assert!(output.contains("Period: Post-Impressionism"));
        assert!(output.contains("Dimensions: 28 7/8"));
        assert!(output.contains("Credit Line: Purchase, 1993"));
        assert!(output.contains("View online: https://example.test/art/436535"));
    }

    #[test]
    fn test_missing_text_degrades_to_placeholders() {
        let output = format_artwork(&ObjectDetail::empty(1));

        assert!(output.starts_with("Untitled"));
        assert!(output.contains("Artist: Unknown"));
        assert!(output.contains("Date: Unknown"));
        assert!(output.contains("Medium: Unknown"));
        assert!(output.contains("Department: Unknown"));
        assert!(output.contains("Image: (no image available)"));
    }

    #[test]
    fn test_absent_sections_render_no_labels() {
        let mut detail = full_detail();
        detail.period = None;
        detail.culture = None;
        detail.dimensions = None;

        let output = format_artwork(&detail);

        assert!(!output.contains("Period:"));
        assert!(!output.contains("Culture:"));
        assert!(!output.contains("Dimensions:"));
        // Sections with data are still there
        assert!(output.contains("Object Type: Painting"));
    }

    #[test]
    fn test_at_most_four_additional_images() {
        let mut detail = full_detail();
        detail.additional_images = (1..=7)
            .map(|n| format!("https://images.example.test/extra-{n}.jpg"))
            .collect();

        let output = format_artwork(&detail);

        for n in 1..=4 {
            assert!(output.contains(&format!("extra-{n}.jpg")), "missing image {n}");
        }
        for n in 5..=7 {
            assert!(!output.contains(&format!("extra-{n}.jpg")), "extra image {n}");
        }
    }

    #[test]
    fn test_tags_laid_out_in_rows_of_five() {
        let mut detail = full_detail();
        detail.tags = (1..=12).map(|n| format!("tag{n}")).collect();

        let output = format_artwork(&detail);
        let rows: Vec<&str> = output
            .lines()
            .skip_while(|line| *line != "    Tags:")
            .skip(1)
            .collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "      tag1, tag2, tag3, tag4, tag5");
        assert_eq!(rows[1], "      tag6, tag7, tag8, tag9, tag10");
        assert_eq!(rows[2], "      tag11, tag12");
    }

    #[test]
    fn test_no_tag_or_image_sections_when_empty() {
        let output = format_artwork(&ObjectDetail::empty(1));
        assert!(!output.contains("Tags:"));
        assert!(!output.contains("Additional Images:"));
    }
}
