//! Main commands enum and subcommand arguments.

use clap::Subcommand;

/// Available commands for the artwork explorer.
#[derive(Subcommand)]
pub enum Commands {
    /// List the museum's departments
    Departments,

    /// Search the collection and show one page of matches
    Search {
        /// Free-text query (e.g., "Van Gogh", "armor", "cat")
        query: Option<String>,
        /// Filter by department id or display name
        #[arg(short, long)]
        department: Option<String>,
        /// Only show museum highlights
        #[arg(long)]
        highlights: bool,
        /// Start year for the object date range
        #[arg(long)]
        from: Option<i32>,
        /// End year for the object date range
        #[arg(long)]
        to: Option<i32>,
        /// Page to display (zero-based)
        #[arg(short, long, default_value = "0")]
        page: usize,
        /// Print the matched object ids as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },

    /// Show one random highlight from the collection
    Surprise,

    /// Show the full record for one object id
    Show {
        /// Catalog object id
        object_id: u64,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse interactively with paging and artist/tag drill-downs
    Browse {
        /// Initial free-text query
        query: Option<String>,
        /// Filter by department id or display name
        #[arg(short, long)]
        department: Option<String>,
        /// Only show museum highlights
        #[arg(long)]
        highlights: bool,
        /// Start year for the object date range
        #[arg(long)]
        from: Option<i32>,
        /// End year for the object date range
        #[arg(long)]
        to: Option<i32>,
    },
}
