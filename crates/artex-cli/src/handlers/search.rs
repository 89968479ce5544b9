//! One-shot search handler.

use anyhow::Result;
use artex_core::{SearchFilter, SessionState, resolve_department};

use crate::bootstrap::CliContext;
use crate::presentation::render_page;

use super::spinner;

/// Arguments for the search command.
pub struct SearchArgs {
    pub query: Option<String>,
    pub department: Option<String>,
    pub highlights: bool,
    pub from: Option<i32>,
    pub to: Option<i32>,
    pub page: usize,
    pub json: bool,
}

/// Execute the search command.
pub async fn execute(ctx: &CliContext, args: SearchArgs) -> Result<()> {
    let filter = build_filter(
        ctx,
        args.query.as_deref(),
        args.department.as_deref(),
        args.highlights,
        args.from,
        args.to,
    )
    .await;

    let bar = spinner("Searching for artworks...");
    let mut state = SessionState::new();
    ctx.explorer.submit_search(&mut state, &filter).await;
    bar.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.results())?);
        return Ok(());
    }

    // Walk forward to the requested page, stopping at the last valid one
    for _ in 0..args.page {
        if !ctx.explorer.change_page(&mut state, 1) {
            break;
        }
    }

    render_page(&ctx.catalog, &mut state).await;
    Ok(())
}

/// Build a search filter from command-line arguments.
///
/// The department selector accepts a numeric id or a display name; a name
/// that resolves to nothing drops the constraint with a warning rather than
/// failing the whole search.
pub async fn build_filter(
    ctx: &CliContext,
    query: Option<&str>,
    department: Option<&str>,
    highlights: bool,
    from: Option<i32>,
    to: Option<i32>,
) -> SearchFilter {
    let mut filter = SearchFilter::new()
        .highlights_only(highlights)
        .with_year_range(from, to);

    if let Some(query) = query {
        filter = filter.with_query(query);
    }

    if let Some(selector) = department {
        let departments = ctx.explorer.departments().await;
        match resolve_department(&departments, selector) {
            Some(id) => filter = filter.with_department(id),
            None => {
                eprintln!("warning: unknown department '{selector}', ignoring that filter");
            }
        }
    }

    filter
}
