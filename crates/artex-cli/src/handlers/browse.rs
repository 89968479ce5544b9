//! Interactive browse loop.
//!
//! Maps the catalog UI's controls onto line commands: searching, paging,
//! the surprise pick, and the per-result artist/tag drill-downs. Paging is
//! only honored when in bounds, and drill affordances only exist for the
//! entries of the currently rendered page.

use anyhow::Result;
use artex_core::{SearchFilter, SessionState};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::bootstrap::CliContext;
use crate::presentation::{PageEntry, render_page};

use super::spinner;

/// One parsed line of the browse loop.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    /// Search with the session's base filter plus these terms
    Search(String),
    Next,
    Prev,
    Surprise,
    /// Drill into the artist of a rendered entry (1-based slot)
    Artist(usize),
    /// Drill into a tag of a rendered entry (1-based slot, 1-based tag)
    Tag(usize, usize),
    Help,
    Quit,
}

impl BrowseCommand {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?.to_ascii_lowercase();

        match head.as_str() {
            "search" | "s" => {
                let terms = line
                    .trim_start()
                    .splitn(2, char::is_whitespace)
                    .nth(1)
                    .unwrap_or("")
                    .trim();
                Some(Self::Search(terms.to_string()))
            }
            "next" | "n" => Some(Self::Next),
            "prev" | "previous" | "p" => Some(Self::Prev),
            "surprise" => Some(Self::Surprise),
            "artist" | "a" => parts.next()?.parse().ok().map(Self::Artist),
            "tag" | "t" => {
                let slot = parts.next()?.parse().ok()?;
                let tag = parts.next()?.parse().ok()?;
                Some(Self::Tag(slot, tag))
            }
            "help" | "h" | "?" => Some(Self::Help),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <terms>   search the collection (current filters apply)");
    println!("  next / prev      page through the results");
    println!("  surprise         show one random highlight");
    println!("  artist <n>       more from the artist of entry n");
    println!("  tag <n> <m>      explore tag m of entry n");
    println!("  help             show this help");
    println!("  quit             leave the browser");
}

/// Execute the interactive browse command.
///
/// `base` carries the filters given on the command line; they stay in
/// effect for every `search` issued in the loop, with only the query terms
/// swapped out. A non-trivial base triggers an immediate initial search.
pub async fn execute(ctx: &CliContext, base: SearchFilter) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut state = SessionState::new();
    let mut entries: Vec<PageEntry> = Vec::new();

    if base.is_trivial() {
        println!("Type 'search <terms>' to explore the collection, 'help' for commands.");
    } else {
        entries = run_search(ctx, &mut state, &base).await;
    }

    loop {
        let line = match editor.readline("artex> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line)?;

        match BrowseCommand::parse(line) {
            Some(BrowseCommand::Search(terms)) => {
                let filter = base.clone().with_query(terms);
                entries = run_search(ctx, &mut state, &filter).await;
            }
            Some(BrowseCommand::Next) => {
                if ctx.explorer.change_page(&mut state, 1) {
                    entries = render_page(&ctx.catalog, &mut state).await;
                } else {
                    println!("Already on the last page.");
                }
            }
            Some(BrowseCommand::Prev) => {
                if ctx.explorer.change_page(&mut state, -1) {
                    entries = render_page(&ctx.catalog, &mut state).await;
                } else {
                    println!("Already on the first page.");
                }
            }
            Some(BrowseCommand::Surprise) => {
                let bar = spinner("Finding a masterpiece...");
                ctx.explorer.surprise_me(&mut state).await;
                bar.finish_and_clear();
                entries = render_page(&ctx.catalog, &mut state).await;
            }
            Some(BrowseCommand::Artist(slot)) => {
                let Some(entry) = slot.checked_sub(1).and_then(|i| entries.get(i)) else {
                    println!("No entry {slot} on this page.");
                    continue;
                };
                match entry.artist.clone() {
                    Some(artist) => {
                        let bar = spinner(&format!("Finding more from {artist}..."));
                        ctx.explorer.explore_artist(&mut state, &artist).await;
                        bar.finish_and_clear();
                        entries = render_page(&ctx.catalog, &mut state).await;
                    }
                    None => println!("Entry {slot} has no known artist."),
                }
            }
            Some(BrowseCommand::Tag(slot, tag)) => {
                let Some(entry) = slot.checked_sub(1).and_then(|i| entries.get(i)) else {
                    println!("No entry {slot} on this page.");
                    continue;
                };
                match tag.checked_sub(1).and_then(|i| entry.tags.get(i)).cloned() {
                    Some(term) => {
                        let bar = spinner(&format!("Searching for '{term}'..."));
                        ctx.explorer.explore_tag(&mut state, &term).await;
                        bar.finish_and_clear();
                        entries = render_page(&ctx.catalog, &mut state).await;
                    }
                    None => println!("Entry {slot} has no tag {tag}."),
                }
            }
            Some(BrowseCommand::Help) => print_help(),
            Some(BrowseCommand::Quit) => break,
            None => println!("Unrecognized command; type 'help'."),
        }
    }

    Ok(())
}

async fn run_search(
    ctx: &CliContext,
    state: &mut SessionState,
    filter: &SearchFilter,
) -> Vec<PageEntry> {
    let bar = spinner("Searching for artworks...");
    ctx.explorer.submit_search(state, filter).await;
    bar.finish_and_clear();
    render_page(&ctx.catalog, state).await
}
