//! Surprise handler: one random highlight.

use anyhow::Result;
use artex_core::SessionState;

use crate::bootstrap::CliContext;
use crate::presentation::render_page;

use super::spinner;

/// Execute the surprise command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let bar = spinner("Finding a masterpiece...");
    let mut state = SessionState::new();
    ctx.explorer.surprise_me(&mut state).await;
    bar.finish_and_clear();

    if state.is_empty() {
        println!("The highlights pool is unavailable right now.");
        return Ok(());
    }

    render_page(&ctx.catalog, &mut state).await;
    Ok(())
}
