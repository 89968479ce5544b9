//! Department listing handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the departments command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let departments = ctx.explorer.departments().await;

    if departments.is_empty() {
        // Empty means unknown, not a museum with zero departments
        println!("The department list is unavailable right now.");
        return Ok(());
    }

    println!("Museum departments:");
    for dept in &departments {
        println!("  {:>3}  {}", dept.id, dept.display_name);
    }

    Ok(())
}
