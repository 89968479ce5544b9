//! Single-object display handler.

use anyhow::Result;
use artex_core::ObjectId;

use crate::bootstrap::CliContext;
use crate::presentation::display_artwork;

/// Execute the show command.
pub async fn execute(ctx: &CliContext, object_id: ObjectId, json: bool) -> Result<()> {
    let Some(detail) = ctx.catalog.object_detail(object_id).await else {
        println!("Object {object_id} is unavailable.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        display_artwork(&detail);
    }

    Ok(())
}
