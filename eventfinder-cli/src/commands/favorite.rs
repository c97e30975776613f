use anyhow::Result;
use eventfinder_core::favorites::toggle_favorite;
use owo_colors::OwoColorize;

use super::{Context, find_event};

pub async fn run(ctx: &Context, id: i64) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let event = find_event(&catalog, id)?;

    if toggle_favorite(&ctx.store, id)? {
        println!("{} Saved {}", "♥".red(), event.title.bold());
    } else {
        println!("{} Removed {} from favorites", "♡".dimmed(), event.title.bold());
    }

    Ok(())
}
