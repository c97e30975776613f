use anyhow::Result;
use eventfinder_core::reviews::ReviewBook;
use owo_colors::OwoColorize;

use super::{Context, find_event};
use crate::render::Render;

pub async fn list(ctx: &Context, id: i64) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let event = find_event(&catalog, id)?;
    let reviews = ReviewBook::new(&ctx.store, id).list()?;

    println!("{}", event.title.bold());
    if reviews.is_empty() {
        println!("  {}", "No reviews yet. Be the first to write one!".dimmed());
    }
    for review in &reviews {
        println!("  {}", review.render());
    }

    Ok(())
}

pub async fn add(ctx: &Context, id: i64, text: &str) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let event = find_event(&catalog, id)?;

    let review = ReviewBook::new(&ctx.store, id).add(text)?;
    println!(
        "{} Review {} added to {}",
        "✓".green(),
        format!("#{}", review.id).dimmed(),
        event.title.bold()
    );

    Ok(())
}

pub async fn delete(ctx: &Context, id: i64, review_id: i64) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let event = find_event(&catalog, id)?;

    ReviewBook::new(&ctx.store, id).delete(review_id)?;
    println!(
        "{} Review {} deleted from {}",
        "✓".green(),
        format!("#{}", review_id).dimmed(),
        event.title.bold()
    );

    Ok(())
}
