use anyhow::{Context as _, Result};
use clap::ValueEnum;
use eventfinder_core::event::Event;
use eventfinder_core::favorites::FavoriteSet;
use eventfinder_core::links::{blog_search_link, directions_link, map_link};
use eventfinder_core::reviews::ReviewBook;
use owo_colors::OwoColorize;

use super::{Context, find_event};
use crate::render::Render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkTarget {
    /// Event location on the map
    Map,
    /// Directions to the event
    Directions,
    /// Blog reviews
    Blog,
}

fn link_for(event: &Event, target: LinkTarget) -> Option<String> {
    match target {
        LinkTarget::Map => map_link(event),
        LinkTarget::Directions => directions_link(event),
        LinkTarget::Blog => Some(blog_search_link(event)),
    }
}

pub async fn run(ctx: &Context, id: i64, open_target: Option<LinkTarget>) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let event = find_event(&catalog, id)?;
    let favorites = FavoriteSet::load(&ctx.store)?;
    let reviews = ReviewBook::new(&ctx.store, id).list()?;
    let today = ctx.today();

    let mark = if favorites.contains(id) { " ♥".red().to_string() } else { String::new() };
    println!("{}{}", event.title.bold(), mark);
    println!("  {} {}", "Status:  ".dimmed(), event.status_on(today).render());
    println!("  {} {}", "Date:    ".dimmed(), event.date);
    println!("  {} {}", "Location:".dimmed(), event.location);
    println!("  {} {}", "Category:".dimmed(), event.category);
    if let Some(at) = event.coordinates() {
        println!("  {} {}", "Position:".dimmed(), at);
    }

    if !event.description.is_empty() {
        println!();
        println!("{}", event.description);
    }

    println!();
    match directions_link(event) {
        Some(link) => println!("  {} {}", "Directions:".dimmed(), link),
        None => println!("  {} {}", "Directions:".dimmed(), "no location on file".dimmed()),
    }
    println!("  {} {}", "Blog reviews:".dimmed(), blog_search_link(event));

    println!();
    println!("{}", format!("Reviews ({})", reviews.len()).bold());
    if reviews.is_empty() {
        println!("  {}", "No reviews yet. Be the first to write one!".dimmed());
    }
    for review in &reviews {
        println!("  {}", review.render());
    }

    if let Some(target) = open_target {
        let Some(link) = link_for(event, target) else {
            anyhow::bail!("'{}' has no location, so there is no map link", event.title);
        };
        open::that(&link).with_context(|| format!("Could not open {link}"))?;
    }

    Ok(())
}
