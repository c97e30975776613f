use anyhow::Result;
use eventfinder_core::geo::{Coordinates, Origin, nearby_events};
use owo_colors::OwoColorize;

use super::Context;
use crate::render::{Render, pluralize};

pub async fn run(
    ctx: &Context,
    position: Option<(f64, f64)>,
    radius_km: Option<f64>,
    limit: Option<usize>,
    all: bool,
) -> Result<()> {
    let fallback = &ctx.config.default_origin;
    let origin = Origin::resolve(
        position.map(|(lat, lng)| Coordinates::new(lat, lng)),
        fallback.coordinates(),
        &fallback.label,
    );
    let radius_km = radius_km.unwrap_or(ctx.config.nearby_radius_km);

    let catalog = ctx.catalog().await?;
    let nearby = nearby_events(catalog.events(), origin.coordinates, radius_km);

    let from = format!("{} ({})", origin.label, origin.coordinates);
    if origin.is_fallback {
        println!(
            "{} {}",
            "Location unavailable, showing events near".dimmed(),
            from.bold()
        );
    } else {
        println!("{} {}", "Events near".dimmed(), from.bold());
    }

    if nearby.is_empty() {
        println!("  {}", "No events nearby.".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} {} within {} km",
            nearby.len(),
            pluralize("event", nearby.len()),
            radius_km
        )
        .dimmed()
    );

    let shown = if all {
        nearby.len()
    } else {
        limit.unwrap_or(ctx.config.nearby_limit)
    };
    for item in nearby.iter().take(shown) {
        println!("  {}", item.render());
    }

    Ok(())
}
