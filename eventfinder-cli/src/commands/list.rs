use anyhow::Result;
use eventfinder_core::criteria::{CategoryFilter, Criteria, RegionFilter, SortOrder, StatusFilter};
use eventfinder_core::favorites::FavoriteSet;
use eventfinder_core::period::Period;
use eventfinder_core::select::{EmptyReason, EventView, build_view};
use owo_colors::OwoColorize;

use super::Context;
use crate::render::render_view;

#[derive(Debug, Default)]
pub struct ListArgs {
    pub category: Option<String>,
    pub favorites: bool,
    pub ended: bool,
    pub region: Option<String>,
    pub search: Option<String>,
    pub period: Period,
    pub sort: SortOrder,
}

impl ListArgs {
    pub fn criteria(&self) -> Criteria {
        let mut criteria = Criteria::default();

        if self.favorites {
            criteria = criteria.with_category_toggled(CategoryFilter::Favorites);
        } else if let Some(category) = &self.category {
            criteria = criteria.with_category_toggled(CategoryFilter::parse(category));
        }

        // after the category, which resets the status filter
        if self.ended {
            criteria = criteria.with_status(StatusFilter::Ended);
        }

        if let Some(region) = &self.region {
            criteria = criteria.with_region(RegionFilter::parse(region));
        }

        if let Some(search) = &self.search {
            criteria = criteria.with_keyword(search);
        }

        criteria.with_period(self.period).with_sort(self.sort)
    }
}

pub async fn run(ctx: &Context, args: &ListArgs) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let favorites = FavoriteSet::load(&ctx.store)?;
    let today = ctx.today();

    let criteria = args.criteria();
    tracing::debug!(?criteria, "listing events");

    let view = build_view(
        catalog.events(),
        &criteria,
        &favorites,
        today,
        ctx.config.home_layout(),
    );

    println!("{}", render_view(&view, today, &favorites));

    if view == EventView::Empty(EmptyReason::NoMatches) && args.category.is_some() {
        let categories = catalog.categories().join(", ");
        println!("{} {}", "Categories:".dimmed(), categories);
    }

    Ok(())
}
