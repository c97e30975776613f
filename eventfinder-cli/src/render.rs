//! Terminal rendering for eventfinder types.
//!
//! Extension traits and helpers that turn core types into colored lines
//! using owo_colors.

use chrono::NaiveDate;
use eventfinder_core::event::Event;
use eventfinder_core::favorites::FavoriteSet;
use eventfinder_core::geo::NearbyEvent;
use eventfinder_core::reviews::Review;
use eventfinder_core::select::{EmptyReason, EventView, HomeSections};
use eventfinder_core::status::EventStatus;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        let tag = format!("[{}]", self.label());
        match self {
            EventStatus::Ongoing => tag.green().to_string(),
            EventStatus::Upcoming => tag.cyan().to_string(),
            EventStatus::Ended => tag.dimmed().to_string(),
        }
    }
}

impl Render for EmptyReason {
    fn render(&self) -> String {
        self.message().dimmed().to_string()
    }
}

impl Render for Review {
    fn render(&self) -> String {
        format!(
            "{} {} {}\n    {}",
            self.user.bold(),
            format!("({})", self.date.format("%Y-%m-%d")).dimmed(),
            format!("#{}", self.id).dimmed(),
            self.text
        )
    }
}

impl Render for NearbyEvent<'_> {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            format!("{:>7.1} km", self.distance_km).yellow(),
            self.event.title,
            self.event.location.dimmed()
        )
    }
}

fn heart(is_favorite: bool) -> &'static str {
    if is_favorite { "♥" } else { "♡" }
}

/// One line per event: favorite mark, status, title, date and location.
pub fn render_card(event: &Event, today: NaiveDate, favorites: &FavoriteSet) -> String {
    let is_favorite = favorites.contains(event.id);
    let mark = if is_favorite {
        heart(true).red().to_string()
    } else {
        heart(false).dimmed().to_string()
    };

    format!(
        "{} {:>4} {} {} {} {}",
        mark,
        event.id.dimmed(),
        event.status_on(today).render(),
        event.title.bold(),
        event.date.dimmed(),
        event.location.dimmed()
    )
}

fn render_section(title: &str, events: &[&Event], today: NaiveDate, favorites: &FavoriteSet) -> Vec<String> {
    let mut lines = vec![title.bold().underline().to_string()];
    if events.is_empty() {
        lines.push(format!("  {}", "Nothing here yet".dimmed()));
    }
    lines.extend(
        events
            .iter()
            .map(|event| format!("  {}", render_card(event, today, favorites))),
    );
    lines
}

fn render_home(sections: &HomeSections, today: NaiveDate, favorites: &FavoriteSet) -> String {
    let mut lines = Vec::new();
    lines.extend(render_section("Top events", &sections.featured, today, favorites));
    lines.push(String::new());
    lines.extend(render_section("Coming up", &sections.upcoming, today, favorites));
    lines.push(String::new());
    lines.extend(render_section("All events", &sections.all, today, favorites));
    lines.join("\n")
}

pub fn render_view(view: &EventView, today: NaiveDate, favorites: &FavoriteSet) -> String {
    match view {
        EventView::Home(sections) => render_home(sections, today, favorites),
        EventView::List(events) => events
            .iter()
            .map(|event| render_card(event, today, favorites))
            .collect::<Vec<_>>()
            .join("\n"),
        EventView::Empty(reason) => reason.render(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
