//! The event filter/sort engine.
//!
//! Everything here is a pure function of the catalog, the criteria, the
//! favorite ids and the current day.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::criteria::{CategoryFilter, Criteria, RegionFilter, SortOrder, StatusFilter};
use crate::event::Event;
use crate::favorites::FavoriteSet;
use crate::status::{EventStatus, derive_status};

/// Number of events in each home page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub featured_count: usize,
    pub upcoming_count: usize,
}

impl Default for HomeLayout {
    fn default() -> Self {
        HomeLayout {
            featured_count: 4,
            upcoming_count: 8,
        }
    }
}

/// Windows over one home-ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSections<'a> {
    pub featured: Vec<&'a Event>,
    pub upcoming: Vec<&'a Event>,
    pub all: Vec<&'a Event>,
}

/// Why a selection came back empty. Each case gets its own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoFavorites,
    NoEndedEvents,
    NoMatches,
}

impl EmptyReason {
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoFavorites => {
                "Your favorites list is empty. Save events you're interested in!"
            }
            EmptyReason::NoEndedEvents => "No ended events, or nothing matched your filters.",
            EmptyReason::NoMatches => "No events found.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventView<'a> {
    Home(HomeSections<'a>),
    List(Vec<&'a Event>),
    Empty(EmptyReason),
}

/// Filter and sort events. All active filters must match.
pub fn select_events<'a>(
    events: &'a [Event],
    criteria: &Criteria,
    favorites: &FavoriteSet,
    today: NaiveDate,
) -> Vec<&'a Event> {
    let window = criteria.period.window(today);

    let mut selected: Vec<&Event> = events
        .iter()
        .filter(|e| match criteria.status {
            StatusFilter::All => true,
            StatusFilter::Ended => e.status_on(today) == EventStatus::Ended,
        })
        .filter(|e| match &criteria.category {
            None => true,
            Some(CategoryFilter::Favorites) => favorites.contains(e.id),
            Some(CategoryFilter::Named(name)) => &e.category == name,
        })
        .filter(|e| match &criteria.region {
            RegionFilter::All => true,
            RegionFilter::Contains(region) => e.location.contains(region.as_str()),
        })
        .filter(|e| matches_keyword(e, criteria.keyword()))
        .filter(|e| match &window {
            None => true,
            Some(window) => e.span().is_ok_and(|span| span.intersects(window)),
        })
        .collect();

    match criteria.sort {
        SortOrder::TitleAsc => selected.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortOrder::DateAsc => selected.sort_by(|a, b| compare_start_dates(a, b)),
    }

    selected
}

/// Build what the event list should show for these criteria.
pub fn build_view<'a>(
    events: &'a [Event],
    criteria: &Criteria,
    favorites: &FavoriteSet,
    today: NaiveDate,
    layout: HomeLayout,
) -> EventView<'a> {
    let selected = select_events(events, criteria, favorites, today);

    if selected.is_empty() {
        return EventView::Empty(empty_reason(events, criteria));
    }

    if criteria.is_home_view() {
        EventView::Home(home_sections(events, today, layout))
    } else {
        EventView::List(selected)
    }
}

fn empty_reason(events: &[Event], criteria: &Criteria) -> EmptyReason {
    if criteria.category == Some(CategoryFilter::Favorites) && !events.is_empty() {
        EmptyReason::NoFavorites
    } else if criteria.status == StatusFilter::Ended {
        EmptyReason::NoEndedEvents
    } else {
        EmptyReason::NoMatches
    }
}

/// Sort by home priority and split into the home page sections.
pub fn home_sections(events: &[Event], today: NaiveDate, layout: HomeLayout) -> HomeSections<'_> {
    let mut all: Vec<&Event> = events.iter().collect();
    all.sort_by(|a, b| home_order(a, b, today));

    let featured = all.iter().copied().take(layout.featured_count).collect();
    let upcoming = all
        .iter()
        .copied()
        .filter(|e| e.status_on(today) == EventStatus::Upcoming)
        .take(layout.upcoming_count)
        .collect();

    HomeSections {
        featured,
        upcoming,
        all,
    }
}

/// Home page order: ongoing events ending soonest, then upcoming events
/// starting soonest, then ended events most recent first.
pub fn home_order(a: &Event, b: &Event, today: NaiveDate) -> Ordering {
    let key = |e: &Event| {
        let span = e.span().ok();
        let status = match &span {
            Some(span) => derive_status(span, today),
            None => EventStatus::Ended,
        };
        (status, span)
    };

    let (status_a, span_a) = key(a);
    let (status_b, span_b) = key(b);

    status_a.rank().cmp(&status_b.rank()).then_with(|| {
        match (span_a, span_b) {
            (Some(sa), Some(sb)) => match status_a {
                EventStatus::Ongoing => sa.end.cmp(&sb.end),
                EventStatus::Upcoming => sa.start.cmp(&sb.start),
                EventStatus::Ended => sb.end.cmp(&sa.end),
            },
            // undated events trail the dated ones
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    })
}

fn matches_keyword(event: &Event, keyword: &str) -> bool {
    keyword.is_empty()
        || event.title.to_lowercase().contains(keyword)
        || event.location.to_lowercase().contains(keyword)
}

/// Case-insensitive title order, ties broken by the raw title.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_start_dates(a: &Event, b: &Event) -> Ordering {
    match (a.span().ok(), b.span().ok()) {
        (Some(sa), Some(sb)) => sa.start.cmp(&sb.start),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
