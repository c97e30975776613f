use std::path::PathBuf;

use chrono::NaiveDate;
use eventfinder_core::criteria::{CategoryFilter, Criteria, RegionFilter, SortOrder};
use eventfinder_core::event::EventCatalog;
use eventfinder_core::favorites::{FavoriteSet, toggle_favorite};
use eventfinder_core::geo::{Coordinates, nearby_events};
use eventfinder_core::loader::{DataSource, load_catalog};
use eventfinder_core::period::Period;
use eventfinder_core::reviews::ReviewBook;
use eventfinder_core::select::{EmptyReason, EventView, HomeLayout, build_view, select_events};
use eventfinder_core::status::EventStatus;
use eventfinder_core::store::FileStore;
use eventfinder_core::Event;

const SEOUL_CITY_HALL: Coordinates = Coordinates {
    lat: 37.5668,
    lng: 126.9785,
};

fn fixture() -> DataSource {
    DataSource::File(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.json"))
}

// Monday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
}

fn ids(events: &[&Event]) -> Vec<i64> {
    events.iter().map(|e| e.id).collect()
}

async fn catalog() -> EventCatalog {
    load_catalog(&fixture()).await.expect("fixture should load")
}

#[tokio::test]
async fn home_view_orders_by_status_priority() {
    let catalog = catalog().await;

    let view = build_view(
        catalog.events(),
        &Criteria::default(),
        &FavoriteSet::default(),
        today(),
        HomeLayout::default(),
    );

    let EventView::Home(sections) = view else {
        panic!("expected the home view");
    };
    assert_eq!(ids(&sections.all), vec![8, 1, 3, 11, 2, 4, 7, 6, 12]);
    assert_eq!(ids(&sections.featured), vec![8, 1, 3, 11]);
    assert_eq!(ids(&sections.upcoming), vec![3, 11, 2]);
}

#[tokio::test]
async fn statuses_on_fixture() {
    let catalog = catalog().await;
    let status = |id| catalog.find(id).unwrap().status_on(today());

    assert_eq!(status(1), EventStatus::Ongoing);
    assert_eq!(status(2), EventStatus::Upcoming);
    assert_eq!(status(4), EventStatus::Ended);
    assert_eq!(status(7), EventStatus::Ended);
    // undated
    assert_eq!(status(12), EventStatus::Ended);
}

#[tokio::test]
async fn title_sort_follows_hangul_order() {
    let catalog = catalog().await;
    let selected = select_events(
        catalog.events(),
        &Criteria::default(),
        &FavoriteSet::default(),
        today(),
    );
    assert_eq!(ids(&selected), vec![11, 3, 12, 6, 2, 1, 4, 8, 7]);
}

#[tokio::test]
async fn this_week_by_date() {
    let catalog = catalog().await;
    let criteria = Criteria::default()
        .with_period(Period::Week)
        .with_sort(SortOrder::DateAsc);

    let view = build_view(
        catalog.events(),
        &criteria,
        &FavoriteSet::default(),
        today(),
        HomeLayout::default(),
    );
    let EventView::List(events) = view else {
        panic!("expected a filtered list");
    };
    assert_eq!(ids(&events), vec![1, 8, 4, 3]);
}

#[tokio::test]
async fn seoul_popups_matching_keyword() {
    let catalog = catalog().await;
    let criteria = Criteria::default()
        .with_category_toggled(CategoryFilter::Named("popup".into()))
        .with_region(RegionFilter::parse("서울"))
        .with_keyword("팝업");

    let selected = select_events(
        catalog.events(),
        &criteria,
        &FavoriteSet::default(),
        today(),
    );
    assert_eq!(ids(&selected), vec![6, 1]);
}

#[tokio::test]
async fn ended_view_includes_undated_events() {
    let catalog = catalog().await;
    let selected = select_events(
        catalog.events(),
        &Criteria::ended_view(),
        &FavoriteSet::default(),
        today(),
    );
    assert_eq!(ids(&selected), vec![12, 6, 4, 7]);
}

#[tokio::test]
async fn favorites_persist_across_loads() {
    let catalog = catalog().await;
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let empty = build_view(
        catalog.events(),
        &Criteria::favorites_view(),
        &FavoriteSet::load(&store).unwrap(),
        today(),
        HomeLayout::default(),
    );
    assert_eq!(empty, EventView::Empty(EmptyReason::NoFavorites));

    toggle_favorite(&store, 7).unwrap();
    toggle_favorite(&store, 2).unwrap();

    let reopened = FileStore::new(dir.path());
    let favorites = FavoriteSet::load(&reopened).unwrap();
    let selected = select_events(
        catalog.events(),
        &Criteria::favorites_view(),
        &favorites,
        today(),
    );
    assert_eq!(ids(&selected), vec![2, 7]);
}

#[tokio::test]
async fn reviews_are_scoped_per_event() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let review = ReviewBook::new(&store, 1).add("Loved the photo zone").unwrap();
    ReviewBook::new(&store, 2).add("Crowded but worth it").unwrap();

    assert_eq!(ReviewBook::new(&store, 1).list().unwrap(), vec![review.clone()]);

    ReviewBook::new(&store, 1).delete(review.id).unwrap();
    assert!(ReviewBook::new(&store, 1).list().unwrap().is_empty());
    assert_eq!(ReviewBook::new(&store, 2).list().unwrap().len(), 1);
}

#[tokio::test]
async fn nearby_from_city_hall() {
    let catalog = catalog().await;

    let nearby = nearby_events(catalog.events(), SEOUL_CITY_HALL, 500.0);
    let order: Vec<i64> = nearby.iter().map(|n| n.event.id).collect();

    // Gangneung has no coordinates
    assert_eq!(order, vec![4, 6, 1, 12, 3, 7, 2, 8]);
    assert!(nearby[0].distance_km < 5.0);

    let closest: Vec<i64> = order.into_iter().take(4).collect();
    assert_eq!(closest, vec![4, 6, 1, 12]);
}
