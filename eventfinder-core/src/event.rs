//! Event records and the loaded event catalog.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::date_expr::{DateExprError, DateSpan};
use crate::geo::Coordinates;
use crate::status::EventStatus;

/// A single discoverable event (festival, pop-up store, exhibition...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    /// Single date or a `start~end` range, as written in the source data
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
}

/// Text fields that are null or not a string read as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Only JSON numbers count as coordinates; `"37.5"` or `null` is no position.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n.as_f64()),
        _ => Ok(None),
    }
}

impl Event {
    pub fn span(&self) -> Result<DateSpan, DateExprError> {
        DateSpan::parse(&self.date)
    }

    /// Coordinates, if both are present and finite.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Coordinates::new(lat, lng))
            }
            _ => None,
        }
    }

    pub fn status_on(&self, today: NaiveDate) -> EventStatus {
        crate::status::event_status(self, today)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Shape of the static JSON document. Records are kept raw so one bad
/// record can be dropped without failing the whole document.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventDocument {
    pub events: Vec<Value>,
}

impl EventDocument {
    /// Records that deserialize as events. The rest are logged and skipped.
    pub fn into_events(self) -> Vec<Event> {
        self.events
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let id = record.get("id").cloned();
                match serde_json::from_value::<Event>(record) {
                    Ok(event) => Some(event),
                    Err(e) => {
                        tracing::warn!(index, id = ?id, error = %e, "skipping malformed event record");
                        None
                    }
                }
            })
            .collect()
    }
}

/// The full collection of events, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Build a catalog, keeping the first occurrence of each id.
    pub fn new(events: Vec<Event>) -> Self {
        let mut seen = HashSet::new();
        let events = events
            .into_iter()
            .filter(|event| {
                let fresh = seen.insert(event.id);
                if !fresh {
                    tracing::warn!(id = event.id, title = %event.title, "dropping event with duplicate id");
                } else if let Err(e) = event.span() {
                    tracing::warn!(id = event.id, date = %event.date, error = %e, "event date cannot be parsed");
                }
                fresh
            })
            .collect();

        EventCatalog { events }
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let document: EventDocument = serde_json::from_str(content)?;
        Ok(EventCatalog::new(document.into_events()))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn find(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .map(|e| e.category.as_str())
            .filter(|c| !c.is_empty() && seen.insert(*c))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_with_missing_fields() {
        let json = r#"{
            "events": [
                {"id": 1, "title": "Pink Pop-up", "date": "2024-05-01~2024-05-31",
                 "location": "서울 성동구", "category": "popup", "lat": 37.54, "lng": 127.05,
                 "description": "pop-up", "image": "images/pink.png"},
                {"id": 2, "title": "No coords", "date": "2024-06-01", "lat": null}
            ]
        }"#;

        let catalog = EventCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = catalog.find(1).unwrap();
        assert_eq!(first.location, "서울 성동구");
        assert!(first.coordinates().is_some());

        let second = catalog.find(2).unwrap();
        assert_eq!(second.category, "");
        assert!(second.coordinates().is_none());
    }

    #[test]
    fn test_string_coordinates_mean_no_position() {
        let json = r#"{
            "events": [
                {"id": 1, "title": "Seongsu", "date": "2024-05-01", "lat": 37.54, "lng": 127.05},
                {"id": 2, "title": "Gwangalli", "date": "2024-05-02", "lat": "37.5", "lng": 129.1}
            ]
        }"#;

        let catalog = EventCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find(1).unwrap().coordinates().is_some());
        assert_eq!(catalog.find(2).unwrap().lat, None);
        assert!(catalog.find(2).unwrap().coordinates().is_none());
    }

    #[test]
    fn test_null_text_fields_read_as_empty() {
        let json = r#"{
            "events": [
                {"id": 1, "title": "Seongsu", "date": "2024-05-01"},
                {"id": 2, "title": null, "date": null, "location": 42}
            ]
        }"#;

        let catalog = EventCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let second = catalog.find(2).unwrap();
        assert_eq!(second.title, "");
        assert_eq!(second.date, "");
        assert_eq!(second.location, "");
        assert!(second.span().is_err());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let json = r#"{
            "events": [
                {"id": 1, "title": "kept", "date": "2024-05-01"},
                {"id": "two", "title": "bad id", "date": "2024-05-02"},
                {"title": "no id"},
                "not an object"
            ]
        }"#;

        let catalog = EventCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(1).unwrap().title, "kept");
    }

    #[test]
    fn test_missing_events_array_is_an_error() {
        assert!(EventCatalog::from_json(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let catalog = EventCatalog::new(vec![
            test_support::event(7, "first", "2024-01-01"),
            test_support::event(7, "second", "2024-01-02"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(7).unwrap().title, "first");
    }

    #[test]
    fn test_non_finite_coordinates_are_ignored() {
        let mut event = test_support::event(1, "x", "2024-01-01");
        event.lat = Some(f64::NAN);
        event.lng = Some(127.0);
        assert!(event.coordinates().is_none());
    }

    #[test]
    fn test_categories_are_distinct_in_order() {
        let mut a = test_support::event(1, "a", "2024-01-01");
        a.category = "festival".into();
        let mut b = test_support::event(2, "b", "2024-01-01");
        b.category = "popup".into();
        let mut c = test_support::event(3, "c", "2024-01-01");
        c.category = "festival".into();

        let catalog = EventCatalog::new(vec![a, b, c]);
        assert_eq!(catalog.categories(), vec!["festival", "popup"]);
    }
}
