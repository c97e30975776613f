//! Per-event user reviews, kept in the local store.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EventfinderError, EventfinderResult};
use crate::store::{KeyValueStore, read_json, write_json};

pub const MAX_REVIEW_CHARS: usize = 100;

/// Reviews are not tied to an account.
pub const ANONYMOUS_USER: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Milliseconds since the epoch at creation
    pub id: i64,
    pub text: String,
    pub user: String,
    pub date: NaiveDate,
}

/// Store key for an event's review list.
pub fn reviews_key(event_id: i64) -> String {
    format!("reviews_{}", event_id)
}

/// The reviews of one event.
pub struct ReviewBook<'a> {
    store: &'a dyn KeyValueStore,
    event_id: i64,
}

impl<'a> ReviewBook<'a> {
    pub fn new(store: &'a dyn KeyValueStore, event_id: i64) -> Self {
        ReviewBook { store, event_id }
    }

    pub fn list(&self) -> EventfinderResult<Vec<Review>> {
        let reviews: Option<Vec<Review>> = read_json(self.store, &reviews_key(self.event_id))?;
        Ok(reviews.unwrap_or_default())
    }

    pub fn add(&self, text: &str) -> EventfinderResult<Review> {
        self.add_at(text, Local::now())
    }

    /// Add a review created at `now`.
    pub fn add_at(&self, text: &str, now: DateTime<Local>) -> EventfinderResult<Review> {
        let text = validate_text(text)?;
        let mut reviews = self.list()?;

        // ids come from the clock; bump past any review created in the same millisecond
        let mut id = now.timestamp_millis();
        if let Some(max) = reviews.iter().map(|r| r.id).max() {
            let next = max.checked_add(1).ok_or_else(|| {
                EventfinderError::Storage(format!("review id {} cannot be followed", max))
            })?;
            id = id.max(next);
        }

        let review = Review {
            id,
            text,
            user: ANONYMOUS_USER.to_string(),
            date: now.date_naive(),
        };
        reviews.push(review.clone());
        self.save(&reviews)?;

        tracing::debug!(event_id = self.event_id, review_id = id, "added review");
        Ok(review)
    }

    pub fn delete(&self, review_id: i64) -> EventfinderResult<()> {
        let mut reviews = self.list()?;
        let before = reviews.len();
        reviews.retain(|r| r.id != review_id);

        if reviews.len() == before {
            return Err(EventfinderError::ReviewNotFound(review_id));
        }

        self.save(&reviews)?;
        tracing::debug!(event_id = self.event_id, review_id, "deleted review");
        Ok(())
    }

    fn save(&self, reviews: &[Review]) -> EventfinderResult<()> {
        write_json(self.store, &reviews_key(self.event_id), &reviews)
    }
}

fn validate_text(text: &str) -> EventfinderResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EventfinderError::InvalidReview(
            "review text is required".into(),
        ));
    }

    let chars = text.chars().count();
    if chars > MAX_REVIEW_CHARS {
        return Err(EventfinderError::InvalidReview(format!(
            "review is {} characters, the limit is {}",
            chars, MAX_REVIEW_CHARS
        )));
    }

    Ok(text.to_string())
}
