//! Lifecycle status of an event relative to a given day.

use std::fmt;

use chrono::NaiveDate;

use crate::date_expr::DateSpan;
use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Ended,
}

impl EventStatus {
    /// Priority on the home page: ongoing first, then upcoming, then ended.
    pub fn rank(self) -> u8 {
        match self {
            EventStatus::Ongoing => 1,
            EventStatus::Upcoming => 2,
            EventStatus::Ended => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Ended => "Ended",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn derive_status(span: &DateSpan, today: NaiveDate) -> EventStatus {
    if today < span.start {
        EventStatus::Upcoming
    } else if today > span.end {
        EventStatus::Ended
    } else {
        EventStatus::Ongoing
    }
}

/// Status of an event. Events whose date cannot be parsed count as ended.
pub fn event_status(event: &Event, today: NaiveDate) -> EventStatus {
    match event.span() {
        Ok(span) => derive_status(&span, today),
        Err(e) => {
            tracing::debug!(id = event.id, date = %event.date, error = %e, "unparseable event date, treating as ended");
            EventStatus::Ended
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::test_support::event;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_status_scenarios() {
        let e = event(1, "Winter Fair", "2024-01-01~2024-01-10");

        assert_eq!(e.status_on(ymd(2024, 1, 5)), EventStatus::Ongoing);
        assert_eq!(e.status_on(ymd(2023, 12, 31)), EventStatus::Upcoming);
        assert_eq!(e.status_on(ymd(2024, 1, 11)), EventStatus::Ended);
    }

    #[test]
    fn test_boundaries_are_ongoing() {
        let e = event(1, "Winter Fair", "2024-01-01~2024-01-10");

        assert_eq!(e.status_on(ymd(2024, 1, 1)), EventStatus::Ongoing);
        assert_eq!(e.status_on(ymd(2024, 1, 10)), EventStatus::Ongoing);
    }

    #[test]
    fn test_single_day_event() {
        let e = event(1, "Fireworks", "2024-10-05");

        assert_eq!(e.status_on(ymd(2024, 10, 4)), EventStatus::Upcoming);
        assert_eq!(e.status_on(ymd(2024, 10, 5)), EventStatus::Ongoing);
        assert_eq!(e.status_on(ymd(2024, 10, 6)), EventStatus::Ended);
    }

    #[test]
    fn test_unparseable_date_is_ended() {
        let e = event(1, "Mystery", "sometime soon");
        assert_eq!(e.status_on(ymd(2024, 1, 1)), EventStatus::Ended);
    }

    #[test]
    fn test_status_matches_span_for_every_day() {
        let span = DateSpan::parse("2024-02-27~2024-03-02").unwrap();
        let mut day = ymd(2024, 2, 20);

        while day <= ymd(2024, 3, 10) {
            let status = derive_status(&span, day);
            let expected = if day < span.start {
                EventStatus::Upcoming
            } else if day > span.end {
                EventStatus::Ended
            } else {
                EventStatus::Ongoing
            };
            assert_eq!(status, expected, "day {day}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_rank_order() {
        assert!(EventStatus::Ongoing.rank() < EventStatus::Upcoming.rank());
        assert!(EventStatus::Upcoming.rank() < EventStatus::Ended.rank());
    }
}
