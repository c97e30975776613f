//! Parsing of event date expressions.
//!
//! An event carries its dates as free text: either a single day
//! (`2024-05-01`) or a range separated by `~` (`2024-05-01 ~ 2024-05-31`).

use chrono::NaiveDate;
use thiserror::Error;

/// Separator between the start and end of a date range.
pub const RANGE_SEPARATOR: char = '~';

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateExprError {
    #[error("empty date expression")]
    Empty,

    #[error("unrecognized date '{0}'")]
    InvalidDate(String),

    #[error("range starts after it ends ({start} > {end})")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// Inclusive span of days covered by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateExprError> {
        if start > end {
            return Err(DateExprError::Inverted { start, end });
        }
        Ok(DateSpan { start, end })
    }

    /// Parse a date expression. A single date is both start and end.
    pub fn parse(expr: &str) -> Result<Self, DateExprError> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(DateExprError::Empty);
        }

        // only the first two parts count; "a~b~c" is the range a..b
        let mut parts = expr.split(RANGE_SEPARATOR);
        let start = parse_date(parts.next().unwrap_or_default())?;
        let end = match parts.next() {
            Some(end) => parse_date(end)?,
            None => start,
        };

        DateSpan::new(start, end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// True if the two inclusive spans share at least one day.
    pub fn intersects(&self, other: &DateSpan) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, DateExprError> {
    // "2024.01.05." is a common way of writing dates in the source data
    let s = s.trim().trim_end_matches('.');

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| DateExprError::InvalidDate(s.to_string()))
}
