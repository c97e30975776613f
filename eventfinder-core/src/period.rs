//! Calendar windows used by the "this week" / "this month" filters.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::date_expr::DateSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    All,
    Week,
    Month,
}

impl Period {
    /// Window of days covered by this period, or `None` for `All`.
    ///
    /// Weeks start on Sunday. Months run from the first to the last day.
    pub fn window(self, today: NaiveDate) -> Option<DateSpan> {
        match self {
            Period::All => None,
            Period::Week => {
                let offset = today.weekday().num_days_from_sunday() as i64;
                let start = today - Duration::days(offset);
                let end = start + Duration::days(6);
                Some(DateSpan { start, end })
            }
            Period::Month => {
                let start = today.with_day(1)?;
                let next_month = if today.month() == 12 {
                    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)?
                };
                let end = next_month.pred_opt()?;
                Some(DateSpan { start, end })
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::All => write!(f, "all"),
            Period::Week => write!(f, "week"),
            Period::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Period::All),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            other => Err(format!(
                "Unknown period '{}'. Expected one of: all, week, month",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2024-01-10 is a Wednesday
        let window = Period::Week.window(ymd(2024, 1, 10)).unwrap();
        assert_eq!(window.start, ymd(2024, 1, 7));
        assert_eq!(window.end, ymd(2024, 1, 13));
    }

    #[test]
    fn test_week_on_sunday_itself() {
        let window = Period::Week.window(ymd(2024, 1, 7)).unwrap();
        assert_eq!(window.start, ymd(2024, 1, 7));
    }

    #[test]
    fn test_week_crossing_year() {
        // 2025-01-01 is a Wednesday
        let window = Period::Week.window(ymd(2025, 1, 1)).unwrap();
        assert_eq!(window.start, ymd(2024, 12, 29));
        assert_eq!(window.end, ymd(2025, 1, 4));
    }

    #[test]
    fn test_month_window() {
        let window = Period::Month.window(ymd(2024, 2, 14)).unwrap();
        assert_eq!(window.start, ymd(2024, 2, 1));
        assert_eq!(window.end, ymd(2024, 2, 29));

        let december = Period::Month.window(ymd(2024, 12, 31)).unwrap();
        assert_eq!(december.start, ymd(2024, 12, 1));
        assert_eq!(december.end, ymd(2024, 12, 31));
    }

    #[test]
    fn test_all_has_no_window() {
        assert!(Period::All.window(ymd(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("week".parse::<Period>(), Ok(Period::Week));
        assert!("fortnight".parse::<Period>().is_err());
    }
}
