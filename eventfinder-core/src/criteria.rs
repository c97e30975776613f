//! Filter and sort criteria for the event list.
//!
//! `Criteria` is an immutable value: every user action produces a new one
//! via the `with_*` builders instead of mutating shared filter state.

use std::fmt;
use std::str::FromStr;

use crate::period::Period;

/// Category selection. `None` on `Criteria` means no category filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Favorites,
    Named(String),
}

impl CategoryFilter {
    /// "favorites" is reserved; anything else is a category literal.
    pub fn parse(s: &str) -> Self {
        match s {
            "favorites" => CategoryFilter::Favorites,
            other => CategoryFilter::Named(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    /// Event location must contain this text
    Contains(String),
}

impl RegionFilter {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "" | "all" => RegionFilter::All,
            region => RegionFilter::Contains(region.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    TitleAsc,
    DateAsc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::TitleAsc => write!(f, "title_asc"),
            SortOrder::DateAsc => write!(f, "date_asc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title_asc" => Ok(SortOrder::TitleAsc),
            "date_asc" => Ok(SortOrder::DateAsc),
            other => Err(format!(
                "Unknown sort '{}'. Expected one of: title_asc, date_asc",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    pub category: Option<CategoryFilter>,
    pub region: RegionFilter,
    keyword: String,
    pub period: Period,
    pub status: StatusFilter,
    pub sort: SortOrder,
}

impl Criteria {
    /// Saved events only (the "save" tab).
    pub fn favorites_view() -> Self {
        Criteria {
            category: Some(CategoryFilter::Favorites),
            ..Criteria::default()
        }
    }

    /// Ended events only.
    pub fn ended_view() -> Self {
        Criteria {
            status: StatusFilter::Ended,
            ..Criteria::default()
        }
    }

    pub fn reset(&self) -> Self {
        Criteria::default()
    }

    /// Normalized search keyword (trimmed, lowercase). Empty means no filter.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Select a category. Selecting the active category clears it, and any
    /// category selection leaves the ended-only view.
    pub fn with_category_toggled(&self, category: CategoryFilter) -> Self {
        let category = if self.category.as_ref() == Some(&category) {
            None
        } else {
            Some(category)
        };

        Criteria {
            category,
            status: StatusFilter::All,
            ..self.clone()
        }
    }

    pub fn with_region(&self, region: RegionFilter) -> Self {
        Criteria {
            region,
            ..self.clone()
        }
    }

    pub fn with_keyword(&self, keyword: &str) -> Self {
        Criteria {
            keyword: keyword.trim().to_lowercase(),
            ..self.clone()
        }
    }

    pub fn with_period(&self, period: Period) -> Self {
        Criteria {
            period,
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: StatusFilter) -> Self {
        Criteria {
            status,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortOrder) -> Self {
        Criteria {
            sort,
            ..self.clone()
        }
    }

    /// No filter is active. Sort order doesn't count.
    pub fn is_home_view(&self) -> bool {
        self.category.is_none()
            && self.region == RegionFilter::All
            && self.keyword.is_empty()
            && self.period == Period::All
            && self.status == StatusFilter::All
    }
}
