use chrono::{Datelike, NaiveDate};
use models::schemas::leaderboard::WindowSchema;

use crate::error::WindowError;

/// Inclusive date bounds used to select matches. A missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// First to last day of the given calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self, WindowError> {
        let invalid = || WindowError::InvalidMonth(format!("{year:04}-{month:02}"));

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self::between(start, end))
    }

    /// Calendar month containing `date`, or just that day when the month
    /// ends past chrono's last representable date.
    pub fn containing(date: NaiveDate) -> Self {
        Self::month(date.year(), date.month()).unwrap_or(Self::between(date, date))
    }

    /// Parses `YYYY-MM`.
    pub fn parse_month(value: &str) -> Result<Self, WindowError> {
        let invalid = || WindowError::InvalidMonth(value.to_string());

        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::month(year, month).map_err(|_| invalid())
    }

    /// The requested month, or the month containing `today` when none is given.
    pub fn month_or_current(month: Option<&str>, today: NaiveDate) -> Result<Self, WindowError> {
        match month {
            Some(value) if !value.trim().is_empty() => Self::parse_month(value),
            _ => Ok(Self::containing(today)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

impl From<DateWindow> for WindowSchema {
    fn from(window: DateWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
        }
    }
}
