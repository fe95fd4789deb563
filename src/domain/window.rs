use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Inclusive day range over which occurrences are projected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if end < start {
            return Err(CoreError::InvalidInput(
                "window end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Builds the window covering a displayed calendar month.
    pub fn month(year: i32, month: u32) -> Result<Self, CoreError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            CoreError::InvalidInput(format!("invalid calendar month {year}-{month:02}"))
        })?;
        let last = (first + Months::new(1)).pred_opt().ok_or_else(|| {
            CoreError::InvalidInput(format!("could not compute last day of {year}-{month:02}"))
        })?;
        Ok(Self {
            start: first,
            end: last,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates the window's dates in chronological order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}
