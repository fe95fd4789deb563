//! One-stop report assembly for the calendar month view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::RateTable;
use crate::domain::{DateWindow, Subscription};
use crate::errors::CoreError;
use crate::projection::{aggregate_range, upcoming_payments, RangeSummary, UpcomingPayment};

/// Everything the month view renders: the day grid totals and the
/// next-payment listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthReport {
    pub summary: RangeSummary,
    pub upcoming: Vec<UpcomingPayment>,
}

pub struct CalendarService;

impl CalendarService {
    /// Produces the report for a displayed month. `reference` is the "now"
    /// the upcoming-payment listing is sorted against; it does not have to
    /// fall inside the displayed month.
    pub fn month_report(
        year: i32,
        month: u32,
        subscriptions: &[Subscription],
        rates: &RateTable,
        reference: NaiveDate,
    ) -> Result<MonthReport, CoreError> {
        let window = DateWindow::month(year, month)?;
        let summary = aggregate_range(window, subscriptions, rates);
        let upcoming = upcoming_payments(reference, subscriptions);
        Ok(MonthReport { summary, upcoming })
    }
}
