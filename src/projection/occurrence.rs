//! Recurrence predicate over subscription billing cycles.

use chrono::{Datelike, NaiveDate};

use crate::domain::{BillingCycle, Subscription};

use super::date_arith::{anchor_day, months_between};

/// Returns whether `date` is a payment occurrence for the subscription.
///
/// Pure and date-only. The start date is itself an occurrence for every
/// cycle; no date before it ever is. Month-based cycles land on the start
/// day clamped to the last valid day of the target month, so a day-31
/// subscription bills on Apr 30 and Feb 28/29.
pub fn is_occurrence_on(date: NaiveDate, subscription: &Subscription) -> bool {
    let start = subscription.start_date;
    if date < start {
        return false;
    }
    if date == start {
        return true;
    }
    match subscription.cycle {
        BillingCycle::Daily => true,
        BillingCycle::Monthly => date.day() == anchor_day(date.year(), date.month(), start.day()),
        BillingCycle::SemiAnnually => {
            let months = months_between(start, date);
            months >= 0
                && months % 6 == 0
                && date.day() == anchor_day(date.year(), date.month(), start.day())
        }
        BillingCycle::Annually => {
            date.month() == start.month()
                && date.day() == anchor_day(date.year(), date.month(), start.day())
        }
        // Weekly never entered the validated recurrence set; it and unknown
        // cycles match nothing beyond the start date.
        BillingCycle::Weekly | BillingCycle::Unrecognized => false,
    }
}
