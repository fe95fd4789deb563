//! Next-payment calculation and the upcoming-payments ordering the list
//! view sorts by.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{BillingCycle, Subscription};

use super::date_arith::{anchored_date, months_between, shift_months_anchored};

/// Computes the next payment occurrence relative to `reference`.
///
/// A subscription that has not started yet answers with its start date.
/// Once started, every cycle rolls strictly past a reference that falls on
/// a payment day: a daily subscription answers tomorrow, a monthly one the
/// following month's anchor day. Cycles without a recurrence rule answer
/// with the start date.
pub fn next_payment_date(reference: NaiveDate, subscription: &Subscription) -> NaiveDate {
    let start = subscription.start_date;
    if reference < start {
        return start;
    }
    match subscription.cycle {
        BillingCycle::Daily => reference + Duration::days(1),
        BillingCycle::Monthly => {
            let candidate = anchored_date(reference.year(), reference.month(), start.day());
            if candidate > reference {
                candidate
            } else {
                let (year, month) = if reference.month() == 12 {
                    (reference.year() + 1, 1)
                } else {
                    (reference.year(), reference.month() + 1)
                };
                anchored_date(year, month, start.day())
            }
        }
        BillingCycle::SemiAnnually => {
            let months_since = months_between(start, reference);
            // ceil((months_since + 1) / 6) whole periods from the start.
            let periods = (months_since + 6) / 6;
            shift_months_anchored(start, periods * 6)
        }
        BillingCycle::Annually => {
            let candidate = anchored_date(reference.year(), start.month(), start.day());
            if candidate > reference {
                candidate
            } else {
                anchored_date(reference.year() + 1, start.month(), start.day())
            }
        }
        BillingCycle::Weekly | BillingCycle::Unrecognized => start,
    }
}

/// One row of the "next payments" listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingPayment {
    pub subscription_id: Uuid,
    pub name: String,
    pub due_on: NaiveDate,
}

/// Next payment of every subscription, sorted by proximity to `reference`.
/// Input order is preserved between subscriptions due on the same day.
pub fn upcoming_payments(
    reference: NaiveDate,
    subscriptions: &[Subscription],
) -> Vec<UpcomingPayment> {
    let mut upcoming: Vec<UpcomingPayment> = subscriptions
        .iter()
        .map(|subscription| UpcomingPayment {
            subscription_id: subscription.id,
            name: subscription.name.clone(),
            due_on: next_payment_date(reference, subscription),
        })
        .collect();
    upcoming.sort_by_key(|payment| payment.due_on);
    upcoming
}
