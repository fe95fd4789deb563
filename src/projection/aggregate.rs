//! Folds subscription occurrences over a date window into the per-day and
//! per-category totals the calendar view renders.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::{CurrencyCode, RateTable};
use crate::domain::{DateWindow, Subscription};

use super::occurrence::is_occurrence_on;

/// A single payment occurrence inside a day's breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OccurrenceEntry {
    pub subscription_id: Uuid,
    pub name: String,
    pub category: String,
    /// Amount in the subscription's own currency.
    pub amount: f64,
    pub currency: CurrencyCode,
    /// Amount folded into the reference currency.
    pub converted: f64,
}

/// All occurrences that fall on one day, with their converted total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayBreakdown {
    pub total: f64,
    pub items: Vec<OccurrenceEntry>,
}

/// Projection of a subscription set over a date window.
///
/// `per_date` holds an entry only for days with at least one occurrence and
/// iterates chronologically; items within a day keep the input subscription
/// order. `per_category` iterates in category name order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeSummary {
    pub window: DateWindow,
    pub per_date: BTreeMap<NaiveDate, DayBreakdown>,
    pub per_category: BTreeMap<String, f64>,
}

impl RangeSummary {
    /// Sum of every day's converted total.
    pub fn grand_total(&self) -> f64 {
        self.per_date.values().map(|day| day.total).sum()
    }
}

/// Projects every subscription over the window, converting each occurrence
/// into the reference currency with the supplied rate table.
///
/// Never fails for well-formed inputs: an empty rate table degrades every
/// conversion to parity, and a subscription with no occurrences in the
/// window simply contributes nothing.
pub fn aggregate_range(
    window: DateWindow,
    subscriptions: &[Subscription],
    rates: &RateTable,
) -> RangeSummary {
    let mut per_date: BTreeMap<NaiveDate, DayBreakdown> = BTreeMap::new();
    let mut per_category: BTreeMap<String, f64> = BTreeMap::new();

    for day in window.days() {
        for subscription in subscriptions {
            if !is_occurrence_on(day, subscription) {
                continue;
            }
            let converted = rates.convert(subscription.amount, &subscription.currency);
            let breakdown = per_date.entry(day).or_default();
            breakdown.total += converted;
            breakdown.items.push(OccurrenceEntry {
                subscription_id: subscription.id,
                name: subscription.name.clone(),
                category: subscription.category.clone(),
                amount: subscription.amount,
                currency: subscription.currency.clone(),
                converted,
            });
            *per_category.entry(subscription.category.clone()).or_insert(0.0) += converted;
        }
    }

    RangeSummary {
        window,
        per_date,
        per_category,
    }
}
