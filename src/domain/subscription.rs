//! Domain models for subscriptions and their billing cadences.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;

/// Enumerates the billing cadences accepted from stored subscription records.
///
/// `Weekly` survives in older records but carries no recurrence rule; like
/// `Unrecognized` it only ever matches its start date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    Daily,
    Weekly,
    Monthly,
    SemiAnnually,
    Annually,
    #[serde(other)]
    Unrecognized,
}

impl BillingCycle {
    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Daily => "Daily",
            BillingCycle::Weekly => "Weekly",
            BillingCycle::Monthly => "Monthly",
            BillingCycle::SemiAnnually => "Semi-annually",
            BillingCycle::Annually => "Annually",
            BillingCycle::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillingCycle {
    type Err = std::convert::Infallible;

    /// Parses the upstream wire spelling. Unknown input degrades to
    /// `Unrecognized` rather than failing; the warning marks the boundary
    /// where untrusted cycle strings enter the engine.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "DAILY" => BillingCycle::Daily,
            "WEEKLY" => BillingCycle::Weekly,
            "MONTHLY" => BillingCycle::Monthly,
            "SEMI_ANNUALLY" => BillingCycle::SemiAnnually,
            "ANNUALLY" => BillingCycle::Annually,
            other => {
                tracing::warn!(cycle = other, "unrecognized billing cycle");
                BillingCycle::Unrecognized
            }
        })
    }
}

/// Read-only subscription snapshot consumed by the projection engine.
///
/// The owning repository holds the canonical record; projections re-derive
/// everything from this value per query. Comparisons against `start_date`
/// are date-only throughout the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub currency: CurrencyCode,
    pub cycle: BillingCycle,
    pub category: String,
    pub start_date: NaiveDate,
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        currency: CurrencyCode,
        cycle: BillingCycle,
        category: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            currency,
            cycle,
            category: category.into(),
            start_date,
        }
    }
}
