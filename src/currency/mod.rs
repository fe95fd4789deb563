//! Currency codes and the multiplier table used to fold amounts into the
//! reference currency.

pub mod provider;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub use provider::{CachedRateProvider, Clock, RateSource, SystemClock};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("JPY")
    }
}

/// Multipliers from foreign currencies into the reference currency.
///
/// The table is supplied by the exchange-rate collaborator; a missing entry
/// means "no conversion" (multiplier 1), which keeps aggregation total even
/// when the collaborator returns a partial or empty table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateTable {
    pub base: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new(base: CurrencyCode) -> Self {
        Self {
            base,
            rates: HashMap::new(),
        }
    }

    /// Parses a rate object such as `{"JPY": 1.0, "USD": 150.0}` against the
    /// default reference currency.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let raw: HashMap<String, f64> = serde_json::from_str(json)?;
        let mut table = Self::default();
        for (code, rate) in raw {
            table.insert(CurrencyCode::new(code), rate);
        }
        Ok(table)
    }

    pub fn insert(&mut self, code: CurrencyCode, rate: f64) {
        self.rates.insert(code, rate);
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Multiplier into the reference currency for `code`.
    pub fn multiplier_for(&self, code: &CurrencyCode) -> f64 {
        if *code == self.base {
            return 1.0;
        }
        match self.rates.get(code) {
            Some(rate) => *rate,
            None => {
                tracing::debug!(currency = code.as_str(), "no rate on record, using parity");
                1.0
            }
        }
    }

    /// Converts `amount` in `code` into the reference currency.
    pub fn convert(&self, amount: f64, code: &CurrencyCode) -> f64 {
        amount * self.multiplier_for(code)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}
