//! Exchange-rate collaborator with an injected clock and a TTL-bounded cache.
//!
//! The projection engine never fetches or caches rates itself; it consumes a
//! [`RateTable`] value. This module hosts the collaborator that owns the
//! fetch/cache lifecycle for callers that want one.

use std::sync::Mutex;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::RateTable;
use crate::errors::CoreError;

/// Clock abstracts access to the current timestamp so services remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Upstream source of rate tables, typically a remote API client.
pub trait RateSource: Send + Sync {
    fn fetch(&self) -> Result<RateTable, CoreError>;
}

struct CachedRates {
    table: RateTable,
    fetched_at: DateTime<Utc>,
}

/// Serves rate tables from an upstream source, caching each fetch for a
/// fixed time-to-live.
pub struct CachedRateProvider<S: RateSource, C: Clock> {
    source: S,
    clock: C,
    ttl: Duration,
    state: Mutex<Option<CachedRates>>,
}

impl<S: RateSource, C: Clock> CachedRateProvider<S, C> {
    pub fn new(source: S, clock: C, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            state: Mutex::new(None),
        }
    }

    /// Returns the cached table while it is fresh, refetching otherwise.
    pub fn get_rates(&self) -> Result<RateTable, CoreError> {
        let now = self.clock.now();
        let mut state = self.state.lock().expect("rate cache lock poisoned");
        if let Some(cached) = state.as_ref() {
            if now - cached.fetched_at < self.ttl {
                return Ok(cached.table.clone());
            }
            tracing::debug!("rate cache expired, refetching");
        }
        let table = self.source.fetch()?;
        *state = Some(CachedRates {
            table: table.clone(),
            fetched_at: now,
        });
        Ok(table)
    }

    /// Drops the cached table; the next `get_rates` call refetches.
    pub fn invalidate(&self) {
        let mut state = self.state.lock().expect("rate cache lock poisoned");
        *state = None;
    }
}
