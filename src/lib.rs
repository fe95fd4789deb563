#![doc(test(attr(deny(warnings))))]

//! Subscription Core offers the recurrence, next-payment, and calendar
//! aggregation primitives that power subscription tracking views.

pub mod currency;
pub mod domain;
pub mod errors;
pub mod projection;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subscription Core tracing initialized.");
    });
}
