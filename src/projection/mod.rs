//! Pure calendar projection over subscription snapshots: the recurrence
//! predicate, the next-payment calculator, and the range aggregator.

pub mod aggregate;
mod date_arith;
pub mod next_payment;
pub mod occurrence;

pub use aggregate::{aggregate_range, DayBreakdown, OccurrenceEntry, RangeSummary};
pub use next_payment::{next_payment_date, upcoming_payments, UpcomingPayment};
pub use occurrence::is_occurrence_on;
