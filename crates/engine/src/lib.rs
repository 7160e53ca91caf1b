//! Domain core of Expensa.
//!
//! The engine owns no I/O. Callers fetch expense snapshots and the stored
//! budget themselves and hand them to the pure functions here:
//!
//! - [`spending::monthly_spending`] sums a period (the budget evaluator),
//! - [`alert::classify`] turns spend vs. budget into an optional [`Alert`],
//! - [`category::breakdown`] and [`search::matches`] back the listings.

pub use alert::{Alert, AlertKind, AlertMetadata};
pub use budget::Budget;
pub use error::EngineError;
pub use expense::ExpenseInput;
pub use money::Money;
pub use period::Period;

pub mod alert;
pub mod category;
pub mod expense;
pub mod sanitize;
pub mod search;
pub mod spending;

mod budget;
mod error;
mod money;
mod period;

/// Re-exported so callers can name wire records without depending on
/// `api_types` directly.
pub use api_types::expense::{Expense, ExpenseNew, RawAmount};
