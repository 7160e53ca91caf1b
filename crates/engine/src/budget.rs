//! The monthly budget.
//!
//! Exactly one budget is stored at a time. It is serialized as
//! `{"amount": 1000, "period": "2025-06"}`, the layout earlier clients wrote,
//! and it only counts while its period is the current one. A budget for a past
//! month is treated as absent and never rolled forward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, Period};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: Money,
    pub period: Period,
}

impl Budget {
    /// Creates a budget, rejecting non-positive amounts.
    pub fn new(amount: Money, period: Period) -> Result<Self, EngineError> {
        if !amount.is_positive() {
            return Err(EngineError::Validation(
                "Enter a valid positive amount".to_string(),
            ));
        }
        Ok(Self { amount, period })
    }

    /// A budget for the month containing `now`.
    pub fn for_current_period(amount: Money, now: &DateTime<Utc>) -> Result<Self, EngineError> {
        Self::new(amount, Period::current(now))
    }

    /// Parses the stored JSON blob.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[must_use]
    pub fn is_active(&self, now: &DateTime<Utc>) -> bool {
        self.period == Period::current(now)
    }

    /// Returns the budget only when it applies to `now` and can be used as a
    /// divisor. Budgets with a zero or negative amount are never valid, even
    /// if one was persisted by hand.
    #[must_use]
    pub fn active(self, now: &DateTime<Utc>) -> Option<Self> {
        (self.is_active(now) && self.amount.is_positive()).then_some(self)
    }
}
