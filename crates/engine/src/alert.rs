//! Budget alert classification.
//!
//! Given a budget and the spend of its period, decide whether the user should
//! be warned (at least 90% used) or told the budget is exceeded (100% or
//! more). Nothing is remembered between calls, so the same inputs always
//! produce the same alert.

use serde::Serialize;

use crate::{Budget, Money, Period, spending};

/// Label prepended to every amount in alert messages.
pub const CURRENCY_LABEL: &str = "RWF";

/// Percentage at which a warning is raised.
pub const WARNING_THRESHOLD: f64 = 90.0;

/// Percentage at which the budget counts as exceeded.
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
    Exceeded,
}

impl AlertKind {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Warning => "Budget Warning",
            Self::Exceeded => "Budget Exceeded",
        }
    }
}

/// Payload attached to a notification. `context` names the caller that
/// triggered the check and has no influence on the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlertMetadata {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub context: String,
    pub period: Period,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alert {
    pub title: String,
    pub body: String,
    pub percentage: f64,
    pub metadata: AlertMetadata,
}

impl Alert {
    #[must_use]
    pub fn kind(&self) -> AlertKind {
        self.metadata.kind
    }
}

/// Classifies `spend` against `budget`.
///
/// Returns `None` below the warning threshold and for budgets that cannot be
/// used as a divisor.
#[must_use]
pub fn classify(budget: &Budget, spend: Money, context: &str) -> Option<Alert> {
    let percentage = spending::percentage(spend, budget.amount)?;
    let period = budget.period;

    let (kind, body) = if percentage >= EXCEEDED_THRESHOLD {
        let overage = spend - budget.amount;
        (
            AlertKind::Exceeded,
            format!(
                "You've exceeded your {CURRENCY_LABEL} {} budget for {period} by {CURRENCY_LABEL} {overage}!",
                budget.amount
            ),
        )
    } else if percentage >= WARNING_THRESHOLD {
        (
            AlertKind::Warning,
            format!(
                "You've spent {percentage:.1}% ({CURRENCY_LABEL} {spend}) of your {CURRENCY_LABEL} {} budget for {period}.",
                budget.amount
            ),
        )
    } else {
        return None;
    };

    Some(Alert {
        title: kind.title().to_string(),
        body,
        percentage,
        metadata: AlertMetadata {
            kind,
            context: context.to_string(),
            period,
        },
    })
}
