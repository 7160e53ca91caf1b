//! Budget evaluation and alert dispatch.
//!
//! Both entry points are best-effort: they run after a command has already
//! done its work and must never turn a successful command into a failure.
//! Every error on the way is logged and dropped.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use engine::{Money, Period, alert, spending};

use crate::{client::ExpenseStore, local_state, local_state::KeyValueStore, notify::Notifier};

pub const CONTEXT_CREATE_EXPENSE: &str = "CreateExpense";
pub const CONTEXT_ALL: &str = "All";
pub const CONTEXT_DAILY: &str = "DailyExpenses";
pub const CONTEXT_GENERAL: &str = "General";

pub trait LogErr<T> {
    /// Logs the error under `what` and discards it.
    fn log_and_ignore(self, what: &str) -> Option<T>;
}

impl<T, E: Display> LogErr<T> for Result<T, E> {
    fn log_and_ignore(self, what: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!("{what}: {err}");
                None
            }
        }
    }
}

/// Sums the expenses of `period`; a failed fetch counts as zero spend.
pub async fn compute_monthly_spending<A: ExpenseStore>(api: &A, period: &Period) -> Money {
    match api.list().await.log_and_ignore("failed to fetch expenses") {
        Some(expenses) => spending::monthly_spending(&expenses, period),
        None => Money::ZERO,
    }
}

/// Checks the active budget and sends at most one alert.
///
/// Repeated calls with unchanged data send the same alert again.
pub async fn evaluate_and_notify<K, A, N>(
    context: &str,
    now: &DateTime<Utc>,
    kv: &K,
    api: &A,
    notifier: &N,
) where
    K: KeyValueStore,
    A: ExpenseStore,
    N: Notifier,
{
    let Some(budget) = local_state::load_budget(kv)
        .await
        .log_and_ignore("failed to read budget")
        .flatten()
        .and_then(|budget| budget.active(now))
    else {
        tracing::debug!(context, "no active budget, skipping check");
        return;
    };

    let spend = compute_monthly_spending(api, &budget.period).await;
    let Some(alert) = alert::classify(&budget, spend, context) else {
        tracing::debug!(context, %spend, budget = %budget.amount, "spend below threshold");
        return;
    };

    notifier
        .send(&alert)
        .await
        .log_and_ignore("failed to send budget alert");
}
