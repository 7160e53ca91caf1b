//! Spending aggregation over a snapshot of expenses.
//!
//! Everything here is pure: callers fetch the snapshot and pass it in, so the
//! same snapshot always yields the same figures.

use api_types::expense::Expense;
use chrono::{NaiveDate, TimeZone};

use crate::{
    Money, Period,
    expense::{coerce_amount, created_at, period_of},
};

/// Sum of the amounts of every expense created in `period`.
///
/// Expenses without a readable timestamp are left out; unusable amounts count
/// as zero. The result is never negative.
#[must_use]
pub fn monthly_spending(expenses: &[Expense], period: &Period) -> Money {
    in_period(expenses, period).map(coerce_amount).sum()
}

/// Expenses created in `period`, in snapshot order.
pub fn in_period<'a>(
    expenses: &'a [Expense],
    period: &'a Period,
) -> impl Iterator<Item = &'a Expense> + 'a {
    expenses
        .iter()
        .filter(move |expense| period_of(expense).as_ref() == Some(period))
}

/// Expenses whose creation date, seen in `tz`, is `date`.
#[must_use]
pub fn on_date<'a, Tz: TimeZone>(
    expenses: &'a [Expense],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|expense| {
            created_at(expense).is_some_and(|at| at.with_timezone(tz).date_naive() == date)
        })
        .collect()
}

/// Spend as a percentage of `budget`, `None` when the budget cannot be a
/// divisor.
#[must_use]
pub fn percentage(spend: Money, budget: Money) -> Option<f64> {
    budget
        .is_positive()
        .then(|| spend.hundredths() as f64 * 100.0 / budget.hundredths() as f64)
}

#[cfg(test)]
mod tests {
    use api_types::expense::RawAmount;
    use chrono::Utc;

    use super::*;

    fn expense(id: &str, amount: Option<RawAmount>, created_at: &str) -> Expense {
        Expense {
            id: id.to_string(),
            description: None,
            amount,
            category: None,
            created_at: Some(created_at.to_string()),
        }
    }

    fn snapshot() -> Vec<Expense> {
        vec![
            expense("1", Some(RawAmount::Number(400.0)), "2025-06-01T09:00:00.000Z"),
            expense("2", Some(RawAmount::Text("500".into())), "2025-06-20T18:00:00.000Z"),
            expense("3", Some(RawAmount::Text("n/a".into())), "2025-06-21T18:00:00.000Z"),
            expense("4", None, "2025-06-22T18:00:00.000Z"),
            expense("5", Some(RawAmount::Number(999.0)), "2025-05-31T23:59:59.000Z"),
            expense("6", Some(RawAmount::Number(50.0)), "not a date"),
        ]
    }

    #[test]
    fn sums_only_the_requested_period() {
        let june: Period = "2025-06".parse().unwrap();
        assert_eq!(monthly_spending(&snapshot(), &june), Money::from_major(900));

        let may: Period = "2025-05".parse().unwrap();
        assert_eq!(monthly_spending(&snapshot(), &may), Money::from_major(999));

        let july: Period = "2025-07".parse().unwrap();
        assert_eq!(monthly_spending(&snapshot(), &july), Money::ZERO);
    }

    #[test]
    fn empty_snapshot_sums_to_zero() {
        let june: Period = "2025-06".parse().unwrap();
        assert_eq!(monthly_spending(&[], &june), Money::ZERO);
    }

    #[test]
    fn filters_by_day_in_utc() {
        let expenses = snapshot();
        let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let found: Vec<_> = on_date(&expenses, date, &Utc)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(found, ["2"]);
    }

    #[test]
    fn filters_by_day_in_local_timezone() {
        let kigali = chrono_tz::Africa::Kigali;
        let expenses = snapshot();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let found: Vec<_> = on_date(&expenses, date, &kigali)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        // 2025-05-31T23:59:59Z is already June 1st at UTC+2.
        assert_eq!(found, ["1", "5"]);
    }

    #[test]
    fn percentage_guards_zero_budget() {
        assert_eq!(
            percentage(Money::from_major(900), Money::from_major(1000)),
            Some(90.0)
        );
        assert_eq!(percentage(Money::from_major(900), Money::ZERO), None);
    }
}
