//! Lenient readers over remote expense records, and validated input for new
//! ones.
//!
//! Remote records are not schema-enforced: amounts may be numbers, strings or
//! missing, and timestamps may be malformed. Readers here never fail; they
//! coerce to a neutral value instead.

use api_types::expense::{Expense, ExpenseNew, RawAmount};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::{EngineError, Money, Period, sanitize};

/// Parses the record's creation timestamp as UTC.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
#[must_use]
pub fn created_at(expense: &Expense) -> Option<DateTime<Utc>> {
    let raw = expense.created_at.as_deref()?.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(at.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

/// The month the record was created in, if its timestamp is readable.
#[must_use]
pub fn period_of(expense: &Expense) -> Option<Period> {
    created_at(expense).map(|at| Period::from_datetime(&at))
}

/// Reads the amount, treating anything unusable as zero.
///
/// A string counts only when, once trimmed, it is a plain number, so
/// `"RWF 1,500"` and `"12 items"` read as zero. Numbers and numeric strings
/// alike count as zero when negative or non-finite.
#[must_use]
pub fn coerce_amount(expense: &Expense) -> Money {
    let value = match &expense.amount {
        Some(RawAmount::Number(value)) => *value,
        Some(RawAmount::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };

    if value.is_finite() && value > 0.0 {
        Money::from_f64(value).unwrap_or(Money::ZERO)
    } else {
        Money::ZERO
    }
}

/// A user-entered expense that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: Option<String>,
}

impl ExpenseInput {
    /// Validates raw form input.
    ///
    /// The description is required, the amount must be a positive number and
    /// the category is optional.
    pub fn parse(description: &str, amount: &str, category: &str) -> Result<Self, EngineError> {
        if !sanitize::is_non_empty(description) {
            return Err(EngineError::Validation(
                "Description is required".to_string(),
            ));
        }
        let amount = sanitize::sanitize_number(amount).ok_or_else(|| {
            EngineError::Validation("Enter a valid positive amount".to_string())
        })?;
        let category = sanitize::is_non_empty(category).then(|| sanitize::trim_string(category));

        Ok(Self {
            description: sanitize::trim_string(description),
            amount,
            category,
        })
    }

    /// Builds the request body, stamping the record with `now`.
    #[must_use]
    pub fn into_request(self, now: &DateTime<Utc>) -> ExpenseNew {
        ExpenseNew {
            description: self.description,
            amount: self.amount.to_f64(),
            category: self.category.unwrap_or_default(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn expense(amount: Option<RawAmount>, created_at: Option<&str>) -> Expense {
        Expense {
            id: "1".to_string(),
            description: None,
            amount,
            category: None,
            created_at: created_at.map(str::to_string),
        }
    }

    #[test]
    fn coerces_amounts_leniently() {
        let cases = [
            (Some(RawAmount::Number(1200.0)), Money::from_major(1200)),
            (Some(RawAmount::Number(-5.0)), Money::ZERO),
            (Some(RawAmount::Number(f64::NAN)), Money::ZERO),
            (Some(RawAmount::Text("350.5".into())), Money::new(35_050)),
            (Some(RawAmount::Text(" 42 ".into())), Money::from_major(42)),
            (Some(RawAmount::Text("RWF 1,500".into())), Money::ZERO),
            (Some(RawAmount::Text("-5".into())), Money::ZERO),
            (Some(RawAmount::Text("abc12".into())), Money::ZERO),
            (Some(RawAmount::Text("12 items".into())), Money::ZERO),
            (Some(RawAmount::Text("inf".into())), Money::ZERO),
            (Some(RawAmount::Text("abc".into())), Money::ZERO),
            (Some(RawAmount::Text("1.2.3".into())), Money::ZERO),
            (None, Money::ZERO),
        ];
        for (amount, expected) in cases {
            assert_eq!(coerce_amount(&expense(amount.clone(), None)), expected, "{amount:?}");
        }
    }

    #[test]
    fn reads_timestamps_in_several_shapes() {
        let cases = [
            ("2025-06-01T10:00:00.000Z", "2025-06"),
            ("2025-06-30T23:30:00-02:00", "2025-07"),
            ("2025-06-15T08:00:00", "2025-06"),
            ("2025-06-15", "2025-06"),
        ];
        for (raw, period) in cases {
            let found = period_of(&expense(None, Some(raw))).map(|p| p.to_string());
            assert_eq!(found.as_deref(), Some(period), "{raw}");
        }
        assert_eq!(period_of(&expense(None, Some("yesterday"))), None);
        assert_eq!(period_of(&expense(None, None)), None);
    }

    #[test]
    fn input_validation() {
        let input = ExpenseInput::parse("  Weekly   groceries ", "12500", "  ").unwrap();
        assert_eq!(input.description, "Weekly groceries");
        assert_eq!(input.amount, Money::from_major(12_500));
        assert_eq!(input.category, None);

        assert_eq!(
            ExpenseInput::parse("   ", "10", "Food").unwrap_err(),
            EngineError::Validation("Description is required".to_string())
        );
        assert_eq!(
            ExpenseInput::parse("Taxi", "0", "").unwrap_err(),
            EngineError::Validation("Enter a valid positive amount".to_string())
        );
    }

    #[test]
    fn request_carries_iso_timestamp_and_blank_category() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let request = ExpenseInput::parse("Taxi", "3500", "")
            .unwrap()
            .into_request(&now);
        assert_eq!(request.created_at, "2025-06-15T12:00:00.000Z");
        assert_eq!(request.category, "");
        assert_eq!(request.amount, 3500.0);
    }
}
