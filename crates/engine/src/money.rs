use std::{
    fmt,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::EngineError;

/// Largest magnitude (in major units) accepted from floating point input.
const MAX_MAJOR: f64 = 90_000_000_000_000.0;

/// Money amount represented as **integer hundredths**.
///
/// Amounts are currency-agnostic: the client labels them (`RWF`) only when
/// rendering messages. Keeping them integral avoids floating-point drift when
/// summing many expenses.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.hundredths(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// assert_eq!(Money::new(900_00).to_string(), "900");
/// assert_eq!(Money::new(900_50).to_string(), "900.5");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects >
/// 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10".parse::<Money>().unwrap().hundredths(), 1000);
/// assert_eq!("10,5".parse::<Money>().unwrap().hundredths(), 1050);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer hundredths.
    #[must_use]
    pub const fn new(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Creates a new amount from whole major units.
    #[must_use]
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Converts a floating point major amount, rounding to hundredths.
    ///
    /// Returns `None` for NaN, infinities and values too large to represent.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > MAX_MAJOR {
            return None;
        }
        Some(Self((value * 100.0).round() as i64))
    }

    /// Returns the raw value in hundredths.
    #[must_use]
    pub const fn hundredths(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Saturating addition, used when summing untrusted remote data.
    #[must_use]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    /// Renders like a plain JavaScript number: no grouping and no trailing
    /// zeros in the fractional part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let fraction = abs % 100;
        match fraction {
            0 => write!(f, "{sign}{units}"),
            _ if fraction % 10 == 0 => write!(f, "{sign}{units}.{}", fraction / 10),
            _ => write!(f, "{sign}{units}.{fraction:02}"),
        }
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal string into hundredths.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let fraction_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| overflow())?;

        let fraction: i64 = match fraction_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -total } else { total }))
    }
}

impl Serialize for Money {
    /// Whole amounts are written as JSON integers (`1000`), others as floats
    /// (`12.5`), matching what earlier clients stored.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.to_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).ok_or_else(|| de::Error::custom("amount out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_drops_trailing_zeros() {
        assert_eq!(Money::new(0).to_string(), "0");
        assert_eq!(Money::new(1).to_string(), "0.01");
        assert_eq!(Money::new(10).to_string(), "0.1");
        assert_eq!(Money::new(1050).to_string(), "10.5");
        assert_eq!(Money::new(-50000).to_string(), "-500");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Money>().unwrap().hundredths(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().hundredths(), 1050);
        assert_eq!("10,50".parse::<Money>().unwrap().hundredths(), 1050);
        assert_eq!("-0.01".parse::<Money>().unwrap().hundredths(), -1);
        assert_eq!("  2.30 ".parse::<Money>().unwrap().hundredths(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("12.345".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
    }

    #[test]
    fn from_f64_rounds_and_rejects_non_finite() {
        assert_eq!(Money::from_f64(12.347), Some(Money::new(1235)));
        assert_eq!(Money::from_f64(0.1 + 0.2), Some(Money::new(30)));
        assert_eq!(Money::from_f64(f64::NAN), None);
        assert_eq!(Money::from_f64(f64::INFINITY), None);
    }

    #[test]
    fn serializes_whole_amounts_as_integers() {
        assert_eq!(serde_json::to_string(&Money::new(100_000)).unwrap(), "1000");
        assert_eq!(serde_json::to_string(&Money::new(1250)).unwrap(), "12.5");
        assert_eq!(
            serde_json::from_str::<Money>("1000").unwrap(),
            Money::new(100_000)
        );
        assert_eq!(serde_json::from_str::<Money>("0.5").unwrap(), Money::new(50));
    }
}
