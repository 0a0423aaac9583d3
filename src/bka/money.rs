use std::{fmt, str::FromStr};

use thiserror::Error;

/// Number of money units in one whole currency unit (four decimal places)
const SCALE: i64 = 10_000;
const SCALE_DIGITS: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Signed fixed-point amount, counted in ten-thousandths
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Builds an amount from whole currency units, e.g. `Money::from_units(100)` is `100.0000`.
    ///
    /// Meant for literals. Panics if `units` does not fit, use `str::parse` for untrusted input.
    pub const fn from_units(units: i64) -> Self {
        return match units.checked_mul(SCALE) {
            Some(amount) => Self(amount),
            None => panic!("Money::from_units: amount out of range"),
        };
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < 0;
    }

    /// Adds `other` in place. On overflow the value is left untouched.
    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        let sum = self.0.checked_add(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", *self, *other)
            } else {
                MoneyError::Underflow("add", *self, *other)
            }
        })?;

        self.0 = sum;

        return Ok(());
    }

    /// Subtracts `other` in place. On overflow the value is left untouched.
    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        let difference = self.0.checked_sub(other.0).ok_or_else(|| {
            if other.0 < 0 {
                MoneyError::Overflow("sub", *self, *other)
            } else {
                MoneyError::Underflow("sub", *self, *other)
            }
        })?;

        self.0 = difference;

        return Ok(());
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason| MoneyError::Parse(reason, string.to_string());

        let trimmed = string.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let mut parts = unsigned.split('.');

        if parts.clone().count() > 2 {
            Err(parse_error("Too many decimal points"))?
        }

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if whole.is_empty() && fraction.is_empty() {
            Err(parse_error("No digits"))?
        }

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            Err(parse_error("Unexpected character"))?
        }

        if fraction.len() > SCALE_DIGITS {
            Err(parse_error("Too many decimal places"))?
        }

        let fraction = format!("{:0<width$}", fraction, width = SCALE_DIGITS);

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| parse_error("Value out of range"))?
        };
        let fraction: i64 = fraction
            .parse()
            .map_err(|_| parse_error("Value out of range"))?;

        // built towards the sign so that i64::MIN stays reachable
        let units = whole
            .checked_mul(SCALE)
            .and_then(|units| {
                if negative {
                    (-units).checked_sub(fraction)
                } else {
                    units.checked_add(fraction)
                }
            })
            .ok_or_else(|| parse_error("Value out of range"))?;

        return Ok(Money(units));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;

        return write!(
            f,
            "{sign}{}.{:0width$}",
            abs / scale,
            abs % scale,
            width = SCALE_DIGITS
        );
    }
}
