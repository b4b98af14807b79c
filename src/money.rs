use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyParseError;

/// Fixed-point amount in cents. Signed so a bankroll can be driven below zero by a stake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
	pub const ZERO: Money = Money(0);

	pub const fn from_cents(cents: i64) -> Self {
		Self(cents)
	}

	pub const fn from_dollars(dollars: u32) -> Self {
		Self(dollars as i64 * 100)
	}

	pub const fn cents(self) -> i64 {
		self.0
	}

	pub fn is_zero(self) -> bool {
		self.0 == 0
	}

	pub fn is_positive(self) -> bool {
		self.0 > 0
	}

	pub fn is_negative(self) -> bool {
		self.0 < 0
	}

	/// `self * num / den`, multiplied first and truncated toward zero.
	pub fn mul_ratio(self, num: i64, den: i64) -> Self {
		if den == 0 {
			return Money::ZERO;
		}
		Self(self.0.saturating_mul(num) / den)
	}
}

impl std::ops::Add for Money {
	type Output = Money;

	fn add(self, rhs: Money) -> Money {
		Money(self.0.saturating_add(rhs.0))
	}
}

impl std::ops::AddAssign for Money {
	fn add_assign(&mut self, rhs: Money) {
		*self = *self + rhs;
	}
}

impl std::ops::Sub for Money {
	type Output = Money;

	fn sub(self, rhs: Money) -> Money {
		Money(self.0.saturating_sub(rhs.0))
	}
}

impl std::ops::SubAssign for Money {
	fn sub_assign(&mut self, rhs: Money) {
		*self = *self - rhs;
	}
}

impl std::iter::Sum for Money {
	fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
		iter.fold(Money::ZERO, |acc, m| acc + m)
	}
}

impl fmt::Display for Money {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let sign = if self.0 < 0 { "-" } else { "" };
		let abs = self.0.unsigned_abs();
		write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
	}
}

impl FromStr for Money {
	type Err = MoneyParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let (negative, rest) = match trimmed.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, trimmed),
		};
		let rest = rest.strip_prefix('$').unwrap_or(rest);

		let (whole, frac) = match rest.split_once('.') {
			Some((w, f)) => (w, f),
			None => (rest, ""),
		};

		if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
			return Err(MoneyParseError::Invalid(s.to_string()));
		}
		if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
			return Err(MoneyParseError::Invalid(s.to_string()));
		}

		let dollars: i64 = whole
			.parse()
			.map_err(|_| MoneyParseError::Invalid(s.to_string()))?;
		let cents: i64 = match frac.len() {
			0 => 0,
			1 => frac.parse::<i64>().unwrap_or(0) * 10,
			_ => frac.parse::<i64>().unwrap_or(0),
		};

		let total = dollars
			.checked_mul(100)
			.and_then(|d| d.checked_add(cents))
			.ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

		Ok(Money(if negative { -total } else { total }))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Money::from_dollars(200).to_string(), "$200.00");
		assert_eq!(Money::from_cents(2250).to_string(), "$22.50");
		assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
	}

	#[test]
	fn test_parse_accepts_common_forms() {
		assert_eq!("15".parse::<Money>().unwrap(), Money::from_dollars(15));
		assert_eq!("15.5".parse::<Money>().unwrap(), Money::from_cents(1550));
		assert_eq!("$15.05".parse::<Money>().unwrap(), Money::from_cents(1505));
		assert_eq!("-3".parse::<Money>().unwrap(), Money::from_cents(-300));
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!("".parse::<Money>().is_err());
		assert!("abc".parse::<Money>().is_err());
		assert!("1.234".parse::<Money>().is_err());
		assert!("1.x".parse::<Money>().is_err());
		assert!(".50".parse::<Money>().is_err());
	}

	#[test]
	fn test_mul_ratio_truncates() {
		assert_eq!(Money::from_dollars(15).mul_ratio(3, 2), Money::from_cents(2250));
		assert_eq!(Money::from_cents(101).mul_ratio(6, 5), Money::from_cents(121));
		assert_eq!(Money::from_cents(1).mul_ratio(1, 6), Money::ZERO);
		assert_eq!(Money::from_dollars(5).mul_ratio(1, 0), Money::ZERO);
	}

	#[test]
	fn test_arithmetic_saturates() {
		let max = Money::from_cents(i64::MAX);
		assert_eq!(max + Money::from_cents(1), max);
		let total: Money = [Money::from_dollars(1), Money::from_dollars(2)].into_iter().sum();
		assert_eq!(total, Money::from_dollars(3));
	}
}
