use thiserror::Error;

use crate::money::Money;
use crate::strategy::BetKind;

/// Raised while setting up a simulation. Nothing in the run loop itself can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	#[error("a {0} strategy is already registered")]
	DuplicateStrategy(BetKind),
	#[error("{kind} amount must not be negative, got {amount}")]
	NegativeAmount { kind: BetKind, amount: Money },
	#[error("starting bankroll must be positive, got {0}")]
	NonPositiveBankroll(Money),
	#[error("strategies cannot be registered after the simulation has started")]
	AlreadyStarted,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
	#[error("invalid amount '{0}' (expected e.g. 15 or 15.50)")]
	Invalid(String),
	#[error("amount '{0}' is out of range")]
	OutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown bet kind '{0}' (expected pass-line, odds, place4..place10, field, dont-pass)")]
pub struct UnknownBetKind(pub String);

/// A stake the bankroll cannot cover. The bet is skipped rather than borrowed against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("insufficient funds for {what}: needs {required}, has {available}")]
pub struct InsufficientFunds {
	pub what: String,
	pub required: Money,
	pub available: Money,
}
