use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::money::Money;
use super::kind::BetKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingStrategy {
	pub kind: BetKind,
	pub amount: Money,
	#[serde(default)]
	pub take_down_after_win: bool,
}

/// Registered strategies in configuration order, at most one per kind.
#[derive(Debug, Clone, Default)]
pub struct StrategyBook {
	strategies: Vec<BettingStrategy>,
}

impl StrategyBook {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(
		&mut self,
		kind: BetKind,
		amount: Money,
		take_down_after_win: bool,
	) -> Result<(), ConfigError> {
		if amount.is_negative() {
			return Err(ConfigError::NegativeAmount { kind, amount });
		}
		if self.get(kind).is_some() {
			return Err(ConfigError::DuplicateStrategy(kind));
		}

		self.strategies.push(BettingStrategy {
			kind,
			amount,
			take_down_after_win,
		});
		Ok(())
	}

	pub fn get(&self, kind: BetKind) -> Option<&BettingStrategy> {
		self.strategies.iter().find(|s| s.kind == kind)
	}

	pub fn iter(&self) -> impl Iterator<Item = &BettingStrategy> {
		self.strategies.iter()
	}

	pub fn place_bets(&self) -> impl Iterator<Item = &BettingStrategy> {
		self.strategies.iter().filter(|s| s.kind.is_place())
	}

	pub fn len(&self) -> usize {
		self.strategies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strategies.is_empty()
	}
}
