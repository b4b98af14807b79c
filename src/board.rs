use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::strategy::BetKind;

/// Amounts currently staked on the layout. Zero means the bet is not up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
	pub place_4: Money,
	pub place_5: Money,
	pub place_6: Money,
	pub place_8: Money,
	pub place_9: Money,
	pub place_10: Money,
	pub pass_line: Money,
	pub pass_line_odds: Money,
	pub dont_pass_bar: Money,
	pub field: Money,
	// No strategy kind stakes a come bet yet; the slot is part of the layout.
	pub come: Money,
}

impl Board {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn slot(&self, kind: BetKind) -> Money {
		match kind {
			BetKind::PlaceBet4 => self.place_4,
			BetKind::PlaceBet5 => self.place_5,
			BetKind::PlaceBet6 => self.place_6,
			BetKind::PlaceBet8 => self.place_8,
			BetKind::PlaceBet9 => self.place_9,
			BetKind::PlaceBet10 => self.place_10,
			BetKind::PassLine => self.pass_line,
			BetKind::Odds => self.pass_line_odds,
			BetKind::DontPassLine => self.dont_pass_bar,
			BetKind::FieldBet => self.field,
		}
	}

	pub fn slot_mut(&mut self, kind: BetKind) -> &mut Money {
		match kind {
			BetKind::PlaceBet4 => &mut self.place_4,
			BetKind::PlaceBet5 => &mut self.place_5,
			BetKind::PlaceBet6 => &mut self.place_6,
			BetKind::PlaceBet8 => &mut self.place_8,
			BetKind::PlaceBet9 => &mut self.place_9,
			BetKind::PlaceBet10 => &mut self.place_10,
			BetKind::PassLine => &mut self.pass_line,
			BetKind::Odds => &mut self.pass_line_odds,
			BetKind::DontPassLine => &mut self.dont_pass_bar,
			BetKind::FieldBet => &mut self.field,
		}
	}

	pub fn is_up(&self, kind: BetKind) -> bool {
		!self.slot(kind).is_zero()
	}

	/// Zeroes the slot and returns what was on it.
	pub fn take(&mut self, kind: BetKind) -> Money {
		std::mem::take(self.slot_mut(kind))
	}

	pub fn clear(&mut self) {
		*self = Board::default();
	}

	pub fn total_staked(&self) -> Money {
		[
			self.place_4,
			self.place_5,
			self.place_6,
			self.place_8,
			self.place_9,
			self.place_10,
			self.pass_line,
			self.pass_line_odds,
			self.dont_pass_bar,
			self.field,
			self.come,
		]
		.into_iter()
		.sum()
	}

	pub fn is_empty(&self) -> bool {
		self.total_staked().is_zero()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_slots_map_each_kind() {
		let mut board = Board::new();
		for (i, kind) in BetKind::ALL.iter().enumerate() {
			*board.slot_mut(*kind) = Money::from_dollars(i as u32 + 1);
		}
		for (i, kind) in BetKind::ALL.iter().enumerate() {
			assert_eq!(board.slot(*kind), Money::from_dollars(i as u32 + 1));
		}
		assert_eq!(board.total_staked(), Money::from_dollars(55));
	}

	#[test]
	fn test_take_zeroes_slot() {
		let mut board = Board::new();
		board.place_6 = Money::from_dollars(6);
		assert!(board.is_up(BetKind::PlaceBet6));
		assert_eq!(board.take(BetKind::PlaceBet6), Money::from_dollars(6));
		assert!(!board.is_up(BetKind::PlaceBet6));
	}

	#[test]
	fn test_clear() {
		let mut board = Board::new();
		board.pass_line = Money::from_dollars(15);
		board.come = Money::from_dollars(5);
		board.clear();
		assert!(board.is_empty());
	}
}
