use serde::{Deserialize, Serialize};

use crate::bankroll::Bankroll;
use crate::events::Tick;
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Puck {
	Off,
	On { point: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
	pub puck: Puck,
	pub bankroll: Bankroll,
	pub round: u32,
	pub iteration: u32,
	pub max_iteration: u32,
	pub rolls: u32,
	pub die1: u8,
	pub die2: u8,
}

impl GameState {
	pub fn new(starting_bankroll: Money, max_iteration: u32) -> Self {
		Self {
			puck: Puck::Off,
			bankroll: Bankroll::new(starting_bankroll),
			round: 1,
			iteration: 1,
			max_iteration,
			rolls: 0,
			die1: 0,
			die2: 0,
		}
	}

	pub fn is_puck_on(&self) -> bool {
		matches!(self.puck, Puck::On { .. })
	}

	pub fn point_value(&self) -> Option<u8> {
		match self.puck {
			Puck::On { point } => Some(point),
			Puck::Off => None,
		}
	}

	pub fn dice_total(&self) -> u8 {
		self.die1 + self.die2
	}

	pub fn rolls(&self) -> u32 {
		self.rolls
	}

	pub fn tick(&self) -> Tick {
		Tick {
			round: self.round,
			iteration: self.iteration,
		}
	}

	/// The loop keeps going while there is money and rolls left.
	pub fn can_continue(&self) -> bool {
		!self.bankroll.is_busted() && self.iteration <= self.max_iteration
	}

	/// Moves to the next iteration. Returns false when the counter is exhausted.
	pub fn advance_iteration(&mut self) -> bool {
		match self.iteration.checked_add(1) {
			Some(next) => {
				self.iteration = next;
				true
			}
			None => false,
		}
	}
}
