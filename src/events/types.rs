use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::strategy::BetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

/// Where in the simulation an event happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
	pub round: u32,
	pub iteration: u32,
}

impl fmt::Display for Tick {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[Round {}][Iteration {}]", self.round, self.iteration)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
	BankrollExhausted,
	IterationLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrapsEvent {
	GameStarted {
		game_id: GameId,
		bankroll: Money,
		max_iterations: u32,
	},

	DiceRolled {
		at: Tick,
		die1: u8,
		die2: u8,
		total: u8,
	},

	BetPlaced {
		at: Tick,
		kind: BetKind,
		amount: Money,
		bankroll: Money,
	},

	/// The bankroll could not cover the configured amount, so nothing was staked.
	BetSkipped {
		at: Tick,
		kind: BetKind,
		amount: Money,
		bankroll: Money,
	},

	Craps {
		at: Tick,
		total: u8,
		lost: Money,
	},

	Natural {
		at: Tick,
		total: u8,
		payout: Money,
		bankroll: Money,
	},

	PointSet {
		at: Tick,
		point: u8,
	},

	SevenOut {
		at: Tick,
		point: u8,
		lost: Money,
	},

	PlaceBetWon {
		at: Tick,
		number: u8,
		winnings: Money,
		bankroll: Money,
	},

	BetTakenDown {
		at: Tick,
		kind: BetKind,
		amount: Money,
		bankroll: Money,
	},

	PointMade {
		at: Tick,
		point: u8,
	},

	PassLinePaid {
		at: Tick,
		payout: Money,
		bankroll: Money,
	},

	OddsPaid {
		at: Tick,
		point: u8,
		payout: Money,
		bankroll: Money,
	},

	FieldWon {
		at: Tick,
		total: u8,
		payout: Money,
		bankroll: Money,
	},

	FieldLost {
		at: Tick,
		total: u8,
		lost: Money,
	},

	DontPassWon {
		at: Tick,
		payout: Money,
		bankroll: Money,
	},

	DontPassLost {
		at: Tick,
		lost: Money,
	},

	DontPassPush {
		at: Tick,
	},

	GameEnded {
		reason: EndReason,
		bankroll: Money,
		rolls: u32,
	},
}

impl CrapsEvent {
	pub fn tick(&self) -> Option<Tick> {
		match self {
			CrapsEvent::GameStarted { .. } | CrapsEvent::GameEnded { .. } => None,
			CrapsEvent::DiceRolled { at, .. }
			| CrapsEvent::BetPlaced { at, .. }
			| CrapsEvent::BetSkipped { at, .. }
			| CrapsEvent::Craps { at, .. }
			| CrapsEvent::Natural { at, .. }
			| CrapsEvent::PointSet { at, .. }
			| CrapsEvent::SevenOut { at, .. }
			| CrapsEvent::PlaceBetWon { at, .. }
			| CrapsEvent::BetTakenDown { at, .. }
			| CrapsEvent::PointMade { at, .. }
			| CrapsEvent::PassLinePaid { at, .. }
			| CrapsEvent::OddsPaid { at, .. }
			| CrapsEvent::FieldWon { at, .. }
			| CrapsEvent::FieldLost { at, .. }
			| CrapsEvent::DontPassWon { at, .. }
			| CrapsEvent::DontPassLost { at, .. }
			| CrapsEvent::DontPassPush { at } => Some(*at),
		}
	}
}

impl fmt::Display for CrapsEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CrapsEvent::GameStarted { bankroll, max_iterations, .. } => {
				write!(f, "Initial bankroll is set to {} ({} rolls max)", bankroll, max_iterations)
			}
			CrapsEvent::DiceRolled { at, die1, die2, total } => {
				write!(f, "{} Dice rolled {} ({}+{})", at, total, die1, die2)
			}
			CrapsEvent::BetPlaced { at, kind, amount, bankroll } => {
				write!(f, "{} Placed {} bet of {}. Bankroll is {}.", at, kind, amount, bankroll)
			}
			CrapsEvent::BetSkipped { at, kind, amount, bankroll } => {
				write!(
					f,
					"{} Cannot cover {} bet of {}. Bankroll is {}.",
					at, kind, amount, bankroll
				)
			}
			CrapsEvent::Craps { at, total, lost } => {
				if lost.is_zero() {
					write!(f, "{} Rolled craps ({}). End of round.", at, total)
				} else {
					write!(f, "{} Rolled craps ({}), pass line loses {}. End of round.", at, total, lost)
				}
			}
			CrapsEvent::Natural { at, total, payout, bankroll } => {
				write!(
					f,
					"{} Win come out roll ({}). Pass line pays {}. Bankroll is {}. End of round.",
					at, total, payout, bankroll
				)
			}
			CrapsEvent::PointSet { at, point } => write!(f, "{} Point is set at {}", at, point),
			CrapsEvent::SevenOut { at, point, lost } => {
				write!(
					f,
					"{} Rolled seven-out on point {} (loss of {}). End of round.",
					at, point, lost
				)
			}
			CrapsEvent::PlaceBetWon { at, number, winnings, bankroll } => {
				write!(
					f,
					"{} Won on place {}. Payout is {}. Bankroll increased to {}.",
					at, number, winnings, bankroll
				)
			}
			CrapsEvent::BetTakenDown { at, kind, amount, bankroll } => {
				write!(
					f,
					"{} Taking down {} bet of {}. Bankroll increased to {}.",
					at, kind, amount, bankroll
				)
			}
			CrapsEvent::PointMade { at, point } => {
				write!(f, "{} Rolled point value {} (win!). End of round.", at, point)
			}
			CrapsEvent::PassLinePaid { at, payout, bankroll } => {
				write!(f, "{} Pass line pays {}. Bankroll increased to {}.", at, payout, bankroll)
			}
			CrapsEvent::OddsPaid { at, point, payout, bankroll } => {
				write!(
					f,
					"{} Odds on {} pay {}. Bankroll increased to {}.",
					at, point, payout, bankroll
				)
			}
			CrapsEvent::FieldWon { at, total, payout, bankroll } => {
				write!(f, "{} Field wins on {}. Payout is {}. Bankroll is {}.", at, total, payout, bankroll)
			}
			CrapsEvent::FieldLost { at, total, lost } => {
				write!(f, "{} Field loses on {} ({}).", at, total, lost)
			}
			CrapsEvent::DontPassWon { at, payout, bankroll } => {
				write!(f, "{} Don't pass pays {}. Bankroll is {}.", at, payout, bankroll)
			}
			CrapsEvent::DontPassLost { at, lost } => write!(f, "{} Don't pass loses {}.", at, lost),
			CrapsEvent::DontPassPush { at } => write!(f, "{} Twelve is barred, don't pass pushes.", at),
			CrapsEvent::GameEnded { reason, bankroll, rolls } => {
				let why = match reason {
					EndReason::BankrollExhausted => "bankroll exhausted",
					EndReason::IterationLimit => "iteration limit reached",
				};
				write!(f, "Game over after {} rolls ({}). Final bankroll is {}.", rolls, why, bankroll)
			}
		}
	}
}
