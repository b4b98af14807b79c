use std::collections::VecDeque;

use rand::Rng;

/// Source of single die faces, each in `1..=6`.
pub trait DiceSource {
	fn roll_die(&mut self) -> u8;
}

pub struct RandomDice<R: Rng> {
	rng: R,
}

impl<R: Rng> RandomDice<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl<R: Rng> DiceSource for RandomDice<R> {
	fn roll_die(&mut self) -> u8 {
		self.rng.random_range(1..=6)
	}
}

/// Replays a fixed sequence of rolls, then keeps rolling the default pair.
pub struct ScriptedDice {
	faces: VecDeque<u8>,
	default_pair: (u8, u8),
	pending_second: Option<u8>,
}

impl ScriptedDice {
	pub fn new() -> Self {
		Self {
			faces: VecDeque::new(),
			default_pair: pair_for_total(7),
			pending_second: None,
		}
	}

	pub fn with_pairs(mut self, pairs: &[(u8, u8)]) -> Self {
		for &(a, b) in pairs {
			self.faces.push_back(a.clamp(1, 6));
			self.faces.push_back(b.clamp(1, 6));
		}
		self
	}

	/// Each total is split into a valid pair of faces, e.g. 5 becomes (1, 4).
	pub fn with_totals(mut self, totals: &[u8]) -> Self {
		for &total in totals {
			let (a, b) = pair_for_total(total);
			self.faces.push_back(a);
			self.faces.push_back(b);
		}
		self
	}

	pub fn with_default(mut self, total: u8) -> Self {
		self.default_pair = pair_for_total(total);
		self
	}
}

impl Default for ScriptedDice {
	fn default() -> Self {
		Self::new()
	}
}

impl DiceSource for ScriptedDice {
	fn roll_die(&mut self) -> u8 {
		if let Some(face) = self.faces.pop_front() {
			return face;
		}
		match self.pending_second.take() {
			Some(second) => second,
			None => {
				self.pending_second = Some(self.default_pair.1);
				self.default_pair.0
			}
		}
	}
}

fn pair_for_total(total: u8) -> (u8, u8) {
	let total = total.clamp(2, 12);
	let first = if total > 7 { total - 6 } else { 1 };
	(first, total - first)
}
