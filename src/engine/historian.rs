use serde::{Deserialize, Serialize};

use crate::events::CrapsEvent;
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
	Craps,
	Natural,
	PointMade,
	SevenOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
	pub round: u32,
	pub point: Option<u8>,
	pub outcome: RoundOutcome,
	pub rolls: u32,
	pub bankroll_after: Money,
}

/// Folds the event stream into one record per completed round.
#[derive(Debug, Default)]
pub struct RoundHistorian {
	records: Vec<RoundRecord>,
	point: Option<u8>,
	rolls: u32,
}

impl RoundHistorian {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn observe(&mut self, event: &CrapsEvent, bankroll: Money) {
		let outcome = match event {
			CrapsEvent::DiceRolled { .. } => {
				self.rolls += 1;
				return;
			}
			CrapsEvent::PointSet { point, .. } => {
				self.point = Some(*point);
				return;
			}
			CrapsEvent::Craps { .. } => RoundOutcome::Craps,
			CrapsEvent::Natural { .. } => RoundOutcome::Natural,
			CrapsEvent::PointMade { .. } => RoundOutcome::PointMade,
			CrapsEvent::SevenOut { .. } => RoundOutcome::SevenOut,
			_ => return,
		};

		let round = event.tick().map(|t| t.round).unwrap_or_default();
		self.records.push(RoundRecord {
			round,
			point: self.point.take(),
			outcome,
			rolls: std::mem::take(&mut self.rolls),
			bankroll_after: bankroll,
		});
	}

	pub fn records(&self) -> &[RoundRecord] {
		&self.records
	}

	pub fn count(&self, outcome: RoundOutcome) -> usize {
		self.records.iter().filter(|r| r.outcome == outcome).count()
	}
}
