use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownBetKind;

/// Point numbers a place bet can be made on.
pub const POINT_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BetKind {
	PlaceBet4,
	PlaceBet5,
	PlaceBet6,
	PlaceBet8,
	PlaceBet9,
	PlaceBet10,
	FieldBet,
	PassLine,
	DontPassLine,
	Odds,
}

impl BetKind {
	pub const ALL: [BetKind; 10] = [
		BetKind::PlaceBet4,
		BetKind::PlaceBet5,
		BetKind::PlaceBet6,
		BetKind::PlaceBet8,
		BetKind::PlaceBet9,
		BetKind::PlaceBet10,
		BetKind::FieldBet,
		BetKind::PassLine,
		BetKind::DontPassLine,
		BetKind::Odds,
	];

	pub fn place_for(total: u8) -> Option<BetKind> {
		match total {
			4 => Some(BetKind::PlaceBet4),
			5 => Some(BetKind::PlaceBet5),
			6 => Some(BetKind::PlaceBet6),
			8 => Some(BetKind::PlaceBet8),
			9 => Some(BetKind::PlaceBet9),
			10 => Some(BetKind::PlaceBet10),
			_ => None,
		}
	}

	pub fn place_number(&self) -> Option<u8> {
		match self {
			BetKind::PlaceBet4 => Some(4),
			BetKind::PlaceBet5 => Some(5),
			BetKind::PlaceBet6 => Some(6),
			BetKind::PlaceBet8 => Some(8),
			BetKind::PlaceBet9 => Some(9),
			BetKind::PlaceBet10 => Some(10),
			_ => None,
		}
	}

	pub fn is_place(&self) -> bool {
		self.place_number().is_some()
	}
}

impl fmt::Display for BetKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BetKind::PassLine => write!(f, "pass line"),
			BetKind::DontPassLine => write!(f, "don't pass bar"),
			BetKind::Odds => write!(f, "pass line odds"),
			BetKind::FieldBet => write!(f, "field"),
			place => match place.place_number() {
				Some(n) => write!(f, "place {}", n),
				None => write!(f, "{:?}", place),
			},
		}
	}
}

impl FromStr for BetKind {
	type Err = UnknownBetKind;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
		match normalized.as_str() {
			"pass" | "pass-line" => Ok(BetKind::PassLine),
			"odds" | "pass-line-odds" => Ok(BetKind::Odds),
			"field" => Ok(BetKind::FieldBet),
			"dont-pass" | "dont-pass-line" | "don't-pass" => Ok(BetKind::DontPassLine),
			other => other
				.strip_prefix("place")
				.map(|n| n.trim_start_matches('-'))
				.and_then(|n| n.parse::<u8>().ok())
				.and_then(BetKind::place_for)
				.ok_or_else(|| UnknownBetKind(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_place_for_covers_point_numbers_only() {
		for n in POINT_NUMBERS {
			let kind = BetKind::place_for(n).unwrap();
			assert_eq!(kind.place_number(), Some(n));
		}
		for n in [2, 3, 7, 11, 12] {
			assert!(BetKind::place_for(n).is_none());
		}
	}

	#[test]
	fn test_parse_names() {
		assert_eq!("pass-line".parse::<BetKind>().unwrap(), BetKind::PassLine);
		assert_eq!("Odds".parse::<BetKind>().unwrap(), BetKind::Odds);
		assert_eq!("place6".parse::<BetKind>().unwrap(), BetKind::PlaceBet6);
		assert_eq!("place-10".parse::<BetKind>().unwrap(), BetKind::PlaceBet10);
		assert_eq!("dont_pass".parse::<BetKind>().unwrap(), BetKind::DontPassLine);
		assert!("place7".parse::<BetKind>().is_err());
		assert!("hardway".parse::<BetKind>().is_err());
	}

	#[test]
	fn test_display() {
		assert_eq!(BetKind::PlaceBet8.to_string(), "place 8");
		assert_eq!(BetKind::Odds.to_string(), "pass line odds");
	}
}
