//! Payout tables. Unless noted, functions return winnings only; the stake is
//! handled by the caller. Fractions are truncated to the cent.

use crate::money::Money;

/// Place bet winnings: 4/10 pay `bet/5*4`, 5/9 pay `bet/5*2`, 6/8 pay `bet/6`.
pub fn place_winnings(point: u8, bet: Money) -> Money {
	match point {
		4 | 10 => bet.mul_ratio(4, 5),
		5 | 9 => bet.mul_ratio(2, 5),
		6 | 8 => bet.mul_ratio(1, 6),
		_ => Money::ZERO,
	}
}

/// Odds behind the pass line, paid at true odds when the point is made.
pub fn odds_winnings(point: u8, bet: Money) -> Money {
	match point {
		4 | 10 => bet.mul_ratio(2, 1), // 2:1
		5 | 9 => bet.mul_ratio(3, 2),  // 3:2
		6 | 8 => bet.mul_ratio(6, 5),  // 6:5
		_ => Money::ZERO,
	}
}

pub fn pass_line_winnings(bet: Money) -> Money {
	bet
}

/// One-roll field bet. `None` means the bet lost.
pub fn field_winnings(total: u8, bet: Money) -> Option<Money> {
	match total {
		2 | 12 => Some(bet.mul_ratio(2, 1)),
		3 | 4 | 9 | 10 | 11 => Some(bet),
		_ => None,
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComeOutResolution {
	Win,
	Lose,
	Push,
	NoDecision,
}

/// Don't pass on the come-out roll; twelve is barred.
pub fn dont_pass_come_out(total: u8) -> ComeOutResolution {
	match total {
		2 | 3 => ComeOutResolution::Win,
		12 => ComeOutResolution::Push,
		7 | 11 => ComeOutResolution::Lose,
		_ => ComeOutResolution::NoDecision,
	}
}
