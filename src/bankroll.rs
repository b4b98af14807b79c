use serde::{Deserialize, Serialize};

use crate::error::InsufficientFunds;
use crate::logging;
use crate::money::Money;

/// The player's money off the layout. A debit never takes the balance below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
	starting: Money,
	balance: Money,
}

impl Bankroll {
	pub fn new(starting: Money) -> Self {
		Self {
			starting,
			balance: starting,
		}
	}

	pub fn balance(&self) -> Money {
		self.balance
	}

	pub fn starting(&self) -> Money {
		self.starting
	}

	pub fn is_busted(&self) -> bool {
		!self.balance.is_positive()
	}

	pub fn debit(&mut self, what: &str, amount: Money) -> Result<Money, InsufficientFunds> {
		if amount > self.balance {
			logging::bank::insufficient(what, amount, self.balance);
			return Err(InsufficientFunds {
				what: what.to_string(),
				required: amount,
				available: self.balance,
			});
		}

		self.balance -= amount;
		logging::bank::debit(what, amount, self.balance);
		Ok(self.balance)
	}

	pub fn credit(&mut self, what: &str, amount: Money) -> Money {
		self.balance += amount;
		logging::bank::credit(what, amount, self.balance);
		self.balance
	}
}
