use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::dice::{DiceSource, RandomDice};
use crate::engine::historian::{RoundHistorian, RoundRecord};
use crate::engine::state::{GameState, Puck};
use crate::error::ConfigError;
use crate::events::{CrapsEvent, EndReason, GameId};
use crate::logging;
use crate::money::Money;
use crate::payout::{self, ComeOutResolution};
use crate::strategy::{BetKind, StrategyBook};

pub struct RunnerConfig {
	pub starting_bankroll: Money,
	pub max_iterations: u32,
	pub seed: Option<u64>,
}

impl Default for RunnerConfig {
	fn default() -> Self {
		Self {
			starting_bankroll: Money::from_dollars(200),
			max_iterations: 100,
			seed: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
	pub game_id: GameId,
	pub starting_bankroll: Money,
	pub final_bankroll: Money,
	pub rolls: u32,
	pub rounds_completed: u32,
	pub reason: EndReason,
}

pub struct GameHandle {
	pub event_rx: mpsc::Receiver<CrapsEvent>,
	pub game_id: GameId,
}

impl GameHandle {
	/// Everything emitted so far, without blocking.
	pub fn drain(&self) -> Vec<CrapsEvent> {
		self.event_rx.try_iter().collect()
	}
}

fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(s) => StdRng::seed_from_u64(s),
		None => StdRng::from_os_rng(),
	}
}

pub struct CrapsEngine<D: DiceSource = RandomDice<StdRng>> {
	game_id: GameId,
	strategies: StrategyBook,
	board: Board,
	state: GameState,
	dice: D,
	event_tx: mpsc::Sender<CrapsEvent>,
	historian: RoundHistorian,
	started: bool,
}

impl CrapsEngine<RandomDice<StdRng>> {
	pub fn new(config: RunnerConfig) -> Result<(Self, GameHandle), ConfigError> {
		let mut rng = make_rng(config.seed);
		let game_id = GameId(rng.random());
		Self::build(config, game_id, RandomDice::new(rng))
	}
}

impl<D: DiceSource> CrapsEngine<D> {
	pub fn with_dice(config: RunnerConfig, dice: D) -> Result<(Self, GameHandle), ConfigError> {
		let game_id = GameId(make_rng(config.seed).random());
		Self::build(config, game_id, dice)
	}

	fn build(config: RunnerConfig, game_id: GameId, dice: D) -> Result<(Self, GameHandle), ConfigError> {
		if !config.starting_bankroll.is_positive() {
			return Err(ConfigError::NonPositiveBankroll(config.starting_bankroll));
		}

		let (event_tx, event_rx) = mpsc::channel();

		let engine = Self {
			game_id,
			strategies: StrategyBook::new(),
			board: Board::new(),
			state: GameState::new(config.starting_bankroll, config.max_iterations),
			dice,
			event_tx,
			historian: RoundHistorian::new(),
			started: false,
		};

		let handle = GameHandle { event_rx, game_id };

		Ok((engine, handle))
	}

	pub fn register_strategy(
		&mut self,
		kind: BetKind,
		amount: Money,
		take_down_after_win: bool,
	) -> Result<(), ConfigError> {
		if self.started {
			return Err(ConfigError::AlreadyStarted);
		}
		self.strategies.register(kind, amount, take_down_after_win)
	}

	pub fn game_id(&self) -> GameId {
		self.game_id
	}

	pub fn strategies(&self) -> &StrategyBook {
		&self.strategies
	}

	pub fn state(&self) -> &GameState {
		&self.state
	}

	pub fn board(&self) -> &Board {
		&self.board
	}

	pub fn bankroll(&self) -> Money {
		self.state.bankroll.balance()
	}

	pub fn iteration(&self) -> u32 {
		self.state.iteration
	}

	pub fn rolls(&self) -> u32 {
		self.state.rolls()
	}

	pub fn history(&self) -> &[RoundRecord] {
		self.historian.records()
	}

	pub fn historian(&self) -> &RoundHistorian {
		&self.historian
	}

	/// Rolls two dice and returns their sum.
	pub fn roll(&mut self) -> u8 {
		self.state.die1 = self.dice.roll_die();
		self.state.die2 = self.dice.roll_die();
		self.state.dice_total()
	}

	pub fn run(&mut self) -> RunSummary {
		let starting_bankroll = self.state.bankroll.starting();

		if !self.started {
			self.started = true;
			logging::set_game_id(self.game_id.0);
			logging::engine::game_started(
				&starting_bankroll.to_string(),
				self.state.max_iteration,
				self.strategies.len(),
			);
			self.emit(CrapsEvent::GameStarted {
				game_id: self.game_id,
				bankroll: starting_bankroll,
				max_iterations: self.state.max_iteration,
			});
		}

		while self.state.can_continue() {
			logging::set_round(self.state.round);
			if !self.play_iteration() {
				break;
			}
			if !self.state.advance_iteration() {
				break;
			}
		}

		let reason = if self.state.bankroll.is_busted() {
			EndReason::BankrollExhausted
		} else {
			EndReason::IterationLimit
		};

		logging::engine::game_ended(match reason {
			EndReason::BankrollExhausted => "bankroll exhausted",
			EndReason::IterationLimit => "iteration limit",
		});

		self.emit(CrapsEvent::GameEnded {
			reason,
			bankroll: self.bankroll(),
			rolls: self.rolls(),
		});

		RunSummary {
			game_id: self.game_id,
			starting_bankroll,
			final_bankroll: self.bankroll(),
			rolls: self.rolls(),
			rounds_completed: self.state.round - 1,
			reason,
		}
	}

	/// Stakes, rolls and settles one iteration. Returns false without rolling when
	/// staking left nothing in the bankroll.
	fn play_iteration(&mut self) -> bool {
		if !self.state.is_puck_on() {
			self.stake(BetKind::PassLine);
			self.stake(BetKind::DontPassLine);
		}
		self.stake(BetKind::FieldBet);

		if self.state.bankroll.is_busted() {
			return false;
		}

		let total = self.roll();
		self.state.rolls += 1;
		self.emit(CrapsEvent::DiceRolled {
			at: self.state.tick(),
			die1: self.state.die1,
			die2: self.state.die2,
			total,
		});

		self.settle_field(total);

		match self.state.puck {
			Puck::Off => self.come_out_roll(total),
			Puck::On { point } => self.point_roll(point, total),
		}
		true
	}

	fn come_out_roll(&mut self, total: u8) {
		self.settle_dont_pass_come_out(total);

		match total {
			2 | 3 | 12 => {
				let lost = self.board.take(BetKind::PassLine);
				self.emit(CrapsEvent::Craps {
					at: self.state.tick(),
					total,
					lost,
				});
				self.advance_round();
			}
			7 | 11 => {
				let stake = self.board.take(BetKind::PassLine);
				let payout = if stake.is_zero() {
					Money::ZERO
				} else {
					stake + payout::pass_line_winnings(stake)
				};
				if !payout.is_zero() {
					self.state.bankroll.credit("pass line", payout);
				}
				self.emit(CrapsEvent::Natural {
					at: self.state.tick(),
					total,
					payout,
					bankroll: self.bankroll(),
				});
				self.advance_round();
			}
			point => {
				self.state.puck = Puck::On { point };
				self.emit(CrapsEvent::PointSet {
					at: self.state.tick(),
					point,
				});

				let kinds: Vec<BetKind> = self
					.strategies
					.iter()
					.map(|s| s.kind)
					.filter(|k| k.is_place() || *k == BetKind::Odds)
					.collect();
				for kind in kinds {
					self.stake(kind);
				}
			}
		}
	}

	fn point_roll(&mut self, point: u8, total: u8) {
		if total == 7 {
			self.seven_out(point);
			return;
		}

		if let Some(kind) = BetKind::place_for(total) {
			self.pay_place_bet(kind, total);
		}

		if total == point {
			self.point_made(point);
		}
	}

	fn seven_out(&mut self, point: u8) {
		let dont_pass = self.board.take(BetKind::DontPassLine);
		if !dont_pass.is_zero() {
			let payout = dont_pass + dont_pass;
			self.state.bankroll.credit("don't pass", payout);
			self.emit(CrapsEvent::DontPassWon {
				at: self.state.tick(),
				payout,
				bankroll: self.bankroll(),
			});
		}

		let lost = self.board.total_staked();
		self.board.clear();
		self.state.puck = Puck::Off;
		self.emit(CrapsEvent::SevenOut {
			at: self.state.tick(),
			point,
			lost,
		});
		self.advance_round();
	}

	fn pay_place_bet(&mut self, kind: BetKind, number: u8) {
		let bet = self.board.slot(kind);
		if bet.is_zero() {
			return;
		}

		let winnings = payout::place_winnings(number, bet);
		self.state.bankroll.credit(&kind.to_string(), winnings);
		self.emit(CrapsEvent::PlaceBetWon {
			at: self.state.tick(),
			number,
			winnings,
			bankroll: self.bankroll(),
		});

		let take_down = self
			.strategies
			.get(kind)
			.map(|s| s.take_down_after_win)
			.unwrap_or(false);
		if take_down {
			let amount = self.board.take(kind);
			self.state.bankroll.credit(&kind.to_string(), amount);
			self.emit(CrapsEvent::BetTakenDown {
				at: self.state.tick(),
				kind,
				amount,
				bankroll: self.bankroll(),
			});
		}
	}

	fn point_made(&mut self, point: u8) {
		let pass = self.board.take(BetKind::PassLine);
		if !pass.is_zero() {
			let payout = pass + payout::pass_line_winnings(pass);
			self.state.bankroll.credit("pass line", payout);
			self.emit(CrapsEvent::PassLinePaid {
				at: self.state.tick(),
				payout,
				bankroll: self.bankroll(),
			});
		}

		let odds = self.board.take(BetKind::Odds);
		if !odds.is_zero() {
			let payout = odds + payout::odds_winnings(point, odds);
			self.state.bankroll.credit("pass line odds", payout);
			self.emit(CrapsEvent::OddsPaid {
				at: self.state.tick(),
				point,
				payout,
				bankroll: self.bankroll(),
			});
		}

		let dont_pass = self.board.take(BetKind::DontPassLine);
		if !dont_pass.is_zero() {
			self.emit(CrapsEvent::DontPassLost {
				at: self.state.tick(),
				lost: dont_pass,
			});
		}

		self.state.puck = Puck::Off;
		self.emit(CrapsEvent::PointMade {
			at: self.state.tick(),
			point,
		});
		self.advance_round();
	}

	fn settle_field(&mut self, total: u8) {
		let bet = self.board.take(BetKind::FieldBet);
		if bet.is_zero() {
			return;
		}

		match payout::field_winnings(total, bet) {
			Some(winnings) => {
				let payout = bet + winnings;
				self.state.bankroll.credit("field", payout);
				self.emit(CrapsEvent::FieldWon {
					at: self.state.tick(),
					total,
					payout,
					bankroll: self.bankroll(),
				});
			}
			None => {
				self.emit(CrapsEvent::FieldLost {
					at: self.state.tick(),
					total,
					lost: bet,
				});
			}
		}
	}

	fn settle_dont_pass_come_out(&mut self, total: u8) {
		if !self.board.is_up(BetKind::DontPassLine) {
			return;
		}

		match payout::dont_pass_come_out(total) {
			ComeOutResolution::Win => {
				let stake = self.board.take(BetKind::DontPassLine);
				let payout = stake + stake;
				self.state.bankroll.credit("don't pass", payout);
				self.emit(CrapsEvent::DontPassWon {
					at: self.state.tick(),
					payout,
					bankroll: self.bankroll(),
				});
			}
			ComeOutResolution::Lose => {
				let lost = self.board.take(BetKind::DontPassLine);
				self.emit(CrapsEvent::DontPassLost {
					at: self.state.tick(),
					lost,
				});
			}
			ComeOutResolution::Push => {
				self.emit(CrapsEvent::DontPassPush { at: self.state.tick() });
			}
			ComeOutResolution::NoDecision => {}
		}
	}

	/// Puts the configured amount for `kind` on the board if it is not already up
	/// and the bankroll covers it.
	fn stake(&mut self, kind: BetKind) {
		let Some(amount) = self.strategies.get(kind).map(|s| s.amount) else {
			return;
		};
		if amount.is_zero() || self.board.is_up(kind) {
			return;
		}

		if self.state.bankroll.debit(&kind.to_string(), amount).is_err() {
			self.emit(CrapsEvent::BetSkipped {
				at: self.state.tick(),
				kind,
				amount,
				bankroll: self.bankroll(),
			});
			return;
		}

		*self.board.slot_mut(kind) = amount;
		self.emit(CrapsEvent::BetPlaced {
			at: self.state.tick(),
			kind,
			amount,
			bankroll: self.bankroll(),
		});
	}

	fn advance_round(&mut self) {
		self.state.round += 1;
	}

	fn emit(&mut self, event: CrapsEvent) {
		logging::engine::event(&event);
		let bankroll = self.bankroll();
		self.historian.observe(&event, bankroll);
		let _ = self.event_tx.send(event);
	}
}
