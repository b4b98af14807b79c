use std::fs::{self, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use chrono::Local;

struct LogState {
	file: Option<std::fs::File>,
	current_date: String,
	game_id: String,
	round: u32,
}

static LOG_STATE: Mutex<LogState> = Mutex::new(LogState {
	file: None,
	current_date: String::new(),
	game_id: String::new(),
	round: 0,
});

fn ensure_log_file(state: &mut LogState) {
	let date = Local::now().format("%Y-%m-%d").to_string();
	if state.current_date != date || state.file.is_none() {
		let _ = fs::create_dir_all("logs");
		let path = format!("logs/craps-{}.log", date);
		if let Ok(file) = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&path)
		{
			state.file = Some(file);
			state.current_date = date;
		}
	}
}

pub fn set_game_id(game_id: u64) {
	if let Ok(mut state) = LOG_STATE.lock() {
		state.game_id = format!("{:08x}", game_id & 0xFFFFFFFF);
	}
}

pub fn set_round(round: u32) {
	if let Ok(mut state) = LOG_STATE.lock() {
		state.round = round;
	}
}

pub fn log(module: &str, log_type: &str, message: &str) {
	if let Ok(mut state) = LOG_STATE.lock() {
		ensure_log_file(&mut state);

		let game_id = if state.game_id.is_empty() { "--------" } else { &state.game_id };
		let line = format!(
			"[{}][{}][R{}][{}:{}] {}\n",
			Local::now().format("%H:%M:%S%.3f"),
			game_id,
			state.round,
			module,
			log_type,
			message
		);

		if let Some(ref mut file) = state.file {
			let _ = file.write_all(line.as_bytes());
			let _ = file.flush();
		}
	}
}

pub mod engine {
	use super::log;
	use crate::events::CrapsEvent;

	pub fn game_started(bankroll: &str, max_iterations: u32, strategies: usize) {
		log(
			"Engine",
			"GAME",
			&format!("started bankroll={} max_iterations={} strategies={}", bankroll, max_iterations, strategies),
		);
	}

	pub fn event(event: &CrapsEvent) {
		let log_type = match event {
			CrapsEvent::DiceRolled { .. } => "ROLL",
			CrapsEvent::BetPlaced { .. }
			| CrapsEvent::BetSkipped { .. }
			| CrapsEvent::BetTakenDown { .. } => "BET",
			CrapsEvent::PointSet { .. } => "POINT",
			CrapsEvent::Craps { .. }
			| CrapsEvent::Natural { .. }
			| CrapsEvent::SevenOut { .. }
			| CrapsEvent::PointMade { .. } => "ROUND",
			CrapsEvent::GameStarted { .. } | CrapsEvent::GameEnded { .. } => "GAME",
			_ => "PAYOUT",
		};
		log("Engine", log_type, &event.to_string());
	}

	pub fn game_ended(reason: &str) {
		log("Engine", "GAME", &format!("ended: {}", reason));
	}
}

pub mod bank {
	use super::log;
	use crate::money::Money;

	pub fn debit(what: &str, amount: Money, balance: Money) {
		log("Bank", "DEBIT", &format!("{}: -{} (bal: {})", what, amount, balance));
	}

	pub fn credit(what: &str, amount: Money, balance: Money) {
		log("Bank", "CREDIT", &format!("{}: +{} (bal: {})", what, amount, balance));
	}

	pub fn insufficient(what: &str, amount: Money, balance: Money) {
		log("Bank", "DENIED", &format!("{}: needs {} (bal: {})", what, amount, balance));
	}
}
