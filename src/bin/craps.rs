use std::process::ExitCode;

use clap::Parser;

use craps_sim::engine::{CrapsEngine, RoundOutcome, RunnerConfig};
use craps_sim::events::CrapsEvent;
use craps_sim::{BetKind, Money};

#[derive(Parser)]
#[command(name = "craps")]
#[command(about = "Simulate a single-player craps session")]
struct Cli {
	/// Starting bankroll, e.g. 200 or 200.50
	#[arg(short, long, default_value = "200", env = "CRAPS_BANKROLL")]
	bankroll: Money,

	#[arg(short = 'n', long, default_value_t = 100, env = "CRAPS_MAX_ITERATIONS")]
	max_iterations: u32,

	#[arg(short, long, env = "CRAPS_SEED")]
	seed: Option<u64>,

	#[arg(long)]
	pass_line: Option<Money>,

	#[arg(long)]
	odds: Option<Money>,

	/// Place bet as NUMBER=AMOUNT, e.g. --place 6=6 --place 8=6
	#[arg(long, value_parser = parse_place)]
	place: Vec<(u8, Money)>,

	/// Take this place bet down after it wins; needs a matching --place
	#[arg(long, value_parser = parse_place_number)]
	take_down: Vec<u8>,

	#[arg(long)]
	field: Option<Money>,

	#[arg(long)]
	dont_pass: Option<Money>,

	/// Print events as JSON lines
	#[arg(long)]
	json: bool,

	/// Only print the summary
	#[arg(short, long)]
	quiet: bool,

	/// Print a record per completed round
	#[arg(long)]
	history: bool,
}

fn parse_place_number(s: &str) -> Result<u8, String> {
	let number: u8 = s
		.trim()
		.parse()
		.map_err(|_| format!("invalid place number '{}'", s))?;
	if BetKind::place_for(number).is_none() {
		return Err(format!("{} is not a place number (4, 5, 6, 8, 9, 10)", number));
	}
	Ok(number)
}

fn parse_place(s: &str) -> Result<(u8, Money), String> {
	let (number, amount) = s
		.split_once('=')
		.ok_or_else(|| format!("expected NUMBER=AMOUNT, got '{}'", s))?;
	let number = parse_place_number(number)?;
	let amount: Money = amount.parse().map_err(|e| format!("{}", e))?;
	Ok((number, amount))
}

impl Cli {
	fn strategies(&self) -> Result<Vec<(BetKind, Money, bool)>, String> {
		let mut strategies = Vec::new();

		if let Some(amount) = self.pass_line {
			strategies.push((BetKind::PassLine, amount, false));
		}
		if let Some(amount) = self.dont_pass {
			strategies.push((BetKind::DontPassLine, amount, false));
		}
		if let Some(amount) = self.odds {
			strategies.push((BetKind::Odds, amount, false));
		}
		for &(number, amount) in &self.place {
			if let Some(kind) = BetKind::place_for(number) {
				strategies.push((kind, amount, self.take_down.contains(&number)));
			}
		}
		if let Some(amount) = self.field {
			strategies.push((BetKind::FieldBet, amount, false));
		}

		if strategies.is_empty() {
			strategies = vec![
				(BetKind::PassLine, Money::from_dollars(15), false),
				(BetKind::Odds, Money::from_dollars(15), false),
				(BetKind::PlaceBet6, Money::from_dollars(6), self.take_down.contains(&6)),
				(BetKind::PlaceBet8, Money::from_dollars(6), self.take_down.contains(&8)),
			];
		}

		for &number in &self.take_down {
			let placed = strategies
				.iter()
				.any(|(kind, _, _)| kind.place_number() == Some(number));
			if !placed {
				return Err(format!("--take-down {} has no matching --place {}=AMOUNT", number, number));
			}
		}

		Ok(strategies)
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {}", e);
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
	let config = RunnerConfig {
		starting_bankroll: cli.bankroll,
		max_iterations: cli.max_iterations,
		seed: cli.seed,
	};

	let (mut engine, handle) = CrapsEngine::new(config)?;
	for (kind, amount, take_down) in cli.strategies()? {
		engine.register_strategy(kind, amount, take_down)?;
	}

	let runner = std::thread::spawn(move || {
		let summary = engine.run();
		(engine, summary)
	});

	while let Ok(event) = handle.event_rx.recv() {
		if !cli.quiet {
			if cli.json {
				match serde_json::to_string(&event) {
					Ok(line) => println!("{}", line),
					Err(e) => eprintln!("Failed to encode event: {}", e),
				}
			} else {
				println!("{}", event);
			}
		}
		if matches!(event, CrapsEvent::GameEnded { .. }) {
			break;
		}
	}

	let Ok((engine, summary)) = runner.join() else {
		return Err("simulation thread panicked".into());
	};

	if cli.history {
		println!("\n=== Rounds ===");
		for record in engine.history() {
			let point = record
				.point
				.map(|p| p.to_string())
				.unwrap_or_else(|| "-".to_string());
			println!(
				"  Round {:>3}: {:?} (point {}, {} rolls) bankroll {}",
				record.round, record.outcome, point, record.rolls, record.bankroll_after
			);
		}
		let historian = engine.historian();
		println!(
			"  Naturals {}, craps {}, points made {}, seven-outs {}",
			historian.count(RoundOutcome::Natural),
			historian.count(RoundOutcome::Craps),
			historian.count(RoundOutcome::PointMade),
			historian.count(RoundOutcome::SevenOut)
		);
	}

	println!("\n=== Summary ===");
	println!("Rolls: {}", summary.rolls);
	println!("Rounds completed: {}", summary.rounds_completed);
	println!("Bankroll: {} -> {}", summary.starting_bankroll, summary.final_bankroll);
	println!("Ended: {:?}", summary.reason);

	Ok(())
}
