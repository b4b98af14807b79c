pub mod bankroll;
pub mod board;
pub mod dice;
pub mod engine;
pub mod error;
pub mod events;
pub mod logging;
pub mod money;
pub mod payout;
pub mod strategy;

pub use engine::{CrapsEngine, GameHandle, RunSummary, RunnerConfig};
pub use error::ConfigError;
pub use money::Money;
pub use strategy::BetKind;
