mod historian;
mod runner;
mod state;

pub use historian::{RoundHistorian, RoundOutcome, RoundRecord};
pub use runner::{CrapsEngine, GameHandle, RunSummary, RunnerConfig};
pub use state::{GameState, Puck};
