mod types;

pub use types::{CrapsEvent, EndReason, GameId, Tick};
