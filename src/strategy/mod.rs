mod book;
mod kind;

pub use book::{BettingStrategy, StrategyBook};
pub use kind::{BetKind, POINT_NUMBERS};
