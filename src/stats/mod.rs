pub mod game_stats;

pub use game_stats::{GameResult, GameStats, MoveRecord};
