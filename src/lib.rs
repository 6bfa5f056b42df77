//! ビットボードで実装したリバーシ（オセロ）
//!
//! 盤面は黒と白それぞれ 64 ビットの集合で持ち、合法手の生成・着手・終局判定を
//! シフトとマスクだけで行う。AI はネガマックス法＋アルファベータ枝刈りで探索する。

pub mod ai;
pub mod bench;
pub mod board;
pub mod config;
pub mod console;
pub mod difficulty;
pub mod direction;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod player;
pub mod rules;
pub mod stats;

pub use ai::{Move, SearchEngine, SearchStats, MIN_SCORE};
pub use board::{BitBoard, Coordinate};
pub use difficulty::{Difficulty, DifficultyConfig};
pub use game::{Game, GameStatus, TurnReport};
pub use heuristic::Heuristic;
pub use player::{Player, PlayerType};
pub use rules::{MoveStatus, TerminalScore};
