//! AI 同士の対局を並列に回す
//!
//! 各局は自分の `Game`（盤面）を持つので、局の間で共有するものはない。

use crate::difficulty::DifficultyConfig;
use crate::game::{Game, GameStatus};
use crate::player::Player;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 1局の結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchOutcome {
    pub seed: u64,
    pub winner: Option<Player>,
    pub black_count: u32,
    pub white_count: u32,
    /// 無作為に打った手も含めた手数
    pub moves: usize,
    /// AI が手を返さずに打ち切った場合は false
    pub completed: bool,
    pub elapsed: Duration,
}

/// 全局の集計
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchSummary {
    pub outcomes: Vec<BenchOutcome>,
}

impl BenchSummary {
    pub fn games(&self) -> usize {
        self.outcomes.len()
    }

    pub fn wins(&self, player: Player) -> usize {
        self.finished()
            .filter(|outcome| outcome.winner == Some(player))
            .count()
    }

    pub fn draws(&self) -> usize {
        self.finished()
            .filter(|outcome| outcome.winner.is_none())
            .count()
    }

    pub fn aborted(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.completed).count()
    }

    pub fn total_time(&self) -> Duration {
        self.outcomes.iter().map(|o| o.elapsed).sum()
    }

    /// 1局あたりの平均時間
    pub fn mean_time(&self) -> Duration {
        match self.games() {
            0 => Duration::ZERO,
            games => self.total_time() / games as u32,
        }
    }

    fn finished(&self) -> impl Iterator<Item = &BenchOutcome> {
        self.outcomes.iter().filter(|o| o.completed)
    }
}

/// `random_plies` 手を無作為に打ってから、残りを AI 同士で打ち切る
pub fn play_game(config: DifficultyConfig, random_plies: usize, seed: u64) -> BenchOutcome {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut game, _) = Game::new(config);
    let mut moves = 0;
    let mut completed = true;

    for _ in 0..random_plies {
        match game.play_random_move(&mut rng) {
            Some(report) if report.played.is_some() => moves += 1,
            _ => break,
        }
    }

    while !game.is_over() {
        let report = game.play_turn(None);
        match report.status {
            GameStatus::Failed => {
                warn!(seed, moves, player = %game.current_player(), "engine returned no move");
                completed = false;
                break;
            }
            _ => moves += 1,
        }
    }

    let (black_count, white_count) = game.piece_counts();
    let outcome = BenchOutcome {
        seed,
        winner: game.board().get_winner(),
        black_count,
        white_count,
        moves,
        completed,
        elapsed: start.elapsed(),
    };
    debug!(?outcome, "bench game finished");
    outcome
}

/// `games` 局を rayon で並列に実行する。`i` 局目のシードは `base_seed + i`
pub fn run(
    config: DifficultyConfig,
    games: usize,
    random_plies: usize,
    base_seed: u64,
) -> BenchSummary {
    let outcomes = (0..games)
        .into_par_iter()
        .map(|index| play_game(config, random_plies, base_seed.wrapping_add(index as u64)))
        .collect();
    BenchSummary { outcomes }
}
