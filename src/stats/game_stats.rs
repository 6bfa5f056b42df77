use crate::board::Coordinate;
use crate::game::{GameStatus, TurnReport};
use crate::player::Player;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// 一手の記録
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub move_number: usize,
    pub player: Player,
    pub position: Option<Coordinate>, // None はパス
    pub thinking_time: Duration,
    pub black_count: u32,
    pub white_count: u32,
    pub evaluation: Option<i32>, // AI の評価値（人間の場合は None）
}

/// ゲーム結果
#[derive(Debug, Clone)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub black_final_count: u32,
    pub white_final_count: u32,
    pub total_moves: usize,
    pub game_duration: Duration,
    pub total_thinking_time: Duration,
}

/// ゲーム統計を記録する
#[derive(Debug)]
pub struct GameStats {
    pub moves: Vec<MoveRecord>,
    pub started_at: DateTime<Local>,
    game_start_time: Instant,
    current_move_number: usize,
}

impl GameStats {
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            started_at: Local::now(),
            game_start_time: Instant::now(),
            current_move_number: 0,
        }
    }

    /// 手を記録
    pub fn record_move(
        &mut self,
        player: Player,
        position: Option<Coordinate>,
        thinking_time: Duration,
        black_count: u32,
        white_count: u32,
        evaluation: Option<i32>,
    ) {
        if position.is_some() {
            self.current_move_number += 1;
        }

        self.moves.push(MoveRecord {
            move_number: self.current_move_number,
            player,
            position,
            thinking_time,
            black_count,
            white_count,
            evaluation,
        });
    }

    /// 1手の結果を記録する
    ///
    /// 着手は `mover` の手として、パスはパスになった側の記録として残す。
    /// 失敗した手は何も記録しない。
    pub fn record_report(&mut self, mover: Player, report: &TurnReport, thinking_time: Duration) {
        let Some(board) = report.board else {
            return;
        };
        let (black_count, white_count) = board.count_all_discs();

        if let Some(position) = report.played {
            self.record_move(
                mover,
                Some(position),
                thinking_time,
                black_count,
                white_count,
                report.score,
            );
        }

        if report.status == GameStatus::Skipped {
            if let Some(skipped) = report.player {
                self.record_move(skipped, None, Duration::ZERO, black_count, white_count, None);
            }
        }
    }

    /// ゲーム結果を生成
    pub fn finalize_game(
        &self,
        winner: Option<Player>,
        black_count: u32,
        white_count: u32,
    ) -> GameResult {
        let total_thinking_time: Duration = self
            .moves
            .iter()
            .filter(|m| m.position.is_some()) // パスは除外
            .map(|m| m.thinking_time)
            .sum();

        GameResult {
            winner,
            black_final_count: black_count,
            white_final_count: white_count,
            total_moves: self.current_move_number,
            game_duration: self.game_start_time.elapsed(),
            total_thinking_time,
        }
    }

    /// 石数の推移を取得
    pub fn get_disc_count_history(&self) -> Vec<(usize, u32, u32)> {
        self.moves
            .iter()
            .filter(|m| m.position.is_some())
            .map(|m| (m.move_number, m.black_count, m.white_count))
            .collect()
    }

    /// 評価値の推移を取得（AI のみ）
    pub fn get_evaluation_history(&self) -> Vec<(usize, Player, i32)> {
        self.moves
            .iter()
            .filter_map(|m| match (m.position, m.evaluation) {
                (Some(_), Some(eval)) => Some((m.move_number, m.player, eval)),
                _ => None,
            })
            .collect()
    }

    /// 手数を取得
    pub fn get_move_count(&self) -> usize {
        self.current_move_number
    }

    /// パスの回数
    pub fn get_pass_count(&self) -> usize {
        self.moves.iter().filter(|m| m.position.is_none()).count()
    }

    /// 統計サマリーを出力
    pub fn write_summary<W: Write>(&self, out: &mut W, game_result: &GameResult) -> io::Result<()> {
        writeln!(out, "\n==========================")?;
        writeln!(out, "      詳細統計")?;
        writeln!(out, "==========================")?;

        writeln!(out, "開始時刻: {}", self.started_at.format("%Y-%m-%d %H:%M:%S"))?;

        writeln!(out, "手数分析:")?;
        writeln!(out, "・総手数: {}", game_result.total_moves)?;
        writeln!(out, "・パス: {}回", self.get_pass_count())?;

        writeln!(out, "\n時間分析:")?;
        writeln!(out, "・ゲーム時間: {:.2?}", game_result.game_duration)?;
        writeln!(out, "・総思考時間: {:.2?}", game_result.total_thinking_time)?;

        if game_result.total_moves > 0 {
            writeln!(
                out,
                "・1手平均思考時間: {:.2?}",
                game_result.total_thinking_time / game_result.total_moves as u32
            )?;
        }

        // 思考時間の統計
        let thinking_times = self
            .moves
            .iter()
            .filter(|m| m.position.is_some())
            .map(|m| m.thinking_time);

        if let (Some(max_time), Some(min_time)) =
            (thinking_times.clone().max(), thinking_times.min())
        {
            writeln!(out, "・最長思考時間: {:.2?}", max_time)?;
            writeln!(out, "・最短思考時間: {:.2?}", min_time)?;
        }

        // 石数の推移
        let disc_history = self.get_disc_count_history();
        if let (Some(first), Some(last)) = (disc_history.first(), disc_history.last()) {
            let (_, initial_black, initial_white) = *first;
            let (_, final_black, final_white) = *last;

            writeln!(out, "\n石数推移:")?;
            writeln!(out, "・1手目後: 黒{}個 白{}個", initial_black, initial_white)?;
            writeln!(out, "・終了時: 黒{}個 白{}個", final_black, final_white)?;
            writeln!(
                out,
                "・黒の増減: {:+}個",
                final_black as i32 - initial_black as i32
            )?;
            writeln!(
                out,
                "・白の増減: {:+}個",
                final_white as i32 - initial_white as i32
            )?;
        }

        // AI の評価値の推移
        let evaluations = self.get_evaluation_history();
        if !evaluations.is_empty() {
            writeln!(out, "\n評価値推移 (AI):")?;
        }
        for player in [Player::Black, Player::White] {
            let scores: Vec<i32> = evaluations
                .iter()
                .filter(|&&(_, p, _)| p == player)
                .map(|&(_, _, score)| score)
                .collect();
            if let (Some(first), Some(last)) = (scores.first(), scores.last()) {
                writeln!(
                    out,
                    "・{}: 最初 {} → 最後 {} (最高 {}, 最低 {})",
                    player,
                    first,
                    last,
                    scores.iter().max().unwrap_or(first),
                    scores.iter().min().unwrap_or(first)
                )?;
            }
        }

        Ok(())
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}
