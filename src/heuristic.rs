//! 難易度ごとの評価関数

use crate::board::BitBoard;
use crate::direction::adjacent;
use crate::player::Player;

/// 終局局面の評価値の絶対値
pub const TERMINAL_SCORE: i32 = 500;

const EDGE_MASK: u64 = 0xFF818181818181FF; // 辺のマスク
const CORNER_MASK: u64 = 0x8100000000000081; // 角のマスク

// 機動力評価の重み
const CORNER_MOVE_WEIGHT: i32 = 4;
const UNSAFE_MOVE_WEIGHT: i32 = 2;
const SAFE_MOVE_WEIGHT: i32 = 1;

// 配置評価の重み
const INTERIOR_WEIGHT: i32 = 3;
const CORNER_WEIGHT: i32 = 5;

/// 静的評価関数の種類
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// 石数＋辺＋角
    Simple,
    /// 打てる手の質と数
    Mobility,
    /// 内部の石と角
    Positional,
}

impl Heuristic {
    /// `player` から見た盤面の評価値
    #[inline]
    pub fn evaluate(self, board: &BitBoard, player: Player) -> i32 {
        match self {
            Heuristic::Simple => evaluate_simple(board, player),
            Heuristic::Mobility => evaluate_mobility(board, player),
            Heuristic::Positional => evaluate_positional(board, player),
        }
    }
}

/// 自分の石だけを数える。相手の石は見ない。
fn evaluate_simple(board: &BitBoard, player: Player) -> i32 {
    let pieces = board.get(player);

    let total = pieces.count_ones();
    let edges = (pieces & EDGE_MASK).count_ones();
    let corners = (pieces & CORNER_MASK).count_ones();

    (total + edges + 2 * corners) as i32
}

/// 両者とも打てなければ終局として勝敗で評価する
fn terminal_evaluation(board: &BitBoard, player: Player) -> Option<i32> {
    if !board.is_game_over() {
        return None;
    }

    Some(match board.get_winner() {
        Some(winner) if winner == player => TERMINAL_SCORE,
        Some(_) => -TERMINAL_SCORE,
        None => 0,
    })
}

/// 空いている角に隣接するマス（そこに打つと相手に角を渡しやすい）
#[inline]
fn unsafe_squares(board: &BitBoard) -> u64 {
    adjacent(CORNER_MASK & board.empty_slots()) & !CORNER_MASK
}

fn mobility_score(moves: u64, unsafe_zone: u64) -> i32 {
    let corner_moves = (moves & CORNER_MASK).count_ones() as i32;
    let unsafe_moves = (moves & unsafe_zone).count_ones() as i32;
    let safe_moves = (moves & !CORNER_MASK & !unsafe_zone).count_ones() as i32;

    CORNER_MOVE_WEIGHT * corner_moves
        + UNSAFE_MOVE_WEIGHT * unsafe_moves
        + SAFE_MOVE_WEIGHT * safe_moves
}

fn evaluate_mobility(board: &BitBoard, player: Player) -> i32 {
    if let Some(score) = terminal_evaluation(board, player) {
        return score;
    }

    let unsafe_zone = unsafe_squares(board);
    let my_moves = board.legal_moves(player);
    let opp_moves = board.legal_moves(player.opponent());

    mobility_score(my_moves, unsafe_zone) - mobility_score(opp_moves, unsafe_zone)
}

fn evaluate_positional(board: &BitBoard, player: Player) -> i32 {
    if let Some(score) = terminal_evaluation(board, player) {
        return score;
    }

    // 空きマスに隣接するマスがフロンティア、それ以外の石が内部の石
    let frontier = adjacent(board.empty_slots());
    let my = board.get(player);
    let opp = board.get(player.opponent());

    let interior = (my & !frontier).count_ones() as i32 - (opp & !frontier).count_ones() as i32;
    let corners = (my & CORNER_MASK).count_ones() as i32 - (opp & CORNER_MASK).count_ones() as i32;

    INTERIOR_WEIGHT * interior + CORNER_WEIGHT * corners
}
