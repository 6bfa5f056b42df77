//! ネガマックス法＋アルファベータ枝刈りによる AI

use crate::board::{BitBoard, BitIter, Coordinate};
use crate::difficulty::DifficultyConfig;
use crate::heuristic::Heuristic;
use crate::player::Player;
use crate::rules::MoveStatus;
use std::time::Instant;
use tracing::{debug, trace};

/// 評価値の番兵（どの評価値よりも小さい）
pub const MIN_SCORE: i32 = -1000;

/// 探索結果の手
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// 打つ場所。打てる手が見つからなければ `None`
    pub coordinate: Option<Coordinate>,
    pub score: i32,
}

impl Move {
    /// 「手なし」を表す初期値
    pub const fn none() -> Self {
        Self {
            coordinate: None,
            score: MIN_SCORE,
        }
    }

    pub fn is_none(&self) -> bool {
        self.coordinate.is_none()
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::none()
    }
}

/// 1回の `best_move` で集計する探索の統計
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 訪れた局面の数
    pub nodes: u64,
    /// アルファベータカットの回数
    pub cutoffs: u64,
}

/// 探索エンジン
///
/// 盤面は1つだけをその場で書き換え、各局面で退避したコピーから復元する。
#[derive(Clone, Debug)]
pub struct SearchEngine {
    depth: u32,
    heuristic: Heuristic,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(depth: u32, heuristic: Heuristic) -> Self {
        Self {
            depth,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    /// 難易度設定から作成。PVP や深さ 0 では `None`
    pub fn from_config(config: DifficultyConfig) -> Option<Self> {
        if !config.has_ai() {
            return None;
        }
        config
            .heuristic
            .map(|heuristic| Self::new(config.depth, heuristic))
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// ネガマックス法＋アルファベータ枝刈り
    ///
    /// 枝刈りで打ち切ったときは `-beta` を返す。
    pub fn negamax(
        &mut self,
        board: &mut BitBoard,
        depth: u32,
        player: Player,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let opponent = player.opponent();
        let player_moves = board.legal_moves(player);
        let opponent_moves = board.legal_moves(opponent);

        // 葉：深さ切れ、または両者とも打てない
        if depth == 0 || (player_moves | opponent_moves) == 0 {
            return -player.label() * self.heuristic.evaluate(board, opponent);
        }

        // パス。深さは1つ消費する
        if player_moves == 0 {
            return -self.negamax(board, depth - 1, opponent, -beta, -alpha);
        }

        let snapshot = board.snapshot();
        let mut score = MIN_SCORE;

        for position in BitIter::new(player_moves) {
            let status = board.apply_move(player, position);
            debug_assert_eq!(status, MoveStatus::Success);

            score = score.max(self.negamax(board, depth - 1, opponent, -beta, -alpha));
            alpha = alpha.max(score);

            board.restore(&snapshot);

            if alpha >= beta {
                self.stats.cutoffs += 1;
                return -beta;
            }
        }

        -score
    }

    /// 最善手を探す
    ///
    /// 同点の手は先に見つかった方（下位ビット側）を採用する。
    pub fn best_move(&mut self, board: &mut BitBoard, player: Player) -> Move {
        self.stats = SearchStats::default();
        let start = Instant::now();

        let mut best = Move::none();
        let player_moves = board.legal_moves(player);
        if player_moves == 0 {
            debug!(player = %player, "no legal move to search");
            return best;
        }

        let opponent = player.opponent();
        let snapshot = board.snapshot();

        for position in BitIter::new(player_moves) {
            let status = board.apply_move(player, position);
            debug_assert_eq!(status, MoveStatus::Success);

            let score =
                player.label() * self.negamax(board, self.depth, opponent, MIN_SCORE, -best.score);

            board.restore(&snapshot);

            let coordinate = Coordinate::from_bit(position);
            trace!(%coordinate, score, "root move evaluated");

            if score > best.score {
                best = Move {
                    coordinate: Some(coordinate),
                    score,
                };
            }
        }

        debug!(
            player = %player,
            depth = self.depth,
            heuristic = ?self.heuristic,
            coordinate = ?best.coordinate.map(|c| c.to_string()),
            score = best.score,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "best move selected"
        );

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    fn coordinate(row: u8, column: u8) -> Coordinate {
        Coordinate::new(row, column).unwrap()
    }

    #[test]
    fn pvp_has_no_engine() {
        assert!(SearchEngine::from_config(Difficulty::Pvp.into()).is_none());
        let no_search = DifficultyConfig::from(Difficulty::Beginner).with_depth(0);
        assert!(SearchEngine::from_config(no_search).is_none());
        let engine = SearchEngine::from_config(Difficulty::Hardcore.into()).unwrap();
        assert_eq!(engine.heuristic(), Heuristic::Positional);
        assert_eq!(engine.depth(), Difficulty::Hardcore.depth());
    }

    #[test]
    fn depth_zero_is_the_heuristic_transform() {
        for heuristic in [Heuristic::Simple, Heuristic::Mobility, Heuristic::Positional] {
            for player in [Player::Black, Player::White] {
                let mut engine = SearchEngine::new(3, heuristic);
                let mut board = BitBoard::new();
                board.play(Player::Black, coordinate(3, 5));

                let expected = -player.label() * heuristic.evaluate(&board, player.opponent());
                let score = engine.negamax(&mut board, 0, player, MIN_SCORE, -MIN_SCORE);
                assert_eq!(score, expected);
                assert_eq!(engine.stats().nodes, 1);
            }
        }
    }

    #[test]
    fn cutoff_returns_negated_beta() {
        // 最初の子の評価（黒4枚）で alpha が beta を超える
        let mut engine = SearchEngine::new(1, Heuristic::Simple);
        let mut board = BitBoard::new();
        let score = engine.negamax(&mut board, 1, Player::Black, 0, 1);
        assert_eq!(score, -1);
        assert_eq!(engine.stats().cutoffs, 1);
        assert_eq!(engine.stats().nodes, 2);
        assert_eq!(board, BitBoard::new());
    }

    #[test]
    fn full_window_returns_negated_maximum() {
        let mut engine = SearchEngine::new(1, Heuristic::Simple);
        let mut board = BitBoard::new();
        let score = engine.negamax(&mut board, 1, Player::Black, MIN_SCORE, -MIN_SCORE);
        assert_eq!(score, -4);
        assert_eq!(engine.stats().cutoffs, 0);
        assert_eq!(engine.stats().nodes, 5);
    }

    #[test]
    fn pass_consumes_depth() {
        // 白 B1 は打てないが、黒 A1 は C1 に打てる
        let mut board = BitBoard::from_bits(coordinate(1, 1).to_bit(), coordinate(1, 2).to_bit());
        assert_eq!(board.legal_moves(Player::White), 0);
        assert_ne!(board.legal_moves(Player::Black), 0);

        let mut engine = SearchEngine::new(1, Heuristic::Simple);
        let score = engine.negamax(&mut board, 1, Player::White, MIN_SCORE, -MIN_SCORE);
        // 深さ1のパスでそのまま葉になり、白の石（辺の1枚）が評価される
        assert_eq!(score, 2);
        assert_eq!(engine.stats().nodes, 2);
    }

    #[test]
    fn best_move_without_moves_is_none() {
        let mut board = BitBoard::from_bits(coordinate(1, 1).to_bit(), coordinate(1, 2).to_bit());
        let mut engine = SearchEngine::new(2, Heuristic::Mobility);
        let best = engine.best_move(&mut board, Player::White);
        assert!(best.is_none());
        assert_eq!(best, Move::none());
        assert_eq!(best.score, MIN_SCORE);
    }

    #[test]
    fn ties_keep_the_first_move() {
        // 深さ0なら開局の4手はすべて同じ評価。最下位ビットの 3E が選ばれる
        let mut engine = SearchEngine::new(0, Heuristic::Simple);
        let mut board = BitBoard::new();
        let best = engine.best_move(&mut board, Player::Black);
        assert_eq!(best.coordinate, Some(coordinate(3, 5)));
        assert_eq!(best.score, 4);
    }

    #[test]
    fn search_restores_the_board() {
        let mut board = BitBoard::new();
        board.play(Player::Black, coordinate(3, 5));
        board.play(Player::White, coordinate(3, 6));
        let before = board;

        for heuristic in [Heuristic::Simple, Heuristic::Mobility, Heuristic::Positional] {
            for depth in 0..4 {
                let mut engine = SearchEngine::new(depth, heuristic);
                let best = engine.best_move(&mut board, Player::Black);
                assert_eq!(board, before, "{:?} depth {}", heuristic, depth);
                let chosen = best.coordinate.expect("opening position has moves");
                assert!(board.is_legal(Player::Black, chosen.to_bit()));
            }
        }
    }

    #[test]
    fn stats_reset_between_searches() {
        let mut engine = SearchEngine::new(2, Heuristic::Simple);
        let mut board = BitBoard::new();
        engine.best_move(&mut board, Player::Black);
        let first = engine.stats();
        engine.best_move(&mut board, Player::Black);
        assert_eq!(engine.stats(), first);
        assert!(first.nodes > 0);
    }
}
