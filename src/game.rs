//! 盤面・手番・AI をまとめて、1手ごとの結果を返す対局の進行役

use crate::ai::{SearchEngine, SearchStats};
use crate::board::{BitBoard, Coordinate};
use crate::difficulty::{Difficulty, DifficultyConfig};
use crate::player::Player;
use crate::rules::MoveStatus;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

/// 1手ごとの対局状況
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Successful,
    Failed,
    Skipped,
    Ended,
}

/// 1手の結果
///
/// - `Successful`: `player` は次の手番
/// - `Failed`: 何も変わらない。`player`・`board` は `None`
/// - `Skipped`: `player` はパスになった側。手番は変わらない
/// - `Ended`: `player` は勝者（引き分けなら `None`）
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub status: GameStatus,
    pub player: Option<Player>,
    pub board: Option<BitBoard>,
    /// 実際に打たれた場所
    pub played: Option<Coordinate>,
    /// AI が打った場合の評価値
    pub score: Option<i32>,
}

impl TurnReport {
    fn failed() -> Self {
        Self {
            status: GameStatus::Failed,
            player: None,
            board: None,
            played: None,
            score: None,
        }
    }

    fn new(status: GameStatus, player: Option<Player>, board: BitBoard) -> Self {
        Self {
            status,
            player,
            board: Some(board),
            played: None,
            score: None,
        }
    }
}

/// 1局分の対局
#[derive(Clone, Debug)]
pub struct Game {
    board: BitBoard,
    current_player: Player,
    config: DifficultyConfig,
    engine: Option<SearchEngine>,
}

impl Game {
    /// 初期配置・黒番で対局を始める
    pub fn new(config: impl Into<DifficultyConfig>) -> (Self, TurnReport) {
        let config = config.into();
        let game = Self {
            board: BitBoard::new(),
            current_player: Player::Black,
            config,
            engine: SearchEngine::from_config(config),
        };

        info!(
            difficulty = config.difficulty.name(),
            depth = config.depth,
            "game started"
        );

        let report =
            TurnReport::new(GameStatus::Successful, Some(game.current_player), game.board);
        (game, report)
    }

    pub fn board(&self) -> &BitBoard {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn config(&self) -> DifficultyConfig {
        self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// 現在の手番の合法手
    pub fn legal_moves(&self) -> u64 {
        self.board.legal_moves(self.current_player)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// (黒, 白) の石数
    pub fn piece_counts(&self) -> (u32, u32) {
        self.board.count_all_discs()
    }

    /// 直前の AI 探索の統計
    pub fn search_stats(&self) -> Option<SearchStats> {
        self.engine.as_ref().map(SearchEngine::stats)
    }

    /// AI に現在の手番の手を選ばせる。PVP や打てる手がない場合は `None`
    pub fn suggest_move(&mut self) -> Option<(Coordinate, i32)> {
        let engine = self.engine.as_mut()?;
        let best = engine.best_move(&mut self.board, self.current_player);
        best.coordinate.map(|coordinate| (coordinate, best.score))
    }

    /// 現在の手番で1手進める。`None` なら AI が手を選ぶ。
    pub fn play_turn(&mut self, coordinate: Option<Coordinate>) -> TurnReport {
        if self.is_over() {
            return self.ended();
        }

        let (coordinate, score) = match coordinate {
            Some(coordinate) => (coordinate, None),
            None => match self.suggest_move() {
                Some((coordinate, score)) => (coordinate, Some(score)),
                None => {
                    debug!(player = %self.current_player, "no move available from the engine");
                    return TurnReport::failed();
                }
            },
        };

        if self.board.play(self.current_player, coordinate) == MoveStatus::Failed {
            return TurnReport::failed();
        }

        let mut report = self.after_move();
        report.played = Some(coordinate);
        report.score = score;
        report
    }

    /// 現在の手番の合法手から1つを無作為に選んで打つ。終局後は `None`
    pub fn play_random_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<TurnReport> {
        if self.is_over() {
            return None;
        }
        let moves = self.board.legal_coordinates(self.current_player);
        let coordinate = *moves.choose(rng)?;
        Some(self.play_turn(Some(coordinate)))
    }

    fn after_move(&mut self) -> TurnReport {
        let opponent = self.current_player.opponent();

        if self.is_over() {
            return self.ended();
        }

        if !self.board.has_legal_move(opponent) {
            info!(skipped = %opponent, "turn skipped");
            return TurnReport::new(GameStatus::Skipped, Some(opponent), self.board);
        }

        self.current_player = opponent;
        TurnReport::new(GameStatus::Successful, Some(opponent), self.board)
    }

    fn ended(&self) -> TurnReport {
        let winner = self.board.get_winner();
        let (black_count, white_count) = self.piece_counts();
        info!(
            winner = ?winner,
            black = black_count,
            white = white_count,
            "game ended"
        );
        TurnReport::new(GameStatus::Ended, winner, self.board)
    }
}
