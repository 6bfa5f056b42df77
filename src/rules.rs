//! 合法手の生成、着手、終局判定

use crate::board::{BitBoard, Coordinate};
use crate::direction::Direction;
use crate::player::Player;
use tracing::debug;

/// 着手の結果
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    Success,
    Failed,
}

/// 終局時の勝敗
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TerminalScore {
    BlackWins,
    WhiteWins,
    Draw,
}

impl TerminalScore {
    pub fn winner(self) -> Option<Player> {
        match self {
            TerminalScore::BlackWins => Some(Player::Black),
            TerminalScore::WhiteWins => Some(Player::White),
            TerminalScore::Draw => None,
        }
    }
}

impl BitBoard {
    /// 合法手の一覧をビットボードとして取得
    ///
    /// 自分の石から各方向へ相手の石が連続する限り進み、その先の空きマスを合法手とする。
    #[inline(always)]
    pub fn legal_moves(&self, player: Player) -> u64 {
        let my = self.get(player);
        let opp = self.get(player.opponent());
        let empty = self.empty_slots();

        let mut legal_moves = 0u64;

        for direction in Direction::ALL {
            let mut candidates = direction.shift(my) & opp;
            while candidates != 0 {
                let next = direction.shift(candidates);
                legal_moves |= next & empty;
                candidates = next & opp;
            }
        }

        legal_moves
    }

    /// `position` がちょうど1マスで、かつ合法手に含まれるか
    #[inline]
    pub fn is_legal(&self, player: Player, position: u64) -> bool {
        position.count_ones() == 1 && (self.legal_moves(player) & position) == position
    }

    #[inline]
    pub fn has_legal_move(&self, player: Player) -> bool {
        self.legal_moves(player) != 0
    }

    /// `position` に置いたときにひっくり返る石（置いた石自身は含まない）
    ///
    /// 方向ごとに相手の石の連続を「橋」として集め、自分の石で閉じた場合だけ採用する。
    /// 空きマスや盤外で途切れた橋は捨てる。
    pub fn compute_flips(&self, player: Player, position: u64) -> u64 {
        let my = self.get(player);
        let opp = self.get(player.opponent());

        let mut flips = 0u64;

        for direction in Direction::ALL {
            let mut cursor = direction.shift(position);
            let mut bridge = 0u64;

            while cursor != 0 && (cursor & opp) == cursor {
                bridge |= cursor;
                cursor = direction.shift(cursor);
            }

            if cursor != 0 && (cursor & my) == cursor {
                flips |= bridge;
            }
        }

        flips
    }

    /// 石を置いてひっくり返す
    ///
    /// 不正な手なら盤面には一切触れずに `Failed` を返す。
    pub fn apply_move(&mut self, player: Player, position: u64) -> MoveStatus {
        if !self.is_legal(player, position) {
            debug!(player = %player, position, "illegal move rejected");
            return MoveStatus::Failed;
        }

        let opponent = player.opponent();
        let flip_mask = position | self.compute_flips(player, position);

        // 両方の色を一緒に更新する
        let my = self.get(player) | flip_mask;
        let opp = self.get(opponent) & !flip_mask;
        self.set(player, my);
        self.set(opponent, opp);

        MoveStatus::Success
    }

    /// 座標指定で着手
    pub fn play(&mut self, player: Player, coordinate: Coordinate) -> MoveStatus {
        self.apply_move(player, coordinate.to_bit())
    }

    /// 両者とも打てる場所がなければ終局
    #[inline]
    pub fn is_game_over(&self) -> bool {
        (self.legal_moves(Player::Black) | self.legal_moves(Player::White)) == 0
    }

    /// 石数の多い方が勝ち。同数なら引き分け。
    pub fn terminal_score(&self) -> TerminalScore {
        let (black_count, white_count) = self.count_all_discs();

        if black_count > white_count {
            TerminalScore::BlackWins
        } else if black_count < white_count {
            TerminalScore::WhiteWins
        } else {
            TerminalScore::Draw
        }
    }

    /// 勝者を返す
    pub fn get_winner(&self) -> Option<Player> {
        self.terminal_score().winner()
    }

    /// 合法手の一覧を座標のベクターとして取得
    pub fn legal_coordinates(&self, player: Player) -> Vec<Coordinate> {
        crate::board::BitIter::new(self.legal_moves(player))
            .map(Coordinate::from_bit)
            .collect()
    }
}
