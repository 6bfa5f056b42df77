use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// 評価値の符号付けに使うラベル（黒 +1 / 白 -1）
    #[inline(always)]
    pub const fn label(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    /// 相手のプレイヤーを返す
    #[inline(always)]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// 盤面表示用の文字
    pub const fn glyph(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }

    /// 文字列表現を返す
    pub const fn name(self) -> &'static str {
        match self {
            Player::Black => "黒",
            Player::White => "白",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 手番を誰が操作するか
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlayerType {
    Human,
    Ai,
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Human => f.write_str("人間"),
            PlayerType::Ai => f.write_str("AI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for player in [Player::Black, Player::White] {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn labels_are_opposite() {
        assert_eq!(Player::Black.label(), 1);
        assert_eq!(Player::White.label(), -1);
        assert_eq!(Player::Black.label(), -Player::Black.opponent().label());
    }

    #[test]
    fn glyphs() {
        assert_eq!(Player::Black.glyph(), 'X');
        assert_eq!(Player::White.glyph(), 'O');
    }
}
