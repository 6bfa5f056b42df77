//! 8方向へのビットシフト

/// 1列目（A列）のマス
pub const LEFT_EDGE_MASK: u64 = 0x8080808080808080;

/// 8列目（H列）のマス
pub const RIGHT_EDGE_MASK: u64 = 0x0101010101010101;

/// 盤面上の8方向
///
/// 北は行番号が大きくなる向き、西は1列目へ向かう向き。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// 全ての石を1マスずらす。盤面の端を越えた石は消える。
    #[inline(always)]
    pub const fn shift(self, mask: u64) -> u64 {
        match self {
            Direction::NorthWest => (mask << 9) & !RIGHT_EDGE_MASK,
            Direction::North => mask << 8,
            Direction::NorthEast => (mask << 7) & !LEFT_EDGE_MASK,
            Direction::East => (mask >> 1) & !LEFT_EDGE_MASK,
            Direction::SouthEast => (mask >> 9) & !LEFT_EDGE_MASK,
            Direction::South => mask >> 8,
            Direction::SouthWest => (mask >> 7) & !RIGHT_EDGE_MASK,
            Direction::West => (mask << 1) & !RIGHT_EDGE_MASK,
        }
    }
}

/// 周囲8方向に隣接するマス（元のマス自身は含まない）
#[inline(always)]
pub fn adjacent(mask: u64) -> u64 {
    let mut result = 0;
    for direction in Direction::ALL {
        result |= direction.shift(mask);
    }
    result & !mask
}
