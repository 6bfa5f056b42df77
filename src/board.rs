use crate::error::CoordinateError;
use crate::player::Player;
use std::fmt;

/// 初期配置の黒石（D4・E5）
pub const DEFAULT_BLACK: u64 = 0x0000000810000000;
/// 初期配置の白石（D5・E4）
pub const DEFAULT_WHITE: u64 = 0x0000001008000000;

/// 盤面の一辺のマス数
pub const BOARD_SIZE: u8 = 8;

/// 盤面上のマス（行・列ともに 1〜8）
///
/// ビット位置は `8 * (row - 1) + (8 - column)`。
/// ビット0が1行目8列目、ビット63が8行目1列目になる。
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// 範囲チェック付きで座標を作成
    pub fn new(row: u8, column: u8) -> Result<Self, CoordinateError> {
        if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&column) {
            return Err(CoordinateError::OutOfRange { row, column });
        }
        Ok(Self { row, column })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// 座標を1ビットだけ立ったビットボードに変換
    #[inline(always)]
    pub const fn to_bit(self) -> u64 {
        1u64 << (8 * (self.row as u32 - 1) + (8 - self.column as u32))
    }

    /// 1ビットだけ立ったビットボードを座標に変換
    ///
    /// 呼び出し側は `bit` にちょうど1ビットだけ立っていることを保証すること。
    #[inline(always)]
    pub fn from_bit(bit: u64) -> Self {
        debug_assert_eq!(bit.count_ones(), 1, "ビットがちょうど1つではありません");
        let index = bit.trailing_zeros() as u8;
        Self {
            row: index / 8 + 1,
            column: 8 - index % 8,
        }
    }

    /// 全64マスを 1行目1列目 から順に列挙
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=BOARD_SIZE)
            .flat_map(|row| (1..=BOARD_SIZE).map(move |column| Coordinate { row, column }))
    }

    /// 列を表す文字（A〜H）
    pub fn column_letter(self) -> char {
        (b'A' + self.column - 1) as char
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column_letter())
    }
}

/// ビットマスクの立っているビットを下位から1つずつ取り出すイテレータ
#[derive(Clone, Debug)]
pub struct BitIter(u64);

impl BitIter {
    pub fn new(mask: u64) -> Self {
        BitIter(mask)
    }
}

impl Iterator for BitIter {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.0 == 0 {
            return None;
        }
        let lowest = self.0 & self.0.wrapping_neg();
        self.0 &= self.0 - 1; // 最下位ビットをクリア
        Some(lowest)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIter {}

/// 探索中の盤面退避用のコピー
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    black: u64,
    white: u64,
}

/// 色ごとに64ビットを持つ盤面
///
/// 不変条件: `black & white == 0`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitBoard {
    black: u64,
    white: u64,
}

impl BitBoard {
    /// 新しいビットボードを初期配置で作成
    pub fn new() -> Self {
        BitBoard {
            black: DEFAULT_BLACK,
            white: DEFAULT_WHITE,
        }
    }

    /// 任意の配置から作成（テストや局面の再現用）
    pub fn from_bits(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "黒と白が重なっています");
        BitBoard { black, white }
    }

    /// 指定した色の石のビットを取得
    #[inline(always)]
    pub fn get(&self, player: Player) -> u64 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// 指定した色の石のビットを置き換える
    #[inline(always)]
    pub fn set(&mut self, player: Player, bits: u64) {
        match player {
            Player::Black => self.black = bits,
            Player::White => self.white = bits,
        }
    }

    /// 空きマス
    #[inline(always)]
    pub fn empty_slots(&self) -> u64 {
        !self.black & !self.white
    }

    #[inline(always)]
    pub fn occupied(&self) -> u64 {
        self.black | self.white
    }

    /// 別の盤面の内容をそのままコピー
    #[inline(always)]
    pub fn copy_from(&mut self, other: &BitBoard) {
        self.black = other.black;
        self.white = other.white;
    }

    #[inline(always)]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            black: self.black,
            white: self.white,
        }
    }

    #[inline(always)]
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.black = snapshot.black;
        self.white = snapshot.white;
    }

    /// 指定位置の石を取得
    pub fn get_disc(&self, coordinate: Coordinate) -> Option<Player> {
        let bit = coordinate.to_bit();

        if (self.black & bit) != 0 {
            Some(Player::Black)
        } else if (self.white & bit) != 0 {
            Some(Player::White)
        } else {
            None
        }
    }

    /// 石の数をカウント
    #[inline]
    pub fn count_discs(&self, player: Player) -> u32 {
        self.get(player).count_ones()
    }

    /// 両プレイヤーの石の数を取得
    pub fn count_all_discs(&self) -> (u32, u32) {
        (self.black.count_ones(), self.white.count_ones())
    }
}

impl Default for BitBoard {
    fn default() -> Self {
        BitBoard::new()
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 8行目を上にして表示する
        for row in (1..=BOARD_SIZE).rev() {
            write!(f, "{} |", row)?;

            for column in 1..=BOARD_SIZE {
                let coordinate = Coordinate { row, column };
                match self.get_disc(coordinate) {
                    Some(player) => write!(f, "{}|", player.glyph())?,
                    None => write!(f, " |")?,
                }
            }

            writeln!(f)?;
        }

        write!(f, "  ")?;
        for column in 1..=BOARD_SIZE {
            write!(f, " {}", (b'A' + column - 1) as char)?;
        }
        writeln!(f)?;

        let (black_count, white_count) = self.count_all_discs();
        writeln!(
            f,
            "{}({}): {} {}({}): {}",
            Player::Black,
            Player::Black.glyph(),
            black_count,
            Player::White,
            Player::White.glyph(),
            white_count
        )
    }
}
