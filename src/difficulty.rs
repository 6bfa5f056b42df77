use crate::heuristic::Heuristic;
use std::fmt;

/// 対局モード（PVP または AI の難易度）
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Pvp,
    Beginner,
    Intermediate,
    Hardcore,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Pvp,
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Hardcore,
    ];

    /// 既定の探索深さ（0 は AI なし）
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Pvp => 0,
            Difficulty::Beginner => 4,
            Difficulty::Intermediate => 6,
            Difficulty::Hardcore => 8,
        }
    }

    /// 難易度に対応する評価関数。PVP には存在しない。
    pub const fn heuristic(self) -> Option<Heuristic> {
        match self {
            Difficulty::Pvp => None,
            Difficulty::Beginner => Some(Heuristic::Simple),
            Difficulty::Intermediate => Some(Heuristic::Mobility),
            Difficulty::Hardcore => Some(Heuristic::Positional),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Pvp => "pvp",
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Hardcore => "hardcore",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Pvp => "対人戦",
            Difficulty::Beginner => "初級",
            Difficulty::Intermediate => "中級",
            Difficulty::Hardcore => "上級",
        };
        f.write_str(label)
    }
}

/// 対局開始時に一度だけ決める AI 設定
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub difficulty: Difficulty,
    pub depth: u32,
    pub heuristic: Option<Heuristic>,
}

impl DifficultyConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            depth: difficulty.depth(),
            heuristic: difficulty.heuristic(),
        }
    }

    /// 探索深さだけを差し替える
    pub fn with_depth(self, depth: u32) -> Self {
        Self { depth, ..self }
    }

    /// AI が打てる設定かどうか。深さ 0 は対人戦と同じ扱い
    pub fn has_ai(&self) -> bool {
        self.heuristic.is_some() && self.depth > 0
    }
}

impl From<Difficulty> for DifficultyConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::from_difficulty(difficulty)
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Beginner)
    }
}
