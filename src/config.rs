//! コマンドライン引数による設定

use crate::difficulty::{Difficulty, DifficultyConfig};
use crate::error::ConfigError;
use crate::player::{Player, PlayerType};

/// 指定できる探索深さの上限
pub const MAX_DEPTH: u32 = 20;

const DEFAULT_BENCH_GAMES: usize = 8;
const DEFAULT_RANDOM_PLIES: usize = 4;

/// 起動モード
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// コンソールで対局
    Cli,
    /// AI 同士の1局
    QuickGame,
    /// AI 同士の複数局を並列に実行
    Bench,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    pub difficulty: DifficultyConfig,
    /// 人間が操作する色。`None` なら AI 同士
    pub human: Option<Player>,
    pub games: usize,
    pub random_plies: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Cli,
            difficulty: DifficultyConfig::default(),
            human: Some(Player::Black),
            games: DEFAULT_BENCH_GAMES,
            random_plies: DEFAULT_RANDOM_PLIES,
            seed: None,
        }
    }
}

impl GameConfig {
    /// プログラム名を除いた引数から設定を読む
    ///
    /// `[cli|quick-game|bench] [--difficulty D] [--depth N] [--human black|white|none]
    ///  [--games N] [--random-plies N] [--seed N]`
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = GameConfig::default();
        let mut depth = None;
        let mut args = args.into_iter().peekable();

        if let Some(first) = args.peek() {
            if !first.starts_with("--") {
                config.mode = parse_mode(first)?;
                args.next();
            }
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--difficulty" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--difficulty"))?;
                    let difficulty = Difficulty::from_name(&value)
                        .ok_or(ConfigError::UnknownDifficulty(value))?;
                    config.difficulty = difficulty.into();
                }
                "--depth" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--depth"))?;
                    depth = Some(parse_number::<u32>("--depth", value)?);
                }
                "--human" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--human"))?;
                    config.human = parse_colour(&value)?;
                }
                "--games" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--games"))?;
                    config.games = parse_number("--games", value)?;
                }
                "--random-plies" => {
                    let value = args
                        .next()
                        .ok_or(ConfigError::MissingValue("--random-plies"))?;
                    config.random_plies = parse_number("--random-plies", value)?;
                }
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    config.seed = Some(parse_number("--seed", value)?);
                }
                _ => return Err(ConfigError::UnknownOption(arg)),
            }
        }

        // --depth は --difficulty の後に適用する
        if let Some(depth) = depth {
            if depth > MAX_DEPTH {
                return Err(ConfigError::DepthOutOfRange(depth));
            }
            config.difficulty = config.difficulty.with_depth(depth);
        }

        Ok(config)
    }

    /// 指定した色を誰が操作するか
    pub fn player_type(&self, player: Player) -> PlayerType {
        if !self.difficulty.has_ai() {
            return PlayerType::Human;
        }
        match self.mode {
            Mode::Cli if self.human == Some(player) => PlayerType::Human,
            _ => PlayerType::Ai,
        }
    }
}

fn parse_mode(value: &str) -> Result<Mode, ConfigError> {
    match value {
        "cli" => Ok(Mode::Cli),
        "quick-game" => Ok(Mode::QuickGame),
        "bench" => Ok(Mode::Bench),
        _ => Err(ConfigError::UnknownMode(value.to_string())),
    }
}

fn parse_colour(value: &str) -> Result<Option<Player>, ConfigError> {
    match value.to_lowercase().as_str() {
        "black" => Ok(Some(Player::Black)),
        "white" => Ok(Some(Player::White)),
        "none" => Ok(None),
        _ => Err(ConfigError::UnknownColour(value.to_string())),
    }
}

fn parse_number<T>(option: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { option, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let config = GameConfig::from_args(args(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.mode, Mode::Cli);
        assert_eq!(config.difficulty.difficulty, Difficulty::Beginner);
        assert_eq!(config.player_type(Player::Black), PlayerType::Human);
        assert_eq!(config.player_type(Player::White), PlayerType::Ai);
    }

    #[test]
    fn parses_mode_and_options() {
        let config = GameConfig::from_args(args(&[
            "bench",
            "--depth",
            "3",
            "--difficulty",
            "hardcore",
            "--games",
            "16",
            "--random-plies",
            "2",
            "--seed",
            "42",
        ]))
        .unwrap();
        assert_eq!(config.mode, Mode::Bench);
        assert_eq!(config.difficulty.depth, 3);
        assert_eq!(config.difficulty.heuristic, Some(Heuristic::Positional));
        assert_eq!(config.games, 16);
        assert_eq!(config.random_plies, 2);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.player_type(Player::Black), PlayerType::Ai);
    }

    #[test]
    fn pvp_makes_both_sides_human() {
        let config =
            GameConfig::from_args(args(&["--difficulty", "pvp", "--human", "none"])).unwrap();
        assert_eq!(config.human, None);
        assert_eq!(config.player_type(Player::Black), PlayerType::Human);
        assert_eq!(config.player_type(Player::White), PlayerType::Human);
    }

    #[test]
    fn depth_zero_means_both_sides_are_human() {
        let config =
            GameConfig::from_args(args(&["--difficulty", "beginner", "--depth", "0"])).unwrap();
        assert_eq!(config.difficulty.depth, 0);
        assert_eq!(config.player_type(Player::Black), PlayerType::Human);
        assert_eq!(config.player_type(Player::White), PlayerType::Human);
    }

    #[test]
    fn human_colour_selects_the_human_side() {
        let config = GameConfig::from_args(args(&["cli", "--human", "white"])).unwrap();
        assert_eq!(config.player_type(Player::Black), PlayerType::Ai);
        assert_eq!(config.player_type(Player::White), PlayerType::Human);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            GameConfig::from_args(args(&["tournament"])),
            Err(ConfigError::UnknownMode("tournament".into()))
        );
        assert_eq!(
            GameConfig::from_args(args(&["--verbose"])),
            Err(ConfigError::UnknownOption("--verbose".into()))
        );
        assert_eq!(
            GameConfig::from_args(args(&["--depth"])),
            Err(ConfigError::MissingValue("--depth"))
        );
        assert_eq!(
            GameConfig::from_args(args(&["--depth", "deep"])),
            Err(ConfigError::InvalidNumber {
                option: "--depth",
                value: "deep".into()
            })
        );
        assert_eq!(
            GameConfig::from_args(args(&["--depth", "21"])),
            Err(ConfigError::DepthOutOfRange(21))
        );
        assert_eq!(
            GameConfig::from_args(args(&["--difficulty", "expert"])),
            Err(ConfigError::UnknownDifficulty("expert".into()))
        );
        assert_eq!(
            GameConfig::from_args(args(&["--human", "red"])),
            Err(ConfigError::UnknownColour("red".into()))
        );
    }
}
