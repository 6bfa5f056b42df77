//! エラー型の定義

use thiserror::Error;

/// 座標のエラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("coordinate out of range: row {row}, column {column} (both must be 1-8)")]
    OutOfRange { row: u8, column: u8 },
}

/// コンソール入力のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("wrong input: {0} parameters entered instead of 2")]
    WrongArity(usize),

    #[error("wrong input: '{0}' is longer than one character")]
    WrongLength(String),

    #[error("wrong input: '{0}' is not a digit")]
    NotADigit(char),

    #[error("wrong input: '{0}' is not a letter")]
    NotALetter(char),

    #[error("wrong input: '{0}' is out of range (rows 1-8, columns A-H)")]
    OutOfRange(String),

    #[error("quit requested")]
    Quit,

    #[error("help requested")]
    Help,
}

/// コマンドライン設定のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown mode: {0} (expected cli, quick-game or bench)")]
    UnknownMode(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown difficulty: {0} (expected pvp, beginner, intermediate or hardcore)")]
    UnknownDifficulty(String),

    #[error("unknown colour: {0} (expected black, white or none)")]
    UnknownColour(String),

    #[error("invalid value for {option}: {value}")]
    InvalidNumber { option: &'static str, value: String },

    #[error("depth {0} is out of range (0-{max})", max = crate::config::MAX_DEPTH)]
    DepthOutOfRange(u32),
}
