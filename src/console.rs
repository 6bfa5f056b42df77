//! コンソールでの入出力

use crate::board::{BitBoard, Coordinate};
use crate::error::InputError;
use crate::game::{GameStatus, TurnReport};
use crate::player::Player;
use std::io::{self, BufRead, Write};

/// `"3 e"` の形式（行 1〜8、列 A〜H）の入力を座標に変換
pub fn parse_input(line: &str) -> Result<Coordinate, InputError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Err(InputError::Quit),
        "?" | "help" => return Err(InputError::Help),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(InputError::WrongArity(parts.len()));
    }

    let mut chars = Vec::with_capacity(2);
    for part in &parts {
        let mut iter = part.chars();
        match (iter.next(), iter.next()) {
            (Some(c), None) => chars.push(c),
            _ => return Err(InputError::WrongLength(part.to_string())),
        }
    }

    let (row_char, column_char) = (chars[0], chars[1]);
    let row = row_char
        .to_digit(10)
        .ok_or(InputError::NotADigit(row_char))?;
    if !column_char.is_ascii_alphabetic() {
        return Err(InputError::NotALetter(column_char));
    }
    if !(1..=8).contains(&row) {
        return Err(InputError::OutOfRange(row_char.to_string()));
    }

    let column_char = column_char.to_ascii_uppercase();
    if !('A'..='H').contains(&column_char) {
        return Err(InputError::OutOfRange(column_char.to_string()));
    }
    let column = column_char as u8 - b'A' + 1;

    // 範囲は確認済み
    Coordinate::new(row as u8, column).map_err(|_| InputError::OutOfRange(trimmed.to_string()))
}

/// 合法手の一覧（例: `3E 4F 5C 6D`）
pub fn format_legal_moves(board: &BitBoard, player: Player) -> String {
    board
        .legal_coordinates(player)
        .iter()
        .map(Coordinate::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 人間の手番の入力を読む。終了が指示されたか入力が尽きたら `None`
pub fn read_coordinate<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &BitBoard,
    player: Player,
) -> io::Result<Option<Coordinate>> {
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_input(&line) {
            Ok(coordinate) => return Ok(Some(coordinate)),
            Err(InputError::Quit) => return Ok(None),
            Err(InputError::Help) => {
                writeln!(output, "行(1-8) と 列(A-H) を空白で区切って入力します。例: 3 E")?;
                writeln!(output, "打てる場所: {}", format_legal_moves(board, player))?;
            }
            Err(e) => writeln!(output, "! {} !", e)?,
        }
    }
}

/// 手番の案内
pub fn prompt<W: Write>(output: &mut W, player: Player) -> io::Result<()> {
    writeln!(
        output,
        "{}({})の番です。行(1-8) 列(A-H) を入力してください（?: ヘルプ, q: 終了）",
        player,
        player.glyph()
    )
}

/// 1手の結果を表示
pub fn present_report<W: Write>(output: &mut W, report: &TurnReport) -> io::Result<()> {
    if let Some(board) = &report.board {
        writeln!(output, "{}", board)?;
    }

    match report.status {
        GameStatus::Successful => {
            if let Some(played) = report.played {
                writeln!(output, "{}に置きました", played)?;
            }
        }
        GameStatus::Skipped => {
            if let Some(player) = report.player {
                writeln!(output, "{}は打てる場所がありません。パスします。", player)?;
            }
        }
        GameStatus::Ended => {
            match report.player {
                Some(winner) => writeln!(output, "{}の勝ち！", winner)?,
                None => writeln!(output, "引き分け！")?,
            }
            if let Some(board) = &report.board {
                let (black_count, white_count) = board.count_all_discs();
                writeln!(
                    output,
                    "{}({}): {}  |  {}({}): {}",
                    Player::Black,
                    Player::Black.glyph(),
                    black_count,
                    Player::White,
                    Player::White.glyph(),
                    white_count
                )?;
            }
        }
        GameStatus::Failed => writeln!(output, "! そこには置けません !")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::game::Game;
    use std::io::Cursor;

    fn coordinate(row: u8, column: u8) -> Coordinate {
        Coordinate::new(row, column).unwrap()
    }

    #[test]
    fn parses_row_and_column() {
        assert_eq!(parse_input("3 e"), Ok(coordinate(3, 5)));
        assert_eq!(parse_input("  8   A \n"), Ok(coordinate(8, 1)));
        assert_eq!(parse_input("1 h"), Ok(coordinate(1, 8)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_input("3"), Err(InputError::WrongArity(1)));
        assert_eq!(parse_input("3 e 4"), Err(InputError::WrongArity(3)));
        assert_eq!(parse_input("33 e"), Err(InputError::WrongLength("33".into())));
        assert_eq!(parse_input("x e"), Err(InputError::NotADigit('x')));
        assert_eq!(parse_input("3 5"), Err(InputError::NotALetter('5')));
        assert_eq!(parse_input("9 e"), Err(InputError::OutOfRange("9".into())));
        assert_eq!(parse_input("0 a"), Err(InputError::OutOfRange("0".into())));
        assert_eq!(parse_input("3 z"), Err(InputError::OutOfRange("Z".into())));
    }

    #[test]
    fn recognises_commands() {
        assert_eq!(parse_input("q"), Err(InputError::Quit));
        assert_eq!(parse_input("QUIT"), Err(InputError::Quit));
        assert_eq!(parse_input("?"), Err(InputError::Help));
    }

    #[test]
    fn read_coordinate_retries_after_errors() {
        let board = BitBoard::new();
        let mut input = Cursor::new("bad\n?\n3 e\n");
        let mut output = Vec::new();
        let result = read_coordinate(&mut input, &mut output, &board, Player::Black).unwrap();
        assert_eq!(result, Some(coordinate(3, 5)));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("wrong input"));
        assert!(text.contains("3E"));
    }

    #[test]
    fn read_coordinate_stops_on_quit_or_eof() {
        let board = BitBoard::new();
        let mut output = Vec::new();
        let mut quit = Cursor::new("q\n");
        assert_eq!(
            read_coordinate(&mut quit, &mut output, &board, Player::Black).unwrap(),
            None
        );
        let mut empty = Cursor::new("");
        assert_eq!(
            read_coordinate(&mut empty, &mut output, &board, Player::Black).unwrap(),
            None
        );
    }

    #[test]
    fn legal_moves_are_listed_in_bit_order() {
        let board = BitBoard::new();
        assert_eq!(format_legal_moves(&board, Player::Black), "3E 4F 5C 6D");
    }

    #[test]
    fn presents_failed_and_successful_reports() {
        let (mut game, _) = Game::new(Difficulty::Pvp);

        let mut output = Vec::new();
        present_report(&mut output, &game.play_turn(Some(coordinate(1, 1)))).unwrap();
        assert!(String::from_utf8(output).unwrap().contains("置けません"));

        let mut output = Vec::new();
        present_report(&mut output, &game.play_turn(Some(coordinate(3, 5)))).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("3Eに置きました"));
        assert!(text.contains("1 |"));
    }
}
