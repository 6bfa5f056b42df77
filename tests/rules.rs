use bitreversi::board::{BitBoard, BitIter, Coordinate};
use bitreversi::direction::Direction;
use bitreversi::player::Player;
use bitreversi::rules::MoveStatus;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn coordinate(row: u8, column: u8) -> Coordinate {
    Coordinate::new(row, column).unwrap()
}

/// 合法手を1マスずつ総当たりで確かめる
fn legal_by_brute_force(board: &BitBoard, player: Player) -> u64 {
    Coordinate::all()
        .map(Coordinate::to_bit)
        .filter(|&bit| (board.occupied() & bit) == 0)
        .filter(|&bit| board.compute_flips(player, bit) != 0)
        .fold(0, |acc, bit| acc | bit)
}

#[test]
fn opening_moves() {
    let board = BitBoard::new();
    assert_eq!(board.legal_moves(Player::Black), 17729692631040);
    assert_eq!(board.legal_moves(Player::White), 8813810810880);
    assert_eq!(
        board.legal_coordinates(Player::Black),
        vec![coordinate(3, 5), coordinate(4, 6), coordinate(5, 3), coordinate(6, 4)]
    );
}

#[test]
fn first_move_flips_one_disc() {
    let mut board = BitBoard::new();
    assert_eq!(board.play(Player::Black, coordinate(3, 5)), MoveStatus::Success);
    assert_eq!(board.get(Player::Black), 34762915840);
    assert_eq!(board.get(Player::White), 68719476736);
    assert_eq!(
        board.legal_coordinates(Player::White),
        vec![coordinate(3, 6), coordinate(3, 4), coordinate(5, 6)]
    );
}

#[test]
fn random_playouts_keep_the_board_consistent() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = BitBoard::new();
        let mut player = Player::Black;

        while !board.is_game_over() {
            let legal = board.legal_moves(player);
            assert_eq!(legal, legal_by_brute_force(&board, player));
            assert_eq!(legal & board.occupied(), 0);

            if legal == 0 {
                player = player.opponent();
                continue;
            }

            let before = board;
            let moves: Vec<u64> = BitIter::new(legal).collect();
            let position = *moves.choose(&mut rng).unwrap();
            let flips = before.compute_flips(player, position);

            assert_eq!(board.apply_move(player, position), MoveStatus::Success);
            assert_eq!(board.get(Player::Black) & board.get(Player::White), 0);
            assert_eq!(board.get(player), before.get(player) | position | flips);
            assert_eq!(
                board.get(player.opponent()),
                before.get(player.opponent()) & !flips
            );
            assert_eq!(board.occupied().count_ones(), before.occupied().count_ones() + 1);

            player = player.opponent();
        }

        let (black, white) = board.count_all_discs();
        assert!(black + white <= 64);
        assert_eq!(board.legal_moves(Player::Black), 0);
        assert_eq!(board.legal_moves(Player::White), 0);
    }
}

#[test]
fn illegal_moves_do_not_touch_the_board() {
    let mut board = BitBoard::new();
    let before = board;

    // 挟めない空きマス、石のあるマス、2マス同時、空のマスク
    for position in [
        coordinate(1, 1).to_bit(),
        coordinate(4, 4).to_bit(),
        coordinate(3, 5).to_bit() | coordinate(4, 6).to_bit(),
        0,
    ] {
        assert_eq!(board.apply_move(Player::Black, position), MoveStatus::Failed);
        assert_eq!(board, before);
    }
}

#[test]
fn shifts_never_wrap_around_the_edges() {
    let right_column: u64 = (1..=8).map(|row| coordinate(row, 8).to_bit()).sum();
    let left_column: u64 = (1..=8).map(|row| coordinate(row, 1).to_bit()).sum();

    for direction in Direction::ALL {
        let from_right = direction.shift(right_column);
        let from_left = direction.shift(left_column);
        assert_eq!(from_right & left_column, 0, "{:?}", direction);
        assert_eq!(from_left & right_column, 0, "{:?}", direction);
    }
}
