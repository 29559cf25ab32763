//! Tests for state string encoding and decoding.

use tictactoe_engine::{Board, Player, StateString, StateStringError, TicTacToe, decode, encode};

#[test]
fn test_decode_then_encode_is_identity() {
    // Every string over {0,1,2}, reachable in play or not.
    for n in 0..3u32.pow(9) {
        let state: String = (0..9)
            .rev()
            .map(|digit| char::from(b'0' + (n / 3u32.pow(digit) % 3) as u8))
            .collect();
        assert_eq!(encode(&decode(&state).unwrap()), state);
    }
}

#[test]
fn test_played_board_survives_roundtrip() {
    let mut board = Board::new();
    board.place_piece(1, 1, Player::X).unwrap();
    board.place_piece(0, 2, Player::O).unwrap();
    board.place_piece(2, 0, Player::X).unwrap();

    let restored = decode(&encode(&board)).unwrap();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(restored.owner_at(row, col), board.owner_at(row, col));
        }
    }
}

#[test]
fn test_malformed_strings_are_rejected() {
    assert_eq!(decode("00000000").unwrap_err(), StateStringError::WrongLength(8));
    assert_eq!(
        decode("0000000a0").unwrap_err(),
        StateStringError::InvalidCharacter { index: 7, found: 'a' }
    );
    // Multi-byte characters count once.
    assert_eq!(
        decode("00000000é").unwrap_err(),
        StateStringError::InvalidCharacter { index: 8, found: 'é' }
    );
}

#[test]
fn test_initial_state_string() {
    assert_eq!(TicTacToe::initial_state_string(), "000000000");
    assert_eq!(StateString::default().as_str(), "000000000");
}

#[test]
fn test_state_string_serde() {
    let state: StateString = "120000000".parse().unwrap();
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, "\"120000000\"");

    let back: StateString = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);

    assert!(serde_json::from_str::<StateString>("\"123\"").is_err());
}
