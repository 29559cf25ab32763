//! Board state strings.
//!
//! A state string is 9 characters, row-major, one per cell:
//! `'0'` empty, `'1'` player X, `'2'` player O.

use crate::board::Board;
use crate::cell::Holder;
use crate::error::StateStringError;
use crate::position::{CELL_COUNT, Position};
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// State string of an empty board.
pub const INITIAL_STATE: &str = "000000000";

/// Encodes the board as a 9-character state string.
#[instrument(skip(board))]
pub fn encode(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|cell| match cell.owner() {
            Some(player) => player.state_digit(),
            None => '0',
        })
        .collect()
}

/// Decodes a state string into a fresh board with the default layout.
///
/// # Errors
///
/// Returns [`StateStringError`] if the string is not 9 characters over `0`, `1`, `2`.
#[instrument]
pub fn decode(s: &str) -> Result<Board, StateStringError> {
    let mut board = Board::new();
    decode_into(&mut board, s)?;
    Ok(board)
}

/// Applies a state string to an existing board.
///
/// Each cell is overwritten directly, with no occupancy check. The whole
/// string is validated first, so a malformed string leaves `board` untouched.
#[instrument(skip(board))]
pub fn decode_into(board: &mut Board, s: &str) -> Result<(), StateStringError> {
    let owners = parse_owners(s)?;
    for (pos, owner) in Position::ALL.into_iter().zip(owners) {
        board.overwrite(pos, owner);
    }
    debug!(state = s, "State string applied");
    Ok(())
}

fn parse_owners(s: &str) -> Result<[Option<Player>; CELL_COUNT], StateStringError> {
    let len = s.chars().count();
    if len != CELL_COUNT {
        return Err(StateStringError::WrongLength(len));
    }

    let mut owners = [None; CELL_COUNT];
    for (index, ch) in s.chars().enumerate() {
        owners[index] = match ch {
            '0' => None,
            '1' | '2' => ch
                .to_digit(10)
                .and_then(|digit| Player::from_index(digit as usize - 1)),
            found => return Err(StateStringError::InvalidCharacter { index, found }),
        };
    }
    Ok(owners)
}

/// A validated state string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateString(String);

impl StateString {
    /// State string of an empty board.
    pub fn initial() -> Self {
        Self(INITIAL_STATE.to_string())
    }

    /// Captures the board's current state.
    pub fn from_board(board: &Board) -> Self {
        Self(encode(board))
    }

    /// Builds a board from this state.
    pub fn to_board(&self) -> Board {
        let mut board = Board::new();
        self.apply_to(&mut board);
        board
    }

    /// Overwrites `board` with this state.
    pub fn apply_to(&self, board: &mut Board) {
        // Already validated; parse_owners cannot fail here.
        if let Ok(owners) = parse_owners(&self.0) {
            for (pos, owner) in Position::ALL.into_iter().zip(owners) {
                board.overwrite(pos, owner);
            }
        }
    }

    /// Returns the raw string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StateString {
    fn default() -> Self {
        Self::initial()
    }
}

impl FromStr for StateString {
    type Err = StateStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_owners(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for StateString {
    type Error = StateStringError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_owners(&s)?;
        Ok(Self(s))
    }
}

impl From<StateString> for String {
    fn from(state: StateString) -> Self {
        state.0
    }
}

impl std::fmt::Display for StateString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty_board() {
        assert_eq!(encode(&Board::new()), INITIAL_STATE);
    }

    #[test]
    fn test_encode_row_major() {
        let mut board = Board::new();
        board.place_piece(0, 1, Player::X).unwrap();
        board.place_piece(2, 0, Player::O).unwrap();
        assert_eq!(encode(&board), "010000200");
    }

    #[test]
    fn test_decode_places_owners() {
        let board = decode("120000002").unwrap();
        assert_eq!(board.owner_at(0, 0), Some(Player::X));
        assert_eq!(board.owner_at(0, 1), Some(Player::O));
        assert_eq!(board.owner_at(2, 2), Some(Player::O));
        assert_eq!(board.owner_at(1, 1), None);
    }

    #[test]
    fn test_decode_overwrites_occupied_cells() {
        let mut board = Board::new();
        board.place_piece(0, 0, Player::X).unwrap();
        board.place_piece(1, 1, Player::X).unwrap();

        decode_into(&mut board, "200000000").unwrap();
        assert_eq!(board.owner_at(0, 0), Some(Player::O));
        assert_eq!(board.owner_at(1, 1), None);
    }

    #[test]
    fn test_decoded_pieces_sit_on_their_cells() {
        let board = decode("000010000").unwrap();
        let cell = board.cell(Position::Center);
        let piece = cell.occupant().unwrap();
        assert_eq!(piece.position(), board.layout().cell_origin(Position::Center));
        assert_eq!(piece.visual_tag(), "x.png");
    }

    #[test]
    fn test_decode_wrong_length() {
        assert_eq!(decode("0000").unwrap_err(), StateStringError::WrongLength(4));
        assert_eq!(decode("0000000000").unwrap_err(), StateStringError::WrongLength(10));
        assert_eq!(decode("").unwrap_err(), StateStringError::WrongLength(0));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("000030000").unwrap_err(),
            StateStringError::InvalidCharacter { index: 4, found: '3' }
        );
        assert_eq!(
            decode("x00000000").unwrap_err(),
            StateStringError::InvalidCharacter { index: 0, found: 'x' }
        );
    }

    #[test]
    fn test_malformed_string_leaves_board_untouched() {
        let mut board = decode("120000000").unwrap();
        let before = board.clone();
        assert!(decode_into(&mut board, "000000009").is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_state_string_parse_and_display() {
        let state: StateString = "102000000".parse().unwrap();
        assert_eq!(state.to_string(), "102000000");
        assert_eq!(state.to_board().owner_at(0, 2), Some(Player::O));
        assert!("10200000".parse::<StateString>().is_err());
    }
}
