//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::Player;
use tracing::{instrument, trace};

/// The eight winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first fully-owned triple in [`LINES`] order,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(owner) = board.owner_of(a)
            && board.owner_of(b) == Some(owner)
            && board.owner_of(c) == Some(owner)
        {
            trace!(%owner, line = ?[a, b, c], "Winning triple");
            return Some(owner);
        }
    }

    None
}
