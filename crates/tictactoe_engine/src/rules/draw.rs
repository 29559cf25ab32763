//! Draw detection logic for tic-tac-toe.

use super::win::find_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the game is a draw: the board is full and nobody won.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    fn fill(board: &mut Board, marks: &str) {
        for (pos, mark) in Position::ALL.iter().zip(marks.chars()) {
            let player = if mark == 'X' { Player::X } else { Player::O };
            board.place_piece(pos.row(), pos.col(), player).unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.place_piece(1, 1, Player::X).unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        fill(&mut board, "XOXOXXOXO");
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner_on_full_board() {
        // X X X / O O X / X O O
        let mut board = Board::new();
        fill(&mut board, "XXXOOXXOO");
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
