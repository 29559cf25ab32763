//! Move selection for computer-controlled players.

use crate::board::Board;
use crate::position::Position;
use crate::types::Player;

/// Picks a move for a computer-controlled player.
///
/// New strategies plug into [`crate::TicTacToe::with_strategy`].
pub trait MoveStrategy: std::fmt::Debug {
    /// Returns the position to play, or `None` to pass.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Position>;
}

/// Strategy that never moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMove;

impl MoveStrategy for NoMove {
    fn select_move(&mut self, _board: &Board, _player: Player) -> Option<Position> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_move_always_passes() {
        let mut strategy = NoMove;
        assert_eq!(strategy.select_move(&Board::new(), Player::O), None);
    }
}
