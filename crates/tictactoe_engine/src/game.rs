//! Placement orchestration and the host-facing game API.

use crate::board::Board;
use crate::cell::{BoardLayout, Cell};
use crate::codec::{self, INITIAL_STATE, StateString};
use crate::context::PlayerRegistry;
use crate::error::{PlaceError, StateStringError};
use crate::position::Position;
use crate::rules;
use crate::strategy::{MoveStrategy, NoMove};
use crate::types::{GamePhase, Piece, PieceStyle, Player};
use tracing::{debug, info, instrument, warn};

/// A tic-tac-toe session.
///
/// Owns the board and is the only thing that writes to it. Turn order lives
/// with the host's [`PlayerRegistry`], which is passed in where needed.
#[derive(Debug)]
pub struct TicTacToe {
    board: Board,
    phase: GamePhase,
    strategy: Box<dyn MoveStrategy>,
}

impl TicTacToe {
    /// Creates a session in the `Setup` phase with the default layout.
    #[instrument]
    pub fn new() -> Self {
        Self::with_layout(BoardLayout::default(), PieceStyle::default())
    }

    /// Creates a session whose board uses the given layout and style.
    #[instrument]
    pub fn with_layout(layout: BoardLayout, style: PieceStyle) -> Self {
        Self {
            board: Board::with_layout(layout, style),
            phase: GamePhase::Setup,
            strategy: Box::new(NoMove),
        }
    }

    /// Replaces the computer player's move strategy.
    pub fn with_strategy(mut self, strategy: impl MoveStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Initializes an empty board and starts the session.
    #[instrument(skip(self, players))]
    pub fn set_up_board(&mut self, players: &mut dyn PlayerRegistry) {
        players.set_player_count(Player::COUNT);
        self.board.clear();
        self.transition(GamePhase::InProgress);
    }

    /// Places the current player's piece on `cell`.
    ///
    /// Returns true if a piece was placed. Advancing the turn and invoking
    /// the computer player are left to the caller.
    #[instrument(skip(self))]
    pub fn place_current_player_piece(
        &mut self,
        cell: Option<Position>,
        current_player: Player,
    ) -> bool {
        match self.try_place(cell, current_player) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Placement rejected");
                false
            }
        }
    }

    /// Places a piece and reports why if it could not.
    ///
    /// # Errors
    ///
    /// `InvalidHolder` when `cell` is `None`, `CellOccupied` when the cell
    /// holds a piece, `GameOver`/`NotStarted` when the session is not in
    /// progress. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn try_place(
        &mut self,
        cell: Option<Position>,
        player: Player,
    ) -> Result<GamePhase, PlaceError> {
        match self.phase {
            GamePhase::InProgress => {}
            GamePhase::Won(_) | GamePhase::Draw => return Err(PlaceError::GameOver),
            GamePhase::Setup | GamePhase::Stopped => return Err(PlaceError::NotStarted),
        }

        let pos = cell.ok_or(PlaceError::InvalidHolder)?;
        self.board.place_piece(pos.row(), pos.col(), player)?;
        info!(%pos, %player, "Piece placed");

        self.refresh_phase();
        Ok(self.phase)
    }

    /// Whether a piece may leave a cell. Never: pieces are not relocated.
    pub fn can_move_from(&self, _piece: Option<&Piece>, _src: Option<&Cell>) -> bool {
        false
    }

    /// Whether a piece may move between cells. Never: pieces are not relocated.
    pub fn can_move_from_to(
        &self,
        _piece: Option<&Piece>,
        _src: Option<&Cell>,
        _dst: Option<&Cell>,
    ) -> bool {
        false
    }

    /// Attempts to move a piece, which always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`PlaceError::IllegalMove`].
    #[instrument(skip(self))]
    pub fn try_relocate(&mut self, from: Position, to: Position) -> Result<(), PlaceError> {
        debug!("Relocation refused");
        Err(PlaceError::IllegalMove)
    }

    /// Ends the session, releasing every placed piece.
    #[instrument(skip(self))]
    pub fn teardown(&mut self) {
        let released = self.board.clear();
        debug!(released, "Pieces released");
        self.transition(GamePhase::Stopped);
    }

    /// Owner of the first completed triple, if any.
    pub fn find_winner(&self) -> Option<Player> {
        rules::find_winner(&self.board)
    }

    /// True iff the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// State string of a fresh game.
    pub fn initial_state_string() -> &'static str {
        INITIAL_STATE
    }

    /// Encodes the live board.
    pub fn state_string(&self) -> String {
        codec::encode(&self.board)
    }

    /// Snapshot of the live board as a validated state string.
    pub fn snapshot(&self) -> StateString {
        StateString::from_board(&self.board)
    }

    /// Loads a state string into the live board.
    ///
    /// The phase is recomputed from the loaded board, so loading also starts
    /// a session that was in `Setup` or `Stopped`.
    ///
    /// # Errors
    ///
    /// Returns [`StateStringError`] for malformed input; the board is unchanged.
    #[instrument(skip(self))]
    pub fn set_state_string(&mut self, s: &str) -> Result<(), StateStringError> {
        codec::decode_into(&mut self.board, s)?;
        self.refresh_phase();
        Ok(())
    }

    /// Lets the computer player move if it is its turn.
    ///
    /// Returns the position played, if any. The turn is advanced only when a
    /// move was made.
    #[instrument(skip(self, players))]
    pub fn update_ai(&mut self, players: &mut dyn PlayerRegistry) -> Option<Position> {
        if self.phase != GamePhase::InProgress {
            return None;
        }

        let player = players.current_player();
        let pos = self.strategy.select_move(&self.board, player)?;
        match self.try_place(Some(pos), player) {
            Ok(_) => {
                players.advance_turn();
                Some(pos)
            }
            Err(e) => {
                warn!(error = %e, %pos, "Strategy picked an illegal move");
                None
            }
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    fn refresh_phase(&mut self) {
        let next = if let Some(winner) = self.find_winner() {
            GamePhase::Won(winner)
        } else if self.is_draw() {
            GamePhase::Draw
        } else {
            GamePhase::InProgress
        };
        self.transition(next);
    }

    fn transition(&mut self, next: GamePhase) {
        if self.phase != next {
            info!(from = %self.phase, to = %next, "Phase changed");
            self.phase = next;
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Holder;
    use crate::context::TurnOrder;

    fn started() -> (TicTacToe, TurnOrder) {
        let mut game = TicTacToe::new();
        let mut turns = TurnOrder::new();
        game.set_up_board(&mut turns);
        (game, turns)
    }

    #[test]
    fn test_new_game_is_in_setup() {
        let game = TicTacToe::new();
        assert_eq!(game.phase(), GamePhase::Setup);
        assert_eq!(game.state_string(), TicTacToe::initial_state_string());
    }

    #[test]
    fn test_place_before_setup_fails() {
        let mut game = TicTacToe::new();
        assert_eq!(game.try_place(Some(Position::Center), Player::X), Err(PlaceError::NotStarted));
        assert!(!game.place_current_player_piece(Some(Position::Center), Player::X));
    }

    #[test]
    fn test_place_positions_piece_on_cell() {
        let (mut game, _) = started();
        assert!(game.place_current_player_piece(Some(Position::BottomRight), Player::X));

        let cell = game.board().cell(Position::BottomRight);
        let piece = cell.occupant().unwrap();
        assert_eq!(piece.owner(), Player::X);
        assert_eq!(piece.position(), cell.display_position());
    }

    #[test]
    fn test_place_missing_cell_fails() {
        let (mut game, _) = started();
        assert_eq!(game.try_place(None, Player::X), Err(PlaceError::InvalidHolder));
        assert!(!game.place_current_player_piece(None, Player::X));
        assert_eq!(game.state_string(), "000000000");
    }

    #[test]
    fn test_place_occupied_cell_fails() {
        let (mut game, _) = started();
        assert!(game.place_current_player_piece(Some(Position::Center), Player::X));
        assert!(!game.place_current_player_piece(Some(Position::Center), Player::O));
        assert_eq!(game.state_string(), "000010000");
    }

    #[test]
    fn test_win_ends_game() {
        let (mut game, _) = started();
        for pos in [Position::TopLeft, Position::TopCenter] {
            assert_eq!(game.try_place(Some(pos), Player::X), Ok(GamePhase::InProgress));
        }
        assert_eq!(
            game.try_place(Some(Position::TopRight), Player::X),
            Ok(GamePhase::Won(Player::X))
        );
        assert_eq!(game.find_winner(), Some(Player::X));
        assert_eq!(game.try_place(Some(Position::Center), Player::O), Err(PlaceError::GameOver));
    }

    #[test]
    fn test_relocation_is_never_allowed() {
        let (mut game, _) = started();
        game.place_current_player_piece(Some(Position::Center), Player::X);
        let cell = game.board().cell(Position::Center);
        let empty = game.board().cell(Position::TopLeft);

        assert!(!game.can_move_from(cell.occupant(), Some(cell)));
        assert!(!game.can_move_from_to(cell.occupant(), Some(cell), Some(empty)));
        assert!(!game.can_move_from(None, None));
        assert!(!game.can_move_from_to(None, None, None));
        assert_eq!(
            game.try_relocate(Position::Center, Position::TopLeft),
            Err(PlaceError::IllegalMove)
        );
    }

    #[test]
    fn test_teardown_releases_everything() {
        let (mut game, mut turns) = started();
        game.place_current_player_piece(Some(Position::Center), Player::X);
        game.place_current_player_piece(Some(Position::TopLeft), Player::O);

        game.teardown();
        assert_eq!(game.phase(), GamePhase::Stopped);
        assert!(game.board().is_empty());

        game.set_up_board(&mut turns);
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.state_string(), "000000000");
    }

    #[test]
    fn test_set_state_string_recomputes_phase() {
        let (mut game, _) = started();
        game.set_state_string("121212212").unwrap();
        assert_eq!(game.phase(), GamePhase::Draw);
        assert!(game.is_draw());

        game.set_state_string("111220000").unwrap();
        assert_eq!(game.phase(), GamePhase::Won(Player::X));

        game.set_state_string("000000000").unwrap();
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_set_state_string_rejects_garbage() {
        let (mut game, _) = started();
        game.set_state_string("100000000").unwrap();
        assert_eq!(game.set_state_string("1"), Err(StateStringError::WrongLength(1)));
        assert_eq!(game.state_string(), "100000000");
    }

    #[test]
    fn test_update_ai_with_no_move_does_nothing() {
        let (mut game, mut turns) = started();
        turns.advance_turn();
        assert_eq!(game.update_ai(&mut turns), None);
        assert_eq!(turns.current_player(), Player::O);
        assert_eq!(game.state_string(), "000000000");
    }

    #[derive(Debug)]
    struct FirstEmpty;

    impl MoveStrategy for FirstEmpty {
        fn select_move(&mut self, board: &Board, _player: Player) -> Option<Position> {
            board.empty_positions().first().copied()
        }
    }

    #[test]
    fn test_update_ai_applies_strategy_move() {
        let mut game = TicTacToe::new().with_strategy(FirstEmpty);
        let mut turns = TurnOrder::starting_with(Player::O);
        game.set_up_board(&mut turns);

        assert_eq!(game.update_ai(&mut turns), Some(Position::TopLeft));
        assert_eq!(game.state_string(), "200000000");
        assert_eq!(turns.current_player(), Player::X);
    }
}
