//! Tic-tac-toe rule engine.
//!
//! Owns the board, enforces placement legality, detects wins and draws,
//! and converts boards to and from 9-character state strings.
//!
//! # Architecture
//!
//! - **Board**: nine [`Cell`]s, each owning at most one [`Piece`]
//! - **Rules**: pure win/draw evaluation over a read-only board
//! - **Codec**: `"000000000"`-style state strings
//! - **Game**: [`TicTacToe`], the host-facing session API
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GamePhase, PlayerRegistry, Position, TicTacToe, TurnOrder};
//!
//! let mut game = TicTacToe::new();
//! let mut turns = TurnOrder::new();
//! game.set_up_board(&mut turns);
//!
//! use Position::*;
//! for pos in [TopLeft, Center, TopCenter, BottomLeft, TopRight] {
//!     assert!(game.place_current_player_piece(Some(pos), turns.current_player()));
//!     turns.advance_turn();
//! }
//! assert_eq!(game.phase(), GamePhase::Won(tictactoe_engine::Player::X));
//! assert_eq!(game.state_string(), "111020200");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod codec;
mod context;
mod error;
mod game;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use board::Board;
pub use cell::{BoardLayout, Cell, Holder};
pub use codec::{INITIAL_STATE, StateString, decode, decode_into, encode};
pub use context::{PlayerRegistry, TurnOrder};
pub use error::{PlaceError, StateStringError};
pub use game::TicTacToe;
pub use position::{CELL_COUNT, GRID_SIZE, Position};
pub use rules::{LINES, find_winner, is_draw};
pub use strategy::{MoveStrategy, NoMove};
pub use types::{DisplayPosition, GamePhase, Piece, PieceStyle, Player};
