//! Game rules for tic-tac-toe.
//!
//! Pure functions over a read-only board. Rules are kept apart from
//! board storage so callers can evaluate any board, including one
//! loaded from a state string.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, find_winner};
