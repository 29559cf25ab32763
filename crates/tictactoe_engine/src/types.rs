//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
///
/// The player's identity is its index: X is player 0, O is player 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player X (index 0, goes first).
    X,
    /// Player O (index 1).
    O,
}

impl Player {
    /// Number of players in a game.
    pub const COUNT: usize = 2;

    /// Returns the player's index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Looks up a player by index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::X),
            1 => Some(Player::O),
            _ => None,
        }
    }

    /// Digit used for this player in a state string.
    pub fn state_digit(self) -> char {
        match self {
            Player::X => '1',
            Player::O => '2',
        }
    }

    /// Single-letter mark used for text rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Screen coordinates of a cell or piece, in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct DisplayPosition {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// Visual tags bound to pieces and cells.
///
/// Purely cosmetic: the rules never read these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceStyle {
    /// Tag for player X's pieces.
    pub x_tag: String,
    /// Tag for player O's pieces.
    pub o_tag: String,
    /// Tag for the empty cell background.
    pub cell_tag: String,
}

impl PieceStyle {
    /// Returns the tag for a player's pieces.
    pub fn tag_for(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_tag,
            Player::O => &self.o_tag,
        }
    }
}

impl Default for PieceStyle {
    fn default() -> Self {
        Self {
            x_tag: "x.png".to_string(),
            o_tag: "o.png".to_string(),
            cell_tag: "square.png".to_string(),
        }
    }
}

/// A placed marker.
///
/// Pieces are created by placement and never mutated or moved afterwards;
/// the only way one goes away is a full board clear.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    owner: Player,
    visual_tag: String,
    position: DisplayPosition,
}

impl Piece {
    pub(crate) fn new(
        owner: Player,
        visual_tag: impl Into<String>,
        position: DisplayPosition,
    ) -> Self {
        Self {
            owner,
            visual_tag: visual_tag.into(),
            position,
        }
    }

    /// Returns the owning player.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// Returns the visual tag bound at construction.
    pub fn visual_tag(&self) -> &str {
        &self.visual_tag
    }

    /// Returns where the host should draw this piece.
    pub fn position(&self) -> DisplayPosition {
        self.position
    }
}

/// Current phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board not yet initialized.
    Setup,
    /// Placements are accepted.
    InProgress,
    /// A player completed a triple.
    Won(Player),
    /// Board is full with no triple.
    Draw,
    /// Session torn down.
    Stopped,
}

impl GamePhase {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Draw)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GamePhase::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Setup => write!(f, "Setting up"),
            GamePhase::InProgress => write!(f, "In progress"),
            GamePhase::Won(player) => write!(f, "Player {} wins", player),
            GamePhase::Draw => write!(f, "Draw"),
            GamePhase::Stopped => write!(f, "Stopped"),
        }
    }
}
