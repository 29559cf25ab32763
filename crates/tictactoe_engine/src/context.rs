//! Player registry: who is playing and whose turn it is.
//!
//! The registry belongs to the host. The engine only reads the current
//! player and, during setup, declares the player count.

use crate::types::Player;
use tracing::{debug, instrument};

/// Host-owned turn bookkeeping.
pub trait PlayerRegistry: std::fmt::Debug {
    /// Player whose turn it is.
    fn current_player(&self) -> Player;

    /// Player registered at an index, if any.
    fn player_at(&self, index: usize) -> Option<Player>;

    /// Declares how many players take part.
    fn set_player_count(&mut self, count: usize);

    /// Passes the turn to the next player.
    fn advance_turn(&mut self);
}

/// Two-player alternating turn order, X first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder {
    player_count: usize,
    current: usize,
}

impl TurnOrder {
    /// Creates a turn order starting with player X.
    pub fn new() -> Self {
        Self {
            player_count: Player::COUNT,
            current: 0,
        }
    }

    /// Creates a turn order starting with `player`.
    pub fn starting_with(player: Player) -> Self {
        Self {
            player_count: Player::COUNT,
            current: player.index(),
        }
    }

    /// Number of registered players.
    pub fn player_count(&self) -> usize {
        self.player_count
    }
}

impl Default for TurnOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRegistry for TurnOrder {
    fn current_player(&self) -> Player {
        Player::from_index(self.current).unwrap_or(Player::X)
    }

    fn player_at(&self, index: usize) -> Option<Player> {
        if index < self.player_count {
            Player::from_index(index)
        } else {
            None
        }
    }

    #[instrument(skip(self))]
    fn set_player_count(&mut self, count: usize) {
        self.player_count = count.clamp(1, Player::COUNT);
        if self.current >= self.player_count {
            self.current = 0;
        }
        debug!(player_count = self.player_count, "Player count set");
    }

    #[instrument(skip(self))]
    fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.player_count;
        debug!(current = self.current, "Turn advanced");
    }
}
