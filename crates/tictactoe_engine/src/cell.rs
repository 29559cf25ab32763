//! Board cells and the grid layout that places them on screen.

use crate::position::{GRID_SIZE, Position};
use crate::types::{DisplayPosition, Piece, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something that sits at a board position and holds at most one piece.
pub trait Holder {
    /// Grid position of the holder.
    fn position(&self) -> Position;

    /// Where the host draws the holder.
    fn display_position(&self) -> DisplayPosition;

    /// Tag of the sprite drawn under the piece.
    fn visual_tag(&self) -> &str;

    /// The piece currently held, if any.
    fn occupant(&self) -> Option<&Piece>;

    /// Returns true if no piece is held.
    fn is_empty(&self) -> bool {
        self.occupant().is_none()
    }

    /// Owner of the held piece, if any.
    fn owner(&self) -> Option<Player> {
        self.occupant().map(Piece::owner)
    }
}

/// One of the nine board slots.
///
/// The cell owns its piece outright; dropping or clearing the cell drops the piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    position: Position,
    display: DisplayPosition,
    visual_tag: String,
    occupant: Option<Piece>,
}

impl Cell {
    pub(crate) fn new(
        position: Position,
        display: DisplayPosition,
        visual_tag: impl Into<String>,
    ) -> Self {
        Self {
            position,
            display,
            visual_tag: visual_tag.into(),
            occupant: None,
        }
    }

    /// Row of this cell (0-2).
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of this cell (0-2).
    pub fn col(&self) -> usize {
        self.position.col()
    }

    pub(crate) fn set_occupant(&mut self, piece: Option<Piece>) {
        self.occupant = piece;
    }

    pub(crate) fn take_occupant(&mut self) -> Option<Piece> {
        self.occupant.take()
    }
}

impl Holder for Cell {
    fn position(&self) -> Position {
        self.position
    }

    fn display_position(&self) -> DisplayPosition {
        self.display
    }

    fn visual_tag(&self) -> &str {
        &self.visual_tag
    }

    fn occupant(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }
}

/// Screen geometry of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Top-left corner of the top-left cell.
    pub origin: DisplayPosition,
    /// Width and height of one cell.
    pub square_size: f32,
}

impl BoardLayout {
    /// Creates a layout from origin and cell size.
    pub fn new(origin: DisplayPosition, square_size: f32) -> Self {
        Self {
            origin,
            square_size,
        }
    }

    /// Display position of a cell.
    pub fn cell_origin(&self, position: Position) -> DisplayPosition {
        DisplayPosition::new(
            self.origin.x + position.col() as f32 * self.square_size,
            self.origin.y + position.row() as f32 * self.square_size,
        )
    }

    /// Maps a point to the cell containing it.
    ///
    /// Points outside the grid resolve to `None`.
    #[instrument]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        if self.square_size <= 0.0 {
            return None;
        }
        let dx = (x - self.origin.x) / self.square_size;
        let dy = (y - self.origin.y) / self.square_size;
        if !(0.0..GRID_SIZE as f32).contains(&dx) || !(0.0..GRID_SIZE as f32).contains(&dy) {
            return None;
        }
        Position::from_row_col(dy as usize, dx as usize)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(DisplayPosition::new(150.0, 150.0), 80.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_positions() {
        let layout = BoardLayout::default();
        assert_eq!(layout.cell_origin(Position::TopLeft), DisplayPosition::new(150.0, 150.0));
        assert_eq!(layout.cell_origin(Position::MiddleRight), DisplayPosition::new(310.0, 230.0));
        assert_eq!(layout.cell_origin(Position::BottomLeft), DisplayPosition::new(150.0, 310.0));
    }

    #[test]
    fn test_cell_at_maps_points() {
        let layout = BoardLayout::default();
        assert_eq!(layout.cell_at(151.0, 151.0), Some(Position::TopLeft));
        assert_eq!(layout.cell_at(235.0, 160.0), Some(Position::TopCenter));
        assert_eq!(layout.cell_at(389.0, 389.0), Some(Position::BottomRight));
    }

    #[test]
    fn test_cell_at_outside_grid() {
        let layout = BoardLayout::default();
        assert_eq!(layout.cell_at(149.0, 200.0), None);
        assert_eq!(layout.cell_at(200.0, 390.0), None);
    }

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new(Position::Center, DisplayPosition::default(), "square.png");
        assert!(cell.is_empty());
        assert_eq!(cell.visual_tag(), "square.png");
        assert_eq!(cell.owner(), None);
        assert_eq!((cell.row(), cell.col()), (1, 1));
    }
}
