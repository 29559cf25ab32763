//! The 3x3 board and its cells.

use crate::cell::{BoardLayout, Cell, Holder};
use crate::error::PlaceError;
use crate::position::{CELL_COUNT, Position};
use crate::types::{Piece, PieceStyle, Player};
use tracing::{debug, instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// Each cell holds zero or one piece. The only mutations are placing into
/// an empty cell and clearing every cell; the codec may also overwrite
/// cells directly when loading a state string.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
    layout: BoardLayout,
    style: PieceStyle,
}

impl Board {
    /// Creates a new empty board with the default layout and style.
    pub fn new() -> Self {
        Self::with_layout(BoardLayout::default(), PieceStyle::default())
    }

    /// Creates a new empty board with the given layout and style.
    #[instrument]
    pub fn with_layout(layout: BoardLayout, style: PieceStyle) -> Self {
        let cells = Position::ALL
            .map(|pos| Cell::new(pos, layout.cell_origin(pos), style.cell_tag.as_str()));
        Self {
            cells,
            layout,
            style,
        }
    }

    /// Places a new piece for `player` at (row, col).
    ///
    /// # Errors
    ///
    /// `OutOfRange` if row or col is outside 0..=2, `CellOccupied` if the
    /// cell already holds a piece. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place_piece(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<&Piece, PlaceError> {
        let pos = Position::from_row_col(row, col).ok_or(PlaceError::OutOfRange { row, col })?;
        let piece = self.make_piece(pos, player);
        let cell = &mut self.cells[pos.to_index()];
        if !cell.is_empty() {
            debug!(%pos, "Cell already occupied");
            return Err(PlaceError::CellOccupied { row, col });
        }
        cell.set_occupant(Some(piece));
        trace!(%pos, %player, "Piece placed");
        cell.occupant().ok_or(PlaceError::InvalidHolder)
    }

    /// Returns the owner of the piece at (row, col), if any.
    ///
    /// Out-of-range coordinates yield `None`.
    pub fn owner_at(&self, row: usize, col: usize) -> Option<Player> {
        Position::from_row_col(row, col).and_then(|pos| self.owner_of(pos))
    }

    /// Returns the owner of the piece at a position, if any.
    pub fn owner_of(&self, pos: Position) -> Option<Player> {
        self.cells[pos.to_index()].owner()
    }

    /// Returns the owner at a row-major index (0-8), if any.
    pub fn owner_at_index(&self, index: usize) -> Option<Player> {
        self.cells.get(index).and_then(Holder::owner)
    }

    /// Removes every piece, returning the board to its empty state.
    ///
    /// Idempotent. Returns how many pieces were released.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> usize {
        let released = self
            .cells
            .iter_mut()
            .filter_map(Cell::take_occupant)
            .count();
        debug!(released, "Board cleared");
        released
    }

    /// Returns true iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns true iff no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Holder::is_empty)
    }

    /// Returns the cell at a position.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Positions of all empty cells, row-major.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(Holder::position)
            .collect()
    }

    /// Returns the board's screen layout.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Returns the visual style applied to new pieces.
    pub fn style(&self) -> &PieceStyle {
        &self.style
    }

    /// Overwrites a cell without an occupancy check.
    pub(crate) fn overwrite(&mut self, pos: Position, owner: Option<Player>) {
        let piece = owner.map(|player| self.make_piece(pos, player));
        self.cells[pos.to_index()].set_occupant(piece);
    }

    fn make_piece(&self, pos: Position, player: Player) -> Piece {
        Piece::new(
            player,
            self.style.tag_for(player),
            self.cells[pos.to_index()].display_position(),
        )
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their index (0-8).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (index, cell) in self.cells.iter().enumerate() {
            let symbol = match cell.owner() {
                Some(player) => player.symbol(),
                None => char::from_digit(index as u32, 10).unwrap_or('?'),
            };
            result.push(symbol);
            match index % 3 {
                2 if index < CELL_COUNT - 1 => result.push_str("\n-+-+-\n"),
                2 => {}
                _ => result.push('|'),
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
