//! Square game board.

use crate::types::{Coord, Player, TileState};
use serde::{Deserialize, Serialize};

/// N×N board of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<TileState>,
}

impl Board {
    /// Creates an all-blank board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![TileState::Blank; size * size],
        }
    }

    /// Rebuilds a board from row-major cells.
    ///
    /// Returns `None` if the cell count is not `size²`.
    pub fn from_cells(size: usize, cells: Vec<TileState>) -> Option<Self> {
        (size.checked_mul(size) == Some(cells.len())).then_some(Self { size, cells })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the tile at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<TileState> {
        if !coord.in_bounds(self.size) {
            return None;
        }
        self.cells.get(coord.to_index(self.size)).copied()
    }

    /// Sets the tile at the given coordinate.
    ///
    /// Out-of-bounds writes are ignored.
    pub(crate) fn set(&mut self, coord: Coord, tile: TileState) {
        if coord.in_bounds(self.size) {
            let index = coord.to_index(self.size);
            self.cells[index] = tile;
        }
    }

    /// Checks if the tile at the coordinate is blank.
    pub fn is_blank(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(TileState::Blank))
    }

    /// Returns all tiles in row-major order.
    pub fn cells(&self) -> &[TileState] {
        &self.cells
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[TileState]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of claimed tiles.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|t| t.owner().is_some()).count()
    }

    /// Number of tiles claimed by the given player.
    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|t| **t == mark).count()
    }

    /// Resets every tile to blank.
    pub(crate) fn clear(&mut self) {
        self.cells.fill(TileState::Blank);
    }
}
