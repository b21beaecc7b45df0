//! Fixed-size cell store with bounds-checked access

use thiserror::Error;

use super::{Pos, Stone, TOTAL_CELLS};

/// Errors from direct grid access
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the board
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfRange { x: i32, y: i32 },
    /// The cell already holds a stone
    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },
}

/// 15x15 cell store; `None` is an empty cell.
///
/// A cell goes empty -> occupied only through [`Grid::set`] and back only
/// through [`Grid::clear`]; an occupied cell is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Stone>; TOTAL_CELLS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Bounds-checked read
    pub fn get(&self, x: i32, y: i32) -> Result<Option<Stone>, GridError> {
        let pos = Pos::try_new(x, y).ok_or(GridError::OutOfRange { x, y })?;
        Ok(self.at(pos))
    }

    /// Read at a position already known to be on the board
    #[inline]
    pub fn at(&self, pos: Pos) -> Option<Stone> {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.at(pos).is_none()
    }

    /// Place a stone on an empty cell
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), GridError> {
        let cell = &mut self.cells[pos.to_index()];
        if cell.is_some() {
            return Err(GridError::Occupied {
                x: pos.x as i32,
                y: pos.y as i32,
            });
        }
        *cell = Some(stone);
        Ok(())
    }

    /// Clear a cell back to empty
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = None;
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
