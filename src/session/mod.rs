//! Game session: placement, undo, and judging orchestration

pub mod move_log;

// Re-exports
pub use move_log::{EmptyLog, Move, MoveLog};

use thiserror::Error;
use tracing::debug;

use crate::board::{Grid, GridError, Pos, Stone};
use crate::rules::{self, Outcome, RuleSet};

/// Why a placement was refused; the grid and log are left untouched
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The coordinate lies outside the board
    #[error("coordinate ({x}, {y}) is off the board")]
    InvalidCoordinate { x: i32, y: i32 },
    /// The target cell already holds a stone
    #[error("cell ({x}, {y}) is already occupied")]
    OccupiedCell { x: i32, y: i32 },
    /// The game has already been decided
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Why an undo was refused
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    /// There are no moves to retract
    #[error("no moves to undo")]
    NothingToUndo,
    /// The game has already been decided
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// One game: a grid and a move log behind a placement/undo API.
///
/// The session owns its grid and log exclusively and mutates them only
/// together: a placement commits both or neither, and an undo reverses
/// exactly the most recent commit. The rule set is fixed at construction;
/// a new game is a new session.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    log: MoveLog,
    game_over: bool,
    rules: RuleSet,
}

impl GameSession {
    /// Start an empty game under the given rule set
    pub fn new(rules: RuleSet) -> Self {
        Self {
            grid: Grid::new(),
            log: MoveLog::new(),
            game_over: false,
            rules,
        }
    }

    /// Place a stone for the current mover at (x, y) and judge the result.
    ///
    /// A `Win` outcome ends the game. A `Foul` outcome does not: the stone
    /// stands and play may continue; the caller decides what to surface.
    pub fn place(&mut self, x: i32, y: i32) -> Result<Outcome, PlaceError> {
        let pos = Pos::try_new(x, y).ok_or(PlaceError::InvalidCoordinate { x, y })?;
        if self.game_over {
            return Err(PlaceError::GameAlreadyOver);
        }

        let stone = self.log.current_stone();
        self.grid.set(pos, stone).map_err(|err| match err {
            GridError::Occupied { .. } => PlaceError::OccupiedCell { x, y },
            GridError::OutOfRange { .. } => PlaceError::InvalidCoordinate { x, y },
        })?;
        let mv = self.log.append(pos);

        let outcome = rules::judge(&self.grid, &self.log, self.rules);
        match outcome {
            Outcome::Win(winner) => {
                self.game_over = true;
                debug!(%winner, ordinal = mv.ordinal, "game decided");
            }
            _ => debug!(?mv, ?outcome, "stone placed"),
        }
        Ok(outcome)
    }

    /// Retract the most recent move, returning it so a renderer can erase
    /// the stone. Refused once the game is decided.
    pub fn undo(&mut self) -> Result<Move, UndoError> {
        if self.log.is_empty() {
            return Err(UndoError::NothingToUndo);
        }
        if self.game_over {
            return Err(UndoError::GameAlreadyOver);
        }

        let mv = self.log.remove_last().map_err(|_| UndoError::NothingToUndo)?;
        self.grid.clear(mv.pos);
        debug!(?mv, "move retracted");
        Ok(mv)
    }

    /// Color of the next move
    #[inline]
    pub fn current_stone(&self) -> Stone {
        self.log.current_stone()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    /// Move at play-order `index` (0-based), for replay
    pub fn move_at(&self, index: usize) -> Option<Move> {
        self.log.get(index)
    }

    /// Most recent move, if any
    pub fn last_move(&self) -> Option<Move> {
        self.log.last().ok()
    }

    /// All moves in play order
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.log.iter()
    }

    /// Cell content at (x, y)
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Option<Stone>, GridError> {
        self.grid.get(x, y)
    }

    /// Total stones on the board
    pub fn stone_count(&self) -> usize {
        self.grid.stone_count()
    }
}
