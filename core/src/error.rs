use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board dimensions {width}x{height}, both sides must be at least 1")]
    InvalidDimensions { width: Coord, height: Coord },
    #[error("Invalid mine count {requested}, must be between 1 and {capacity}")]
    InvalidMineCount {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not fit the coordinate range")]
    InvalidBoardShape,
    #[error("Board declares {declared} mines but holds {found}")]
    MineCountMismatch {
        declared: CellCount,
        found: CellCount,
    },
    #[error("{placed} flags placed but the budget is {budget}")]
    TooManyFlags {
        placed: CellCount,
        budget: CellCount,
    },
    #[error("Cell at {0:?} is both flagged and revealed")]
    FlaggedAndRevealed(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;
