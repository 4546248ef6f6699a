use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use reveal::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod render;
mod reveal;
mod tile;
mod types;

/// Board settings chosen when a game starts.
///
/// The flag budget is independent from the mine count, the player may be given fewer (or more)
/// flags than there are mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub flags: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(
        width: Coord,
        height: Coord,
        mines: CellCount,
        flags: CellCount,
    ) -> Self {
        Self {
            width,
            height,
            mines,
            flags,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount, flags: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines, flags);
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants `new` enforces, for values that came from elsewhere (e.g. deserialized).
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let capacity = self.total_cells();
        if self.mines == 0 || self.mines > capacity {
            return Err(GameError::InvalidMineCount {
                requested: self.mines,
                capacity,
            });
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 10, 10)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Placed,
    Removed,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
            Self::Removed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
