use serde::{Deserialize, Serialize};

/// What a cell holds, fixed when the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Mine,
    /// Safe cell touching at least one mine, with the number of adjacent mines.
    Number(u8),
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// Per-position state of the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub revealed: bool,
    pub flagged: bool,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self.kind, CellKind::Empty)
    }

    /// Number of mines among the neighbors, 0 for anything that is not a number cell.
    pub const fn adjacent_mine_count(self) -> u8 {
        match self.kind {
            CellKind::Number(count) => count,
            CellKind::Empty | CellKind::Mine => 0,
        }
    }
}
