use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a frontend should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderValue {
    NotRevealed,
    Flagged,
    RevealedMine,
    RevealedNumber(u8),
    RevealedEmpty,
}

impl RenderValue {
    /// Single glyph for text frontends
    pub fn symbol(self) -> char {
        use RenderValue::*;
        match self {
            NotRevealed => '#',
            Flagged => 'F',
            RevealedMine => '*',
            RevealedNumber(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
            RevealedEmpty => '.',
        }
    }
}

/// A flag takes precedence over the hidden state.
pub fn render_value(cell: Cell) -> RenderValue {
    if cell.flagged {
        return RenderValue::Flagged;
    }
    if !cell.revealed {
        return RenderValue::NotRevealed;
    }
    match cell.kind {
        CellKind::Mine => RenderValue::RevealedMine,
        CellKind::Number(count) => RenderValue::RevealedNumber(count),
        CellKind::Empty => RenderValue::RevealedEmpty,
    }
}

/// Everything a frontend needs to redraw after a command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: Coord,
    pub height: Coord,
    pub cells: Array2<RenderValue>,
    pub remaining_flags: isize,
    pub won: bool,
    pub lost: bool,
    pub triggered_mine: Option<Coord2>,
    /// Flags sitting on mines, only filled in once the game is over.
    pub correct_flags: Vec<Coord2>,
}

impl Snapshot {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let board = engine.board();
        let cells = board.cells().map(|&cell| render_value(cell));

        let correct_flags = if engine.is_finished() {
            board
                .indexed_iter()
                .filter(|(_, cell)| cell.flagged && cell.is_mine())
                .map(|(coords, _)| coords)
                .collect()
        } else {
            Vec::new()
        };

        Self {
            width: board.width(),
            height: board.height(),
            cells,
            remaining_flags: engine.remaining_flags(),
            won: engine.is_won(),
            lost: engine.is_lost(),
            triggered_mine: engine.triggered_mine(),
            correct_flags,
        }
    }

    pub fn value_at(&self, coords: Coord2) -> RenderValue {
        self.cells[coords.to_nd_index()]
    }
}
