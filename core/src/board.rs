use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size grid of cells, stored row-major with shape `(height, width)`.
///
/// Cell kinds are assigned once at construction, only the `revealed`/`flagged` state changes
/// afterwards. Deserializing rebuilds kinds and the mine count from the stored mine positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

/// Serialized shape of a `Board`, trusted only for mine positions and player marks.
#[derive(Deserialize)]
struct BoardRecord {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl TryFrom<BoardRecord> for Board {
    type Error = GameError;

    fn try_from(record: BoardRecord) -> Result<Self> {
        let (rows, cols) = record.cells.dim();
        let (Ok(height), Ok(width)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(GameError::InvalidBoardShape);
        };

        let mine_coords: Vec<Coord2> = record
            .cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect();
        let mut board = Self::from_mine_coords(width, height, &mine_coords)?;
        if board.mine_count != record.mine_count {
            return Err(GameError::MineCountMismatch {
                declared: record.mine_count,
                found: board.mine_count,
            });
        }

        for (cell, stored) in board.cells.iter_mut().zip(record.cells.iter()) {
            cell.revealed = stored.revealed;
            cell.flagged = stored.flagged;
        }
        Ok(board)
    }
}

impl Board {
    /// Generates a board with mines placed from `seed`.
    pub fn generate(config: &GameConfig, seed: u64) -> Result<Self> {
        RandomBoardGenerator::new(seed).generate(config)
    }

    /// Generates a board from a freshly drawn seed.
    pub fn generate_random(config: &GameConfig) -> Result<Self> {
        RandomBoardGenerator::from_entropy().generate(config)
    }

    /// Builds a board with mines at exactly `mine_coords`, duplicates are counted once.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }

        if mine_coords
            .iter()
            .any(|&(row, col)| row >= height || col >= width)
        {
            return Err(GameError::InvalidCoords);
        }

        let board = Self::with_mines(width, height, mine_coords);
        if board.mine_count == 0 {
            return Err(GameError::InvalidMineCount {
                requested: 0,
                capacity: board.total_cells(),
            });
        }

        Ok(board)
    }

    /// Places the mines and numbers their neighbors, `mine_coords` must be in bounds.
    pub(crate) fn with_mines(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Self {
        let mut cells: Array2<Cell> = Array2::default((usize::from(height), usize::from(width)));

        let mut placed = Vec::with_capacity(mine_coords.len());
        for &coords in mine_coords {
            let cell = &mut cells[coords.to_nd_index()];
            if !cell.is_mine() {
                cell.kind = CellKind::Mine;
                placed.push(coords);
            }
        }

        for &coords in &placed {
            for pos in neighbors(coords, (height, width)) {
                let neighbor = &mut cells[pos.to_nd_index()];
                neighbor.kind = match neighbor.kind {
                    CellKind::Mine => CellKind::Mine,
                    CellKind::Empty => CellKind::Number(1),
                    CellKind::Number(count) => CellKind::Number(count + 1),
                };
            }
        }

        Self {
            cells,
            mine_count: placed.len() as CellCount,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.height() && col < self.width()
    }

    /// `(rows, cols)`, the same order as cell coordinates.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn cell(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// Every cell with its coordinates, row by row.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn count_revealed(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.revealed).count() as CellCount
    }

    pub fn count_flagged(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.flagged).count() as CellCount
    }

    pub(crate) fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
