/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine, flag, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// The 8 compass directions as `(row, col)` offsets.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells 8-connected to `center` on a `(rows, cols)` grid, clipped at the edges.
///
/// The iterator owns its inputs, so the grid can be mutated while walking it.
pub fn neighbors(center: Coord2, (rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| {
            let next_row = row.checked_add_signed(d_row).filter(|&next| next < rows)?;
            let next_col = col.checked_add_signed(d_col).filter(|&next| next < cols)?;
            Some((next_row, next_col))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        neighbors(center, bounds).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let found = collect((1, 1), (3, 3));

        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn corner_and_edge_cells_are_clipped() {
        assert_eq!(collect((0, 0), (4, 4)), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(collect((3, 3), (4, 4)), vec![(2, 2), (2, 3), (3, 2)]);
        assert_eq!(collect((0, 2), (4, 4)).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(collect((0, 0), (1, 1)).is_empty());
    }

    #[test]
    fn bounds_are_rows_then_cols() {
        assert_eq!(collect((1, 4), (2, 5)), vec![(0, 3), (0, 4), (1, 3)]);
    }

    #[test]
    fn largest_grid_does_not_wrap_around() {
        let max = Coord::MAX;

        assert_eq!(collect((max - 1, max - 1), (max, max)), vec![
            (max - 2, max - 2),
            (max - 2, max - 1),
            (max - 1, max - 2),
        ]);
    }

    #[test]
    fn mult_covers_largest_board() {
        assert_eq!(mult(10, 10), 100);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
