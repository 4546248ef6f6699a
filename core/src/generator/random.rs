use rand::prelude::*;

use super::*;

/// Uniform mine placement by rejection sampling: draw a cell index and draw again whenever it
/// already holds a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        config.validate()?;

        let total_cells = config.total_cells();
        if config.mines == total_cells {
            log::warn!(
                "Every one of the {} cells is a mine, the game cannot be won",
                total_cells
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut drawn = vec![false; total_cells.into()];
        let mut mine_coords = Vec::with_capacity(config.mines.into());
        let mut retries = 0usize;

        while mine_coords.len() < usize::from(config.mines) {
            let index: CellCount = rng.random_range(0..total_cells);
            let slot = &mut drawn[usize::from(index)];
            if *slot {
                retries += 1;
                continue;
            }
            *slot = true;

            let coords = (
                (index / CellCount::from(config.width)) as Coord,
                (index % CellCount::from(config.width)) as Coord,
            );
            log::trace!("Mine placed at {:?}", coords);
            mine_coords.push(coords);
        }

        log::debug!(
            "Generated {}x{} board with {} mines from seed {} ({} retries)",
            config.width,
            config.height,
            config.mines,
            self.seed,
            retries
        );
        Ok(Board::with_mines(config.width, config.height, &mine_coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: Coord, height: Coord, mines: CellCount) -> GameConfig {
        GameConfig::new(width, height, mines, mines).unwrap()
    }

    fn recount(board: &Board, coords: Coord2) -> u8 {
        board
            .iter_neighbors(coords)
            .filter(|&pos| board[pos].is_mine())
            .count() as u8
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for (width, height, mines) in [(10, 10, 10), (4, 4, 1), (30, 16, 99), (1, 5, 4), (3, 3, 9)] {
            for seed in 0..50 {
                let board = Board::generate(&config(width, height, mines), seed).unwrap();
                let found = board.indexed_iter().filter(|(_, cell)| cell.is_mine()).count();

                assert_eq!(found, usize::from(mines), "{width}x{height} seed {seed}");
                assert_eq!(board.mine_count(), mines);
                assert_eq!(board.size(), (height, width));
            }
        }
    }

    #[test]
    fn numbers_match_adjacent_mines() {
        for seed in 0..50 {
            let board = Board::generate(&config(9, 7, 15), seed).unwrap();

            for (coords, cell) in board.indexed_iter() {
                match cell.kind {
                    CellKind::Mine => {}
                    CellKind::Number(count) => assert_eq!(count, recount(&board, coords)),
                    CellKind::Empty => assert_eq!(recount(&board, coords), 0),
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_board() {
        let config = config(16, 16, 40);

        assert_eq!(Board::generate(&config, 7), Board::generate(&config, 7));
        assert_ne!(Board::generate(&config, 7), Board::generate(&config, 8));
    }

    #[test]
    fn placement_is_roughly_uniform() {
        let config = config(3, 3, 1);
        let mut hits = [0u32; 9];

        for seed in 0..2000 {
            let board = Board::generate(&config, seed).unwrap();
            for ((row, col), cell) in board.indexed_iter() {
                if cell.is_mine() {
                    hits[usize::from(row) * 3 + usize::from(col)] += 1;
                }
            }
        }

        // expectation is ~222 per cell
        for (index, &count) in hits.iter().enumerate() {
            assert!((150..300).contains(&count), "cell {index} hit {count} times");
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let generator = RandomBoardGenerator::new(1);

        assert!(matches!(
            generator.generate(&GameConfig::new_unchecked(4, 4, 17, 1)),
            Err(GameError::InvalidMineCount {
                requested: 17,
                capacity: 16
            })
        ));
        assert!(matches!(
            generator.generate(&GameConfig::new_unchecked(4, 4, 0, 1)),
            Err(GameError::InvalidMineCount { requested: 0, .. })
        ));
        assert!(matches!(
            generator.generate(&GameConfig::new_unchecked(0, 4, 1, 1)),
            Err(GameError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn entropy_generator_still_respects_config() {
        let board = Board::generate_random(&config(8, 8, 10)).unwrap();

        assert_eq!(board.mine_count(), 10);
    }
}
