use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Owns the board for one game and applies player commands to it.
///
/// Commands that the rules forbid (acting on a revealed or flagged cell, exceeding the flag
/// budget, playing after the game ended) are not errors, they report `NoChange`. Only
/// out-of-range coordinates are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EngineRecord")]
pub struct GameEngine {
    board: Board,
    flag_budget: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

/// Serialized shape of a `GameEngine`, counters and state are always recomputed from the board.
#[derive(Deserialize)]
struct EngineRecord {
    board: Board,
    flag_budget: CellCount,
}

impl TryFrom<EngineRecord> for GameEngine {
    type Error = GameError;

    fn try_from(record: EngineRecord) -> Result<Self> {
        Self::from_board(record.board, record.flag_budget)
    }
}

impl GameEngine {
    /// Starts a game on a board generated from a random seed.
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = Board::generate_random(&config)?;
        Self::from_board(board, config.flags)
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let board = Board::generate(&config, seed)?;
        Self::from_board(board, config.flags)
    }

    /// Takes over a board that may already be in play.
    ///
    /// A revealed mine makes the game lost, every safe cell revealed makes it won. Boards with
    /// more flags than `flag_budget`, or with a cell both flagged and revealed, are rejected.
    pub fn from_board(board: Board, flag_budget: CellCount) -> Result<Self> {
        if let Some((coords, _)) = board
            .indexed_iter()
            .find(|(_, cell)| cell.flagged && cell.revealed)
        {
            return Err(GameError::FlaggedAndRevealed(coords));
        }

        let flagged_count = board.count_flagged();
        if flagged_count > flag_budget {
            return Err(GameError::TooManyFlags {
                placed: flagged_count,
                budget: flag_budget,
            });
        }

        let triggered_mine = board
            .indexed_iter()
            .find(|(_, cell)| cell.revealed && cell.is_mine())
            .map(|(coords, _)| coords);
        let revealed_count = board.count_revealed();

        let mut engine = Self {
            board,
            flag_budget,
            revealed_count,
            flagged_count,
            state: Default::default(),
            triggered_mine,
        };
        if engine.triggered_mine.is_some() {
            engine.end_game(false);
        } else if engine.has_won() {
            engine.end_game(true);
        }
        Ok(engine)
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(
            self.board.width(),
            self.board.height(),
            self.board.mine_count(),
            self.flag_budget,
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, EngineState::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.state, EngineState::Lost)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn flag_budget(&self) -> CellCount {
        self.flag_budget
    }

    /// Flags the player can still place, never negative while the budget guard holds.
    pub fn remaining_flags(&self) -> isize {
        (self.flag_budget as isize) - (self.flagged_count as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            log::trace!("Ignoring reveal at {:?}, game is {:?}", coords, self.state);
            return Ok(NoChange);
        }

        let cell = self.board[coords];
        if cell.flagged || cell.revealed {
            log::trace!("Ignoring reveal at {:?}: {:?}", coords, cell);
            return Ok(NoChange);
        }

        match cell.kind {
            CellKind::Mine => {
                self.board[coords].revealed = true;
                self.revealed_count += 1;
                self.triggered_mine = Some(coords);
                self.end_game(false);
                return Ok(HitMine);
            }
            CellKind::Empty | CellKind::Number(_) => {
                let opened = flood_reveal(&mut self.board, coords);
                self.revealed_count += opened;
                log::debug!("Reveal at {:?} opened {} cells", coords, opened);
            }
        }
        debug_assert_eq!(self.revealed_count, self.board.count_revealed());

        if self.has_won() {
            self.end_game(true);
            Ok(Won)
        } else {
            Ok(Revealed)
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() {
            log::trace!("Ignoring flag at {:?}, game is {:?}", coords, self.state);
            return Ok(NoChange);
        }

        let cell = &mut self.board[coords];
        Ok(if cell.revealed {
            NoChange
        } else if cell.flagged {
            cell.flagged = false;
            self.flagged_count -= 1;
            log::debug!("Flag removed at {:?}", coords);
            Removed
        } else if self.flagged_count >= self.flag_budget {
            log::trace!("No flags left for {:?}", coords);
            NoChange
        } else {
            cell.flagged = true;
            self.flagged_count += 1;
            log::debug!("Flag placed at {:?}", coords);
            Placed
        })
    }

    /// At least one cell revealed, every safe cell revealed, and no mine among them.
    fn has_won(&self) -> bool {
        !self.is_lost()
            && self.revealed_count != 0
            && self.revealed_count == self.board.safe_cell_count()
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("Game ended: {:?}", self.state);
    }
}
