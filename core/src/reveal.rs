use std::collections::VecDeque;

use crate::*;

/// Reveals `coords` and, when it is an empty cell, cascades through the connected empty region.
///
/// Number cells on the edge of the region are revealed but do not propagate. Flagged cells are
/// never crossed and mines are never revealed here, losing moves are the caller's business. The
/// `revealed` flag doubles as the visited marker, so every cell enters the work-list at most once.
///
/// Returns how many cells changed from hidden to revealed, 0 when the target was out of bounds,
/// already revealed, flagged or a mine.
pub fn flood_reveal(board: &mut Board, coords: Coord2) -> CellCount {
    let Some(target) = board.get(coords) else {
        return 0;
    };
    if target.revealed || target.flagged || target.is_mine() {
        log::trace!("Skipping reveal at {:?}: {:?}", coords, target);
        return 0;
    }

    board[coords].revealed = true;
    let mut revealed: CellCount = 1;
    if !target.is_empty() {
        return revealed;
    }

    let mut to_visit = VecDeque::from([coords]);
    log::trace!("Starting flood-fill from {:?}", coords);

    while let Some(visit_coords) = to_visit.pop_front() {
        for pos in board.iter_neighbors(visit_coords) {
            let neighbor = &mut board[pos];
            if neighbor.revealed || neighbor.flagged {
                continue;
            }

            match neighbor.kind {
                CellKind::Mine => continue,
                CellKind::Number(_) => {
                    neighbor.revealed = true;
                    revealed += 1;
                }
                CellKind::Empty => {
                    neighbor.revealed = true;
                    revealed += 1;
                    to_visit.push_back(pos);
                }
            }
        }
    }

    log::trace!("Flood-fill from {:?} revealed {} cells", coords, revealed);
    revealed
}
