//! Dead-end removal
//!
//! A corridor tile with three or more solid neighbours is a stub. Filling
//! one can expose the next, so passes repeat until nothing changes. Only
//! `Corridor` is eligible: doors and room floor are never filled.

use log::{debug, warn};

use super::cell::TileKind;
use super::grid::TileGrid;

/// Result of a prune run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Full scans performed, including the final no-change scan
    pub passes: u32,
    /// Corridor tiles turned back into wall
    pub removed: usize,
    /// The last scan changed nothing
    pub converged: bool,
}

/// Fill dead ends until a fixpoint or `max_passes` scans
pub fn prune_dead_ends(grid: &mut TileGrid, max_passes: u32) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();

    while outcome.passes < max_passes {
        outcome.passes += 1;
        let removed = prune_pass(grid);
        if removed == 0 {
            outcome.converged = true;
            break;
        }
        outcome.removed += removed;
    }

    if outcome.converged {
        debug!(
            "prune: removed {} tiles in {} passes",
            outcome.removed, outcome.passes
        );
    } else {
        warn!(
            "prune: hit the {} pass cap with dead ends left ({} tiles removed)",
            max_passes, outcome.removed
        );
    }
    outcome
}

/// One raster scan; tiles filled early in the scan affect later ones
fn prune_pass(grid: &mut TileGrid) -> usize {
    let mut removed = 0;
    for c in grid.interior_coords() {
        if grid.tile(c) == TileKind::Corridor && grid.count_neighbors(c, TileKind::Wall) >= 3 {
            grid.set(c, TileKind::Wall);
            removed += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::grid::Coord;

    #[test]
    fn test_isolated_corridor_network_vanishes() {
        let mut grid = TileGrid::from_rows(&[
            "#######",
            "#,,,,,#",
            "#,###,#",
            "#,#####",
            "#######",
        ]);
        let outcome = prune_dead_ends(&mut grid, 100);
        assert!(outcome.converged);
        assert_eq!(grid.count(TileKind::Corridor), 0);
        assert_eq!(outcome.removed, 8);
    }

    #[test]
    fn test_loop_survives() {
        let rows = [
            "#######",
            "#,,,,,#",
            "#,###,#",
            "#,,,,,#",
            "#######",
        ];
        let mut grid = TileGrid::from_rows(&rows);
        let outcome = prune_dead_ends(&mut grid, 100);
        assert!(outcome.converged);
        assert_eq!(outcome.removed, 0);
        assert_eq!(outcome.passes, 1);
        assert_eq!(grid, TileGrid::from_rows(&rows));
    }

    #[test]
    fn test_corridor_between_doors_is_kept() {
        let mut grid = TileGrid::from_rows(&[
            "#######",
            "#.+,+.#",
            "#######",
        ]);
        prune_dead_ends(&mut grid, 100);
        assert_eq!(grid.tile(Coord::new(3, 1)), TileKind::Corridor);
    }

    #[test]
    fn test_stub_off_a_door_is_removed() {
        let mut grid = TileGrid::from_rows(&[
            "#######",
            "#.+,,,#",
            "#######",
        ]);
        prune_dead_ends(&mut grid, 100);
        assert_eq!(grid.count(TileKind::Corridor), 0);
        assert_eq!(grid.tile(Coord::new(2, 1)), TileKind::Door);
    }

    #[test]
    fn test_pass_cap_is_reported() {
        let mut grid = TileGrid::from_rows(&[
            "#########",
            "#,,,,,,,#",
            "#########",
        ]);
        let outcome = prune_dead_ends(&mut grid, 0);
        assert!(!outcome.converged);
        assert_eq!(outcome.passes, 0);
        assert_eq!(grid.count(TileKind::Corridor), 7);
    }

    #[test]
    fn test_prune_is_idempotent() {
        let mut grid = TileGrid::from_rows(&[
            "#########",
            "#,,,,,,,#",
            "#,#,###,#",
            "#,,,#,,,#",
            "#########",
        ]);
        prune_dead_ends(&mut grid, 100);
        let once = grid.clone();
        let again = prune_dead_ends(&mut grid, 100);
        assert_eq!(again.removed, 0);
        assert_eq!(grid, once);
    }
}
