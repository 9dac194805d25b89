//! Maze carving
//!
//! Growing-tree (randomized depth-first) carve on the odd lattice with an
//! explicit stack, so stack depth never depends on grid size. Every lattice
//! cell left `Wall` after room placement seeds its own perfect maze.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;

use crate::rng::GameRng;

use super::cell::TileKind;
use super::grid::{Coord, ORTHOGONAL, TileGrid};

/// Summary of a carve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeStats {
    /// Number of independent maze trees started
    pub trees: usize,
    /// Tiles turned into `Corridor`
    pub carved: usize,
}

/// Fill every unvisited lattice cell with corridor mazes
pub fn carve_maze(grid: &mut TileGrid, rng: &mut GameRng) -> MazeStats {
    let mut stats = MazeStats::default();

    for start in grid.lattice_coords() {
        if grid.tile(start) == TileKind::Wall {
            stats.trees += 1;
            stats.carved += grow_maze(grid, start, rng);
        }
    }

    debug!("maze: {} trees, {} corridor tiles", stats.trees, stats.carved);
    stats
}

/// Carve one maze tree from `start`; returns the number of tiles carved
pub fn grow_maze(grid: &mut TileGrid, start: Coord, rng: &mut GameRng) -> usize {
    let mut stack = Vec::with_capacity(grid.width() * grid.height() / 4);
    grid.set(start, TileKind::Corridor);
    stack.push(start);
    let mut carved = 1;

    while let Some(&current) = stack.last() {
        let mut valid_dirs = [(0, 0); 4];
        let mut q = 0;

        for (dx, dy) in ORTHOGONAL {
            if can_carve(grid, current.offset(2 * dx, 2 * dy)) {
                valid_dirs[q] = (dx, dy);
                q += 1;
            }
        }

        if q == 0 {
            stack.pop();
            continue;
        }

        let (dx, dy) = valid_dirs[rng.rn2(q as u32) as usize];

        // Carve two steps
        grid.set(current.offset(dx, dy), TileKind::Corridor);
        let next = current.offset(2 * dx, 2 * dy);
        grid.set(next, TileKind::Corridor);
        carved += 2;

        stack.push(next);
    }

    carved
}

/// Lattice destination must be inside the border ring and still solid
fn can_carve(grid: &TileGrid, c: Coord) -> bool {
    grid.in_interior(c) && grid.tile(c) == TileKind::Wall
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::placement::try_place_room;
    use crate::dungeon::room::Room;
    use hashbrown::HashSet;

    fn corridor_component(grid: &TileGrid, start: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::new();
        let mut stack = vec![start];
        while let Some(c) = stack.pop() {
            if !seen.insert(c) {
                continue;
            }
            for n in c.orthogonal() {
                if grid.tile(n) == TileKind::Corridor && !seen.contains(&n) {
                    stack.push(n);
                }
            }
        }
        seen
    }

    #[test]
    fn test_empty_grid_becomes_one_perfect_maze() {
        let mut grid = TileGrid::new(21, 21);
        let mut rng = GameRng::new(11);
        let stats = carve_maze(&mut grid, &mut rng);

        assert_eq!(stats.trees, 1);
        // 10x10 lattice cells joined by a spanning tree of 99 edges
        assert_eq!(stats.carved, 100 + 99);
        assert_eq!(grid.count(TileKind::Corridor), 199);
        assert!(grid.lattice_coords().all(|c| grid.tile(c) == TileKind::Corridor));

        let component = corridor_component(&grid, Coord::new(1, 1));
        assert_eq!(component.len(), 199);
    }

    #[test]
    fn test_border_is_never_carved() {
        let mut grid = TileGrid::new(15, 11);
        let mut rng = GameRng::new(5);
        carve_maze(&mut grid, &mut rng);
        for (c, kind) in grid.iter() {
            if !grid.in_interior(c) {
                assert_eq!(kind, TileKind::Wall, "border carved at {}", c);
            }
        }
    }

    #[test]
    fn test_maze_flows_around_rooms() {
        let mut grid = TileGrid::new(21, 21);
        let mut rooms = Vec::new();
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(7, 7, 5, 5)));
        let mut rng = GameRng::new(8);
        let stats = carve_maze(&mut grid, &mut rng);

        assert_eq!(stats.trees, 1);
        let room = &rooms[0];
        assert!(room.interior().all(|c| grid.tile(c) == TileKind::Floor));
        assert!(room.perimeter().all(|c| grid.tile(c) == TileKind::Wall));

        let component = corridor_component(&grid, Coord::new(1, 1));
        for c in grid.lattice_coords().filter(|&c| !room.contains(c)) {
            assert_eq!(grid.tile(c), TileKind::Corridor);
            assert!(component.contains(&c), "lattice cell {} unreachable", c);
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let mut a = TileGrid::new(31, 21);
        let mut b = TileGrid::new(31, 21);
        carve_maze(&mut a, &mut GameRng::new(77));
        carve_maze(&mut b, &mut GameRng::new(77));
        assert_eq!(a, b);
    }
}
