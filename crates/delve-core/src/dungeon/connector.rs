//! Door placement and room linking
//!
//! Every room gets at least one door into traversable space; extra doors
//! are opened at random to create loops. Connectors are gathered for all
//! rooms before the first door is cut.
//!
//! A connector has exactly one owner: the room whose floor is found first
//! looking left, right, up, then down. A wall shared by two rooms belongs to
//! the left or upper one, so the other room has to find its door elsewhere
//! and every chain of room-to-room doors ends in a corridor.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, trace};

use crate::rng::GameRng;

use super::cell::TileKind;
use super::grid::{Coord, TileGrid};
use super::room::Room;

/// Walls owned by `room` that could become its doors
pub fn find_connectors(grid: &TileGrid, room: &Room) -> Vec<Coord> {
    room.perimeter()
        .filter(|&c| grid.tile(c) == TileKind::Wall)
        .filter(|&c| owning_floor(grid, c).is_some_and(|f| room.contains(f)))
        .collect()
}

/// Floor tile on the owning side of a wall that joins floor to a passage
fn owning_floor(grid: &TileGrid, c: Coord) -> Option<Coord> {
    let (left, right) = (c.offset(-1, 0), c.offset(1, 0));
    let (up, down) = (c.offset(0, -1), c.offset(0, 1));
    [(left, right), (right, left), (up, down), (down, up)]
        .into_iter()
        .find(|&(floor, other)| grid.tile(floor) == TileKind::Floor && grid.tile(other).is_passage())
        .map(|(floor, _)| floor)
}

/// Open doors for every room, in id order
///
/// Returns the doors on each room's perimeter, indexed like `rooms`.
pub fn open_doors(
    grid: &mut TileGrid,
    rooms: &[Room],
    extra_door_chance: f64,
    rng: &mut GameRng,
) -> Vec<Vec<Coord>> {
    let candidates: Vec<Vec<Coord>> = rooms.iter().map(|r| find_connectors(grid, r)).collect();

    let mut opened = 0;
    for (room, mut connectors) in rooms.iter().zip(candidates) {
        if connectors.is_empty() {
            debug!("room {} has no connector", room.id);
            continue;
        }
        rng.shuffle(&mut connectors);

        let (first, rest) = connectors.split_at(1);
        grid.set(first[0], TileKind::Door);
        opened += 1;
        for &c in rest {
            if rng.chance(extra_door_chance) {
                grid.set(c, TileKind::Door);
                opened += 1;
            }
        }
        trace!("room {}: {} connectors", room.id, connectors.len());
    }
    debug!("connectors: opened {} doors for {} rooms", opened, rooms.len());

    rooms.iter().map(|r| room_doors(grid, r)).collect()
}

/// Door and secret-door tiles on a room's perimeter, in perimeter order
pub fn room_doors(grid: &TileGrid, room: &Room) -> Vec<Coord> {
    room.perimeter().filter(|&c| grid.tile(c).is_door()).collect()
}

/// Fill every room's `connections` from the finished grid
///
/// Two rooms are linked when a run of door and corridor tiles joins one of
/// their doors without passing through a room interior. A door cut straight
/// through the wall between two rooms is the shortest such run.
pub fn link_rooms(grid: &TileGrid, rooms: &mut [Room]) {
    let width = grid.width();
    let mut visited = vec![false; width * grid.height()];
    let index = |c: Coord| c.y as usize * width + c.x as usize;

    for start in rooms.iter().flat_map(|r| r.perimeter()).collect::<Vec<_>>() {
        if !grid.tile(start).is_door() || visited[index(start)] {
            continue;
        }

        let mut touched: Vec<u32> = Vec::new();
        let mut stack = vec![start];
        visited[index(start)] = true;

        while let Some(c) = stack.pop() {
            for n in c.orthogonal() {
                let kind = grid.tile(n);
                if kind == TileKind::Floor {
                    // Only doors open onto room floor
                    if let Some(room) = rooms.iter().find(|r| r.contains(n)) {
                        if !touched.contains(&room.id) {
                            touched.push(room.id);
                        }
                    }
                    continue;
                }
                if (kind == TileKind::Corridor || kind.is_door())
                    && grid.in_bounds(n)
                    && !visited[index(n)]
                {
                    visited[index(n)] = true;
                    stack.push(n);
                }
            }
        }

        for &a in &touched {
            for &b in &touched {
                if let Some(room) = rooms.iter_mut().find(|r| r.id == a) {
                    room.connect(b);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::maze::carve_maze;
    use crate::dungeon::placement::{assign_ids, try_place_room};

    fn two_rooms_sharing_a_wall() -> (TileGrid, Vec<Room>) {
        let mut grid = TileGrid::new(15, 9);
        let mut rooms = Vec::new();
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(1, 1, 5, 7)));
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(7, 1, 7, 7)));
        assign_ids(&mut rooms);
        (grid, rooms)
    }

    #[test]
    fn test_shared_wall_belongs_to_the_left_room() {
        let (grid, rooms) = two_rooms_sharing_a_wall();
        let left = find_connectors(&grid, &rooms[0]);
        let right = find_connectors(&grid, &rooms[1]);

        // Only the seven tiles of column 6 join floor to floor
        assert_eq!(left.len(), 7);
        assert!(left.iter().all(|c| c.x == 6));
        assert!(right.is_empty());
    }

    #[test]
    fn test_shared_wall_belongs_to_the_upper_room() {
        let mut grid = TileGrid::new(9, 15);
        let mut rooms = Vec::new();
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(1, 1, 7, 5)));
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(1, 7, 7, 7)));
        assign_ids(&mut rooms);

        let upper = find_connectors(&grid, &rooms[0]);
        assert_eq!(upper.len(), 7);
        assert!(upper.iter().all(|c| c.y == 6));
        assert!(find_connectors(&grid, &rooms[1]).is_empty());
    }

    #[test]
    fn test_room_pair_always_opens_onto_the_maze() {
        // Corridor lattice fills columns 15..=19 to the right of the pair
        for seed in 0..32 {
            let mut grid = TileGrid::new(21, 9);
            let mut rooms = Vec::new();
            assert!(try_place_room(&mut grid, &mut rooms, Room::new(1, 1, 5, 7)));
            assert!(try_place_room(&mut grid, &mut rooms, Room::new(7, 1, 7, 7)));
            assign_ids(&mut rooms);
            let mut rng = GameRng::new(seed);
            carve_maze(&mut grid, &mut rng);

            let right = find_connectors(&grid, &rooms[1]);
            assert!(!right.is_empty());
            assert!(right.iter().all(|c| c.x == 14));

            let doors = open_doors(&mut grid, &rooms, 0.0, &mut rng);
            assert!(
                doors[1].iter().any(|c| c.x == 14),
                "seed {}: right room never opened onto the corridor",
                seed
            );
        }
    }

    #[test]
    fn test_every_room_gets_a_door() {
        let (mut grid, rooms) = two_rooms_sharing_a_wall();
        let mut rng = GameRng::new(1);
        let doors = open_doors(&mut grid, &rooms, 0.0, &mut rng);
        assert_eq!(doors.len(), 2);
        assert!(doors.iter().all(|d| !d.is_empty()));
        assert!(grid.count(TileKind::Door) >= 1);
    }

    #[test]
    fn test_extra_door_chance_one_opens_everything() {
        let (mut grid, rooms) = two_rooms_sharing_a_wall();
        let mut rng = GameRng::new(1);
        open_doors(&mut grid, &rooms, 1.0, &mut rng);
        assert_eq!(grid.count(TileKind::Door), 7);
    }

    #[test]
    fn test_door_between_rooms_links_them() {
        let (mut grid, mut rooms) = two_rooms_sharing_a_wall();
        let mut rng = GameRng::new(9);
        open_doors(&mut grid, &rooms, 0.0, &mut rng);
        link_rooms(&grid, &mut rooms);
        assert_eq!(rooms[0].connections, vec![2]);
        assert_eq!(rooms[1].connections, vec![1]);
    }

    #[test]
    fn test_rooms_linked_through_corridors() {
        let mut grid = TileGrid::new(21, 9);
        let mut rooms = Vec::new();
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(1, 1, 5, 7)));
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(15, 1, 5, 7)));
        assign_ids(&mut rooms);
        let mut rng = GameRng::new(4);
        carve_maze(&mut grid, &mut rng);
        open_doors(&mut grid, &rooms, 0.0, &mut rng);
        link_rooms(&grid, &mut rooms);

        // One perfect maze fills the gap, so both doors share it
        assert_eq!(rooms[0].connections, vec![2]);
        assert_eq!(rooms[1].connections, vec![1]);
    }

    #[test]
    fn test_no_connector_without_passage() {
        let mut grid = TileGrid::new(7, 7);
        let mut rooms = Vec::new();
        assert!(try_place_room(&mut grid, &mut rooms, Room::new(1, 1, 5, 5)));
        assert!(find_connectors(&grid, &rooms[0]).is_empty());
        let mut rng = GameRng::new(0);
        let doors = open_doors(&mut grid, &rooms, 1.0, &mut rng);
        assert!(doors[0].is_empty());
    }
}
