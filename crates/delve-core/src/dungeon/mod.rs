//! Dungeon system
//!
//! Contains the tile grid, rooms, and the generation stages that turn an
//! empty grid into a finished `DungeonMap`.

mod cell;
mod connector;
mod exit;
mod generation;
mod grid;
mod map;
mod maze;
mod placement;
mod prune;
mod room;
mod secret;
mod trap;

pub use cell::TileKind;
pub use connector::{find_connectors, link_rooms, open_doors, room_doors};
pub use exit::select_exit;
pub use generation::generate;
pub use grid::{Coord, ORTHOGONAL, TileGrid};
pub use map::DungeonMap;
pub use maze::{MazeStats, carve_maze, grow_maze};
pub use placement::{ROOM_PADDING, assign_ids, place_rooms, try_place_room};
pub use prune::{PruneOutcome, prune_dead_ends};
pub use room::Room;
pub use secret::select_secret_rooms;
pub use trap::seed_traps;
