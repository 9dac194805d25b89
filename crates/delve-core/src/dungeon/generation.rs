//! Level generation
//!
//! Runs the stages in a fixed order over one grid: rooms, maze, doors,
//! pruning, secret rooms, traps, exit. Only configuration can fail; every
//! stage after validation is bounded by its own cap.

use log::debug;

use crate::config::{ConfigError, DungeonConfig};
use crate::rng::GameRng;

use super::connector::{link_rooms, open_doors};
use super::exit::select_exit;
use super::grid::TileGrid;
use super::map::DungeonMap;
use super::maze::carve_maze;
use super::placement::place_rooms;
use super::prune::prune_dead_ends;
use super::secret::select_secret_rooms;
use super::trap::seed_traps;

/// Generate a dungeon with up to `target_room_count` rooms
pub fn generate(
    target_room_count: usize,
    config: &DungeonConfig,
    rng: &mut GameRng,
) -> Result<DungeonMap, ConfigError> {
    config.validate()?;

    let mut grid = TileGrid::new(config.width, config.height);

    let mut rooms = place_rooms(&mut grid, target_room_count, config, rng);
    carve_maze(&mut grid, rng);
    let doors = open_doors(&mut grid, &rooms, config.extra_door_chance, rng);
    prune_dead_ends(&mut grid, config.prune_iterations);
    select_secret_rooms(
        &mut grid,
        &mut rooms,
        &doors,
        config.secret_room_chance,
        rng,
    );
    link_rooms(&grid, &mut rooms);
    let traps = seed_traps(
        &grid,
        &rooms,
        config.corridor_trap_chance,
        config.room_trap_chance,
        rng,
    );
    select_exit(&mut rooms);

    debug!(
        "generated {}x{} map (seed {}): {} rooms, {} traps",
        config.width,
        config.height,
        rng.seed(),
        rooms.len(),
        traps.len()
    );

    Ok(DungeonMap::from_parts(grid, rooms, traps))
}
