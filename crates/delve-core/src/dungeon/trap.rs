//! Trap seeding
//!
//! Traps are bare coordinates. The grid is not touched; discovery and
//! triggering belong to whoever drives the session.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;

use crate::consts::ENTRANCE_ID;
use crate::rng::GameRng;

use super::cell::TileKind;
use super::grid::{Coord, TileGrid};
use super::room::Room;

/// Roll one trap per corridor tile (raster order), then one per
/// non-entrance room at its centroid
pub fn seed_traps(
    grid: &TileGrid,
    rooms: &[Room],
    corridor_chance: f64,
    room_chance: f64,
    rng: &mut GameRng,
) -> Vec<Coord> {
    let mut traps = Vec::new();

    for (c, kind) in grid.iter() {
        if kind == TileKind::Corridor && rng.chance(corridor_chance) {
            traps.push(c);
        }
    }
    let in_corridors = traps.len();

    for room in rooms.iter().filter(|r| r.id != ENTRANCE_ID) {
        if rng.chance(room_chance) {
            traps.push(room.centroid());
        }
    }

    debug!(
        "traps: {} in corridors, {} in rooms",
        in_corridors,
        traps.len() - in_corridors
    );
    traps
}
