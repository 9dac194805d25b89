//! Room placement
//!
//! Rejection-samples odd-sized, odd-aligned rectangles. Each accepted room is
//! carved to `Floor` immediately, so later overlap tests see it.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, trace};

use crate::config::DungeonConfig;
use crate::rng::GameRng;

use super::cell::TileKind;
use super::grid::TileGrid;
use super::room::Room;

/// Interior padding every room keeps from every other room
pub const ROOM_PADDING: i32 = 1;

/// Place up to `target` rooms, then sort and number them
///
/// Returning fewer rooms than asked for is valid output: the attempt cap is
/// the only termination condition besides reaching the target.
pub fn place_rooms(
    grid: &mut TileGrid,
    target: usize,
    config: &DungeonConfig,
    rng: &mut GameRng,
) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(target);
    let mut attempts = 0;

    while attempts < config.placement_attempts && rooms.len() < target {
        attempts += 1;

        let Some(candidate) = random_candidate(grid, config, rng) else {
            continue;
        };
        try_place_room(grid, &mut rooms, candidate);
    }

    if rooms.len() < target {
        debug!(
            "placed {} of {} rooms after {} attempts",
            rooms.len(),
            target,
            attempts
        );
    }

    assign_ids(&mut rooms);
    rooms
}

/// Draw a random room of odd size at an odd origin that fits the grid
fn random_candidate(grid: &TileGrid, config: &DungeonConfig, rng: &mut GameRng) -> Option<Room> {
    let w = rng.odd_in(config.min_room_size as i32, config.max_room_size as i32);
    let h = rng.odd_in(config.min_room_size as i32, config.max_room_size as i32);

    // Leave room for the wall ring
    let max_x = grid.width() as i32 - 1 - w;
    let max_y = grid.height() as i32 - 1 - h;
    if max_x < 1 || max_y < 1 {
        return None;
    }

    let x = rng.odd_in(1, max_x);
    let y = rng.odd_in(1, max_y);
    Some(Room::new(x, y, w, h))
}

/// Accept `candidate` if it is lattice-aligned, fits inside the border and
/// keeps its padding from every accepted room; carve it on success
pub fn try_place_room(grid: &mut TileGrid, rooms: &mut Vec<Room>, candidate: Room) -> bool {
    if !is_lattice_aligned(&candidate) || !fits(grid, &candidate) {
        return false;
    }

    if rooms.iter().any(|r| candidate.overlaps(r, ROOM_PADDING)) {
        return false;
    }

    for c in candidate.interior() {
        grid.set(c, TileKind::Floor);
    }
    trace!(
        "room accepted at ({}, {}) size {}x{}",
        candidate.x, candidate.y, candidate.w, candidate.h
    );
    rooms.push(candidate);
    true
}

/// Sort rooms into raster order and number them from 1
pub fn assign_ids(rooms: &mut [Room]) {
    rooms.sort_by_key(Room::raster_key);
    for (i, room) in rooms.iter_mut().enumerate() {
        room.id = i as u32 + 1;
    }
}

fn is_lattice_aligned(room: &Room) -> bool {
    room.w > 0 && room.h > 0 && room.x % 2 != 0 && room.y % 2 != 0 && room.w % 2 != 0 && room.h % 2 != 0
}

fn fits(grid: &TileGrid, room: &Room) -> bool {
    room.x >= 1
        && room.y >= 1
        && room.x + room.w <= grid.width() as i32 - 1
        && room.y + room.h <= grid.height() as i32 - 1
}
