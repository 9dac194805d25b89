//! The finished dungeon map
//!
//! A `DungeonMap` never changes after generation. Door state, discovered
//! traps and explored tiles live with the caller (see `SessionState`).

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::ENTRANCE_ID;
use crate::vision::DoorSet;

use super::cell::TileKind;
use super::grid::{Coord, TileGrid};
use super::room::Room;

/// A generated dungeon level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonMap {
    width: usize,
    height: usize,
    grid: TileGrid,
    rooms: Vec<Room>,
    traps: Vec<Coord>,
}

impl DungeonMap {
    /// Assemble a map from finished parts
    ///
    /// `rooms` must be sorted by id with ids starting at 1.
    pub fn from_parts(grid: TileGrid, rooms: Vec<Room>, traps: Vec<Coord>) -> Self {
        debug_assert!(rooms.iter().enumerate().all(|(i, r)| r.id == i as u32 + 1));
        Self {
            width: grid.width(),
            height: grid.height(),
            grid,
            rooms,
            traps,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Tile at `c`; off-grid reads as `Wall`
    pub fn tile(&self, c: Coord) -> TileKind {
        self.grid.tile(c)
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        self.grid.in_bounds(c)
    }

    /// All rooms, sorted by id
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room by id
    pub fn room(&self, id: u32) -> Option<&Room> {
        let index = id.checked_sub(1)? as usize;
        self.rooms.get(index)
    }

    /// Room whose interior contains `c`
    pub fn room_at(&self, c: Coord) -> Option<&Room> {
        self.rooms.iter().find(|r| r.contains(c))
    }

    /// The entrance room, if any room was placed
    pub fn entrance(&self) -> Option<&Room> {
        self.room(ENTRANCE_ID)
    }

    /// The room flagged as exit
    pub fn exit(&self) -> Option<&Room> {
        self.rooms.iter().find(|r| r.is_exit)
    }

    /// Trap points, corridor traps first
    pub fn traps(&self) -> &[Coord] {
        &self.traps
    }

    pub fn has_trap(&self, c: Coord) -> bool {
        self.traps.contains(&c)
    }

    /// Check if a tile blocks sight given the caller's open doors
    pub fn blocks_sight(&self, c: Coord, open_doors: &DoorSet) -> bool {
        self.tile(c).blocks(open_doors.contains(&c))
    }

    /// Check if a tile can be stepped on given the caller's open doors
    pub fn is_walkable(&self, c: Coord, open_doors: &DoorSet) -> bool {
        self.in_bounds(c) && !self.tile(c).blocks(open_doors.contains(&c))
    }

    /// Any non-wall tile, regardless of door state
    ///
    /// Renderers use this to decide which walls outline walkable space.
    pub fn is_open_tile(&self, c: Coord) -> bool {
        self.tile(c).is_open()
    }

    /// Ids of rooms whose interior touches the door at `c`
    ///
    /// Empty when `c` is not a door.
    pub fn door_rooms(&self, c: Coord) -> Vec<u32> {
        if !self.tile(c).is_door() {
            return Vec::new();
        }
        let mut ids: Vec<u32> = c
            .orthogonal()
            .iter()
            .filter_map(|&n| self.room_at(n).map(|r| r.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// ASCII rendering, one row per line
    ///
    /// With `reveal_secrets`, secret doors show as `S` instead of wall.
    pub fn to_ascii(&self, reveal_secrets: bool) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (c, kind) in self.grid.iter() {
            if c.x == 0 && c.y > 0 {
                out.push('\n');
            }
            out.push(if reveal_secrets {
                kind.reveal_symbol()
            } else {
                kind.symbol()
            });
        }
        out
    }
}

impl fmt::Display for DungeonMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii(false))
    }
}
