//! Per-playthrough state layered over an immutable map
//!
//! The map never records which doors are open or which traps have been
//! found. Whoever drives movement owns a `SessionState` and passes its door
//! set to the visibility engine.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::dungeon::{Coord, DungeonMap, TileKind};
use crate::vision::{DoorSet, VisibleSet, compute_visibility};

/// Outcome of toggling a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorToggle {
    /// Door is now open; opening a secret door reports the room behind it
    Opened { revealed_room: Option<u32> },
    /// Door is now closed
    Closed,
    /// The tile is not a door; nothing changed
    NotADoor,
}

/// Caller-owned door, trap and exploration state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub open_doors: DoorSet,
    pub discovered_traps: HashSet<Coord>,
    pub explored: HashSet<Coord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a closed door or close an open one
    pub fn toggle_door(&mut self, map: &DungeonMap, c: Coord) -> DoorToggle {
        let kind = map.tile(c);
        if !kind.is_door() {
            return DoorToggle::NotADoor;
        }

        if self.open_doors.remove(&c) {
            return DoorToggle::Closed;
        }
        self.open_doors.insert(c);

        let revealed_room = if kind == TileKind::SecretDoor {
            // East, west, south, north
            [(1, 0), (-1, 0), (0, 1), (0, -1)]
                .iter()
                .find_map(|&(dx, dy)| map.room_at(c.offset(dx, dy)))
                .map(|r| r.id)
        } else {
            None
        };
        DoorToggle::Opened { revealed_room }
    }

    pub fn is_open(&self, c: Coord) -> bool {
        self.open_doors.contains(&c)
    }

    /// Compute what the observer sees and add it to the explored set
    pub fn observe(&mut self, map: &DungeonMap, observer: Coord, radius: u32) -> VisibleSet {
        let visible = compute_visibility(map, observer, radius, &self.open_doors);
        self.explored.extend(visible.iter().copied());
        visible
    }

    pub fn is_explored(&self, c: Coord) -> bool {
        self.explored.contains(&c)
    }

    /// Mark the trap at `c` as found; true only the first time
    pub fn discover_trap(&mut self, map: &DungeonMap, c: Coord) -> bool {
        map.has_trap(c) && self.discovered_traps.insert(c)
    }

    /// Check if a discovered trap sits at `c`
    pub fn trap_at(&self, c: Coord) -> bool {
        self.discovered_traps.contains(&c)
    }

    /// Check if the party may step onto `c`
    pub fn can_enter(&self, map: &DungeonMap, c: Coord) -> bool {
        map.is_walkable(c, &self.open_doors)
    }
}
