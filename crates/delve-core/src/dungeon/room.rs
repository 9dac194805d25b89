//! Room records
//!
//! A room is an odd-sized, odd-aligned rectangle of `Floor`. Its `x, y` is
//! the top-left interior tile; walls live outside the rectangle.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::grid::Coord;

/// Rectangle representing a room
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Room {
    /// Stable id assigned in raster order, starting at 1 (0 = unassigned)
    pub id: u32,
    /// X coordinate of room interior (left edge)
    pub x: i32,
    /// Y coordinate of room interior (top edge)
    pub y: i32,
    /// Width of room interior
    pub w: i32,
    /// Height of room interior
    pub h: i32,
    /// Ids of rooms reachable through a shared door or a corridor run
    pub connections: Vec<u32>,
    /// Only reachable through a secret door
    pub is_secret: bool,
    /// Farthest room from the entrance
    pub is_exit: bool,
}

impl Room {
    /// Create a new room with no id
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            ..Self::default()
        }
    }

    /// Check if this room, grown by `padding` on every side, overlaps
    /// another room's interior
    pub fn overlaps(&self, other: &Room, padding: i32) -> bool {
        let x1 = self.x - padding;
        let y1 = self.y - padding;
        let x2 = self.x + self.w + padding;
        let y2 = self.y + self.h + padding;

        !(x2 <= other.x || x1 >= other.x + other.w || y2 <= other.y || y1 >= other.y + other.h)
    }

    /// Integer centroid of the interior
    pub fn centroid(&self) -> Coord {
        Coord::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Check if point is inside the room interior
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.x && c.x < self.x + self.w && c.y >= self.y && c.y < self.y + self.h
    }

    /// Interior tiles in raster order
    pub fn interior(&self) -> impl Iterator<Item = Coord> + use<> {
        let (x, y, w, h) = (self.x, self.y, self.w, self.h);
        (y..y + h).flat_map(move |ry| (x..x + w).map(move |rx| Coord::new(rx, ry)))
    }

    /// Wall ring tiles orthogonally adjacent to the interior (corners excluded)
    pub fn perimeter(&self) -> impl Iterator<Item = Coord> + use<> {
        let (x, y, w, h) = (self.x, self.y, self.w, self.h);
        let horizontal = (x..x + w).flat_map(move |px| [Coord::new(px, y - 1), Coord::new(px, y + h)]);
        let vertical = (y..y + h).flat_map(move |py| [Coord::new(x - 1, py), Coord::new(x + w, py)]);
        horizontal.chain(vertical)
    }

    /// Sort key placing rooms top-to-bottom, then left-to-right
    pub fn raster_key(&self) -> (i32, i32) {
        (self.y, self.x)
    }

    /// Record a link to another room, keeping the list sorted and unique
    pub fn connect(&mut self, other: u32) {
        if other == self.id {
            return;
        }
        if let Err(pos) = self.connections.binary_search(&other) {
            self.connections.insert(pos, other);
        }
    }
}
