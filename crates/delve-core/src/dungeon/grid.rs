//! Tile grid
//!
//! A flat row-major array with `width` stride. Coordinates are signed so
//! neighbour and octant arithmetic never has to special-case the border;
//! anything outside the grid reads as `Wall`.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::cell::TileKind;

/// Orthogonal unit steps in N, S, W, E order
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A grid coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate offset by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four orthogonal neighbours (N, S, W, E)
    pub fn orthogonal(self) -> [Coord; 4] {
        ORTHOGONAL.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// Squared Euclidean distance
    pub const fn distance_squared(self, other: Coord) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    /// Both components odd: a maze lattice cell
    pub const fn is_lattice(self) -> bool {
        self.x % 2 != 0 && self.y % 2 != 0
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Fixed-size grid of tile kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    /// Create a grid filled with `Wall`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; width * height],
        }
    }

    /// Parse a grid from text rows
    ///
    /// `#` wall, `.` floor, `,` corridor, `+` door, `S` secret door.
    /// Unknown characters read as wall; short rows are padded with wall.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let kind = match ch {
                    '.' => TileKind::Floor,
                    ',' => TileKind::Corridor,
                    '+' => TileKind::Door,
                    'S' => TileKind::SecretDoor,
                    _ => TileKind::Wall,
                };
                grid.set(Coord::new(x as i32, y as i32), kind);
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate lies on the grid
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    /// Check if a coordinate lies strictly inside the border ring
    pub fn in_interior(&self, c: Coord) -> bool {
        c.x > 0 && c.y > 0 && c.x < self.width as i32 - 1 && c.y < self.height as i32 - 1
    }

    fn index(&self, c: Coord) -> Option<usize> {
        if self.in_bounds(c) {
            Some(c.y as usize * self.width + c.x as usize)
        } else {
            None
        }
    }

    /// Tile at `c`, or `None` off the grid
    pub fn get(&self, c: Coord) -> Option<TileKind> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Tile at `c`; off-grid reads as `Wall`
    pub fn tile(&self, c: Coord) -> TileKind {
        self.get(c).unwrap_or(TileKind::Wall)
    }

    /// Set the tile at `c`; off-grid writes are ignored
    pub fn set(&mut self, c: Coord, kind: TileKind) {
        debug_assert!(self.in_bounds(c), "write outside grid at {}", c);
        if let Some(i) = self.index(c) {
            self.tiles[i] = kind;
        }
    }

    /// Count orthogonal neighbours of the given kind
    pub fn count_neighbors(&self, c: Coord, kind: TileKind) -> usize {
        c.orthogonal()
            .iter()
            .filter(|&&n| self.tile(n) == kind)
            .count()
    }

    /// Count tiles of the given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// All tiles with their coordinates, in raster order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TileKind)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(i, &t)| {
            (Coord::new((i % width) as i32, (i / width) as i32), t)
        })
    }

    /// Coordinates strictly inside the border ring, in raster order
    pub fn interior_coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Coord::new(x, y)))
    }

    /// Odd-lattice coordinates inside the border ring, in raster order
    pub fn lattice_coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (w, h) = (self.width as i32, self.height as i32);
        (1..h - 1)
            .step_by(2)
            .flat_map(move |y| (1..w - 1).step_by(2).map(move |x| Coord::new(x, y)))
    }
}
