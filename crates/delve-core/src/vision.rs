//! Field of view
//!
//! Shadowcasting over eight octants. Each octant is scanned row by row
//! outward from the observer, carrying a window of slopes that is still
//! lit. Every run of see-through tiles in a row narrows the window for the
//! row behind it to the part of the window the run covers; a row with no
//! such run ends the branch. Slopes are exact fractions, and a tile is lit
//! whenever any part of it falls inside the window, so turning an opaque
//! tile see-through can only widen the windows behind it. Walls, closed
//! doors and unopened secret doors are opaque; opaque tiles are still lit
//! so the viewer sees the walls of a room.
//!
//! The engine holds no state. Accumulating explored tiles is the caller's
//! job (see `SessionState::observe`).

use core::cmp::Ordering;

use hashbrown::HashSet;

use crate::dungeon::{Coord, DungeonMap, TileGrid};

/// Door coordinates the caller has opened
pub type DoorSet = HashSet<Coord>;

/// Coordinates visible from an observer
pub type VisibleSet = HashSet<Coord>;

/// Octant transforms `(xx, xy, yx, yy)`: a tile `col` across and `depth`
/// out lands at `(col * xx + depth * xy, col * yx + depth * yy)`
const OCTANTS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, 1),
    (0, 1, 1, 0),
    (0, -1, 1, 0),
    (-1, 0, 0, 1),
    (-1, 0, 0, -1),
    (0, -1, -1, 0),
    (0, 1, -1, 0),
    (1, 0, 0, -1),
];

/// Tiles visible from `observer` within `radius`
///
/// The observer tile is always included. The observer must be on the map;
/// an off-map observer is a caller bug and yields an empty set.
pub fn compute_visibility(
    map: &DungeonMap,
    observer: Coord,
    radius: u32,
    open_doors: &DoorSet,
) -> VisibleSet {
    shadowcast(map.grid(), observer, radius, open_doors)
}

/// Shadowcast directly over a tile grid
pub fn shadowcast(grid: &TileGrid, observer: Coord, radius: u32, open_doors: &DoorSet) -> VisibleSet {
    let mut visible = VisibleSet::new();

    debug_assert!(grid.in_bounds(observer), "observer {} is off the map", observer);
    if !grid.in_bounds(observer) {
        return visible;
    }

    visible.insert(observer);
    if radius == 0 {
        return visible;
    }

    let radius = i32::try_from(radius).unwrap_or(i32::MAX);
    // Rows past the grid extent are entirely off the map
    let extent = i32::try_from(grid.width().max(grid.height())).unwrap_or(i32::MAX);
    let mut caster = Caster {
        grid,
        open_doors,
        origin: observer,
        max_depth: radius.min(extent),
        radius_sq: i64::from(radius) * i64::from(radius),
        visible: &mut visible,
    };
    for octant in OCTANTS {
        caster.cast(1, Slope::new(0, 1), Slope::new(1, 1), octant);
    }

    visible
}

/// Exact slope `num / den` across a row, with `den > 0`
#[derive(Debug, Clone, Copy)]
struct Slope {
    num: i64,
    den: i64,
}

impl Slope {
    const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Slope through the near-side edge of column `col` at `depth`
    fn left_edge(depth: i32, col: i32) -> Self {
        Self::new(2 * i64::from(col) - 1, 2 * i64::from(depth))
    }

    /// First column at `depth` whose far-side edge lies past this slope
    fn first_col(self, depth: i32) -> i32 {
        let num = 2 * i128::from(depth) * i128::from(self.num) + i128::from(self.den);
        narrow(num.div_euclid(2 * i128::from(self.den)))
    }

    /// Last column at `depth` whose near-side edge lies before this slope
    fn last_col(self, depth: i32) -> i32 {
        let num = 2 * i128::from(depth) * i128::from(self.num) - i128::from(self.den);
        narrow(-(-num).div_euclid(2 * i128::from(self.den)))
    }
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slope {}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

/// Columns never exceed the depth, which is an `i32`
fn narrow(col: i128) -> i32 {
    i32::try_from(col).unwrap_or(if col < 0 { i32::MIN } else { i32::MAX })
}

struct Caster<'a> {
    grid: &'a TileGrid,
    open_doors: &'a DoorSet,
    origin: Coord,
    max_depth: i32,
    radius_sq: i64,
    visible: &'a mut VisibleSet,
}

impl Caster<'_> {
    fn blocks(&self, c: Coord) -> bool {
        !self.grid.in_bounds(c) || self.grid.tile(c).blocks(self.open_doors.contains(&c))
    }

    /// Scan row `depth` between `start` and `end`, then recurse once per
    /// see-through run into the row behind it
    fn cast(&mut self, depth: i32, start: Slope, end: Slope, octant: (i32, i32, i32, i32)) {
        if start >= end || depth > self.max_depth {
            return;
        }
        let (xx, xy, yx, yy) = octant;

        let mut run: Option<Slope> = None;
        for col in start.first_col(depth)..=end.last_col(depth) {
            let c = Coord::new(
                self.origin.x + col * xx + depth * xy,
                self.origin.y + col * yx + depth * yy,
            );

            let dist_sq = i64::from(col) * i64::from(col) + i64::from(depth) * i64::from(depth);
            if dist_sq <= self.radius_sq && self.grid.in_bounds(c) {
                self.visible.insert(c);
            }

            if self.blocks(c) {
                if let Some(run_start) = run.take() {
                    self.cast(depth + 1, run_start, Slope::left_edge(depth, col), octant);
                }
            } else if run.is_none() {
                run = Some(start.max(Slope::left_edge(depth, col)));
            }
        }

        if let Some(run_start) = run {
            self.cast(depth + 1, run_start, end, octant);
        }
    }
}
