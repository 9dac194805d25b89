//! Generation defaults
//!
//! Grid dimensions must be odd so rooms and corridors align to the
//! step-2 maze lattice.

/// Default map dimensions
pub const MAP_WIDTH: usize = 51;
pub const MAP_HEIGHT: usize = 51;

/// Smallest grid that still has an interior lattice cell
pub const MIN_MAP_DIMENSION: usize = 5;

/// Largest side whose coordinates still fit a `Coord`
pub const MAX_MAP_DIMENSION: usize = i32::MAX as usize;

/// Room interior size limits (odd)
pub const MIN_ROOM_SIZE: usize = 5;
pub const MAX_ROOM_SIZE: usize = 11;

/// Placement draws before the room placer gives up
pub const PLACEMENT_ATTEMPTS: u32 = 1000;

/// Upper bound on dead-end pruning passes
pub const PRUNE_ITERATIONS: u32 = 100;

/// Chance that a non-primary connector also becomes a door (loops)
pub const EXTRA_DOOR_CHANCE: f64 = 0.05;

/// Chance that a single-door room is hidden behind a secret door
pub const SECRET_ROOM_CHANCE: f64 = 0.15;

/// Per-tile trap chance in corridors
pub const CORRIDOR_TRAP_CHANCE: f64 = 0.02;

/// Per-room trap chance (placed at the room centre)
pub const ROOM_TRAP_CHANCE: f64 = 0.10;

/// Room count asked for when the caller does not say
pub const DEFAULT_ROOM_COUNT: usize = 12;

/// Sight radius used by the CLI preview
pub const DEFAULT_SIGHT_RADIUS: u32 = 8;

/// Id of the entrance room
pub const ENTRANCE_ID: u32 = 1;
