//! delve-core: dungeon layout generation and visibility
//!
//! This crate contains the pure computational core: a maze-carving room
//! generator producing an immutable [`DungeonMap`], and a recursive
//! shadowcasting engine that answers "what can the party see from here".
//! It performs no I/O and holds no state between calls.
//!
//! Supports `no_std` environments by disabling the default `std` feature.
//! Config file loading is gated behind `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::string::String;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod dungeon;
pub mod session;
pub mod vision;

mod consts;
mod rng;

pub use config::{ConfigError, DungeonConfig};
pub use consts::*;
pub use dungeon::{Coord, DungeonMap, Room, TileGrid, TileKind, generate};
pub use rng::GameRng;
pub use session::{DoorToggle, SessionState};
pub use vision::{DoorSet, VisibleSet, compute_visibility};
