//! Secret room selection

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;

use crate::consts::ENTRANCE_ID;
use crate::rng::GameRng;

use super::cell::TileKind;
use super::grid::{Coord, TileGrid};
use super::room::Room;

/// Hide single-door rooms behind a secret door
///
/// `doors` is indexed like `rooms`. The entrance is never hidden. A door
/// that was pruned away since it was recorded is skipped.
pub fn select_secret_rooms(
    grid: &mut TileGrid,
    rooms: &mut [Room],
    doors: &[Vec<Coord>],
    chance: f64,
    rng: &mut GameRng,
) -> usize {
    let mut hidden = 0;

    for (room, room_doors) in rooms.iter_mut().zip(doors) {
        if room.id == ENTRANCE_ID {
            continue;
        }
        let [door] = room_doors.as_slice() else {
            continue;
        };
        if grid.tile(*door) != TileKind::Door {
            continue;
        }
        if rng.chance(chance) {
            grid.set(*door, TileKind::SecretDoor);
            room.is_secret = true;
            hidden += 1;
        }
    }

    debug!("secret rooms: {}", hidden);
    hidden
}
