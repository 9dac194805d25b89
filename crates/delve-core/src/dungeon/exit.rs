//! Exit selection

use log::debug;

use crate::consts::ENTRANCE_ID;

use super::room::Room;

/// Flag the room whose centroid is farthest from the entrance's
///
/// Ties go to the lowest id. Returns the exit id, or `None` when the
/// entrance is the only room.
pub fn select_exit(rooms: &mut [Room]) -> Option<u32> {
    let origin = rooms.iter().find(|r| r.id == ENTRANCE_ID)?.centroid();

    let mut best: Option<(i64, u32)> = None;
    for room in rooms.iter().filter(|r| r.id != ENTRANCE_ID) {
        let d = origin.distance_squared(room.centroid());
        match best {
            Some((max, id)) if d < max || (d == max && room.id > id) => {}
            _ => best = Some((d, room.id)),
        }
    }

    let (_, exit) = best?;
    for room in rooms.iter_mut() {
        room.is_exit = room.id == exit;
    }
    debug!("exit: room {}", exit);
    Some(exit)
}
