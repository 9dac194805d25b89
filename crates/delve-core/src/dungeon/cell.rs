//! Tile kinds

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Kind of a single grid tile
///
/// `Floor` and `Corridor` are both walkable; the distinction only records
/// whether the tile belongs to a room interior or to the maze.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Wall = 0,
    Floor = 1,
    Corridor = 2,
    Door = 3,
    SecretDoor = 4,
}

impl TileKind {
    /// Check if this is a door of either kind
    pub const fn is_door(&self) -> bool {
        matches!(self, TileKind::Door | TileKind::SecretDoor)
    }

    /// Floor or corridor: walkable regardless of any door state
    pub const fn is_passage(&self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Corridor)
    }

    /// Everything that is not solid rock, including closed and secret doors
    pub const fn is_open(&self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    /// Check if this tile blocks sight and movement
    ///
    /// `opened` tells whether the caller has marked this coordinate as an
    /// open door; it is ignored for non-door tiles.
    pub const fn blocks(&self, opened: bool) -> bool {
        match self {
            TileKind::Wall => true,
            TileKind::Door | TileKind::SecretDoor => !opened,
            TileKind::Floor | TileKind::Corridor => false,
        }
    }

    /// Get the display character for this tile kind
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Wall => ' ',
            TileKind::Floor => '.',
            TileKind::Corridor => '#',
            TileKind::Door => '+',
            TileKind::SecretDoor => ' ', // looks like wall
        }
    }

    /// Display character with secret doors revealed
    pub const fn reveal_symbol(&self) -> char {
        match self {
            TileKind::SecretDoor => 'S',
            other => other.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_blocking_rules() {
        assert!(TileKind::Wall.blocks(false));
        assert!(TileKind::Wall.blocks(true));
        assert!(TileKind::Door.blocks(false));
        assert!(!TileKind::Door.blocks(true));
        assert!(TileKind::SecretDoor.blocks(false));
        assert!(!TileKind::SecretDoor.blocks(true));
        assert!(!TileKind::Floor.blocks(false));
        assert!(!TileKind::Corridor.blocks(false));
    }

    #[test]
    fn test_secret_door_looks_like_wall() {
        assert_eq!(TileKind::SecretDoor.symbol(), TileKind::Wall.symbol());
        assert_ne!(TileKind::SecretDoor.reveal_symbol(), TileKind::Wall.symbol());
    }

    #[test]
    fn test_only_wall_is_closed() {
        let open: Vec<_> = TileKind::iter().filter(|k| k.is_open()).collect();
        assert_eq!(open.len(), 4);
        assert!(!open.contains(&TileKind::Wall));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TileKind::SecretDoor.to_string(), "SecretDoor");
        assert_eq!(TileKind::default(), TileKind::Wall);
    }
}
