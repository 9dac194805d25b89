//! ASCII rendering
//!
//! `render_map` draws the whole level with entrance (`<`), exit (`>`) and,
//! when revealing, traps (`^`) and secret doors (`S`). `render_fov` draws
//! only what an observer has seen.

use delve_core::{Coord, DoorSet, DungeonMap, TileKind, VisibleSet};

/// Markers drawn over the tile layer, first match wins
struct Overlay {
    marks: Vec<(Coord, char)>,
}

impl Overlay {
    fn for_map(map: &DungeonMap, reveal: bool) -> Self {
        let mut marks = Vec::new();
        if let Some(entrance) = map.entrance() {
            marks.push((entrance.centroid(), '<'));
        }
        if let Some(exit) = map.exit() {
            marks.push((exit.centroid(), '>'));
        }
        if reveal {
            marks.extend(map.traps().iter().map(|&t| (t, '^')));
        }
        Self { marks }
    }

    fn at(&self, c: Coord) -> Option<char> {
        self.marks.iter().find(|(m, _)| *m == c).map(|&(_, ch)| ch)
    }
}

fn tile_char(kind: TileKind, reveal: bool, opened: bool) -> char {
    match kind {
        TileKind::Door | TileKind::SecretDoor if opened => '\'',
        _ if reveal => kind.reveal_symbol(),
        _ => kind.symbol(),
    }
}

/// Whole-map view
pub fn render_map(map: &DungeonMap, open_doors: &DoorSet, reveal: bool) -> String {
    let overlay = Overlay::for_map(map, reveal);
    draw(map, |c| {
        let ch = overlay
            .at(c)
            .unwrap_or_else(|| tile_char(map.tile(c), reveal, open_doors.contains(&c)));
        Some(ch)
    })
}

/// Field-of-view view: unseen tiles are blank, the observer is `@`
pub fn render_fov(
    map: &DungeonMap,
    observer: Coord,
    visible: &VisibleSet,
    open_doors: &DoorSet,
) -> String {
    let overlay = Overlay::for_map(map, false);
    draw(map, |c| {
        if c == observer {
            return Some('@');
        }
        if !visible.contains(&c) {
            return None;
        }
        // Lit walls are drawn solid so room outlines read clearly
        let ch = match map.tile(c) {
            TileKind::Wall | TileKind::SecretDoor => '#',
            kind => overlay
                .at(c)
                .unwrap_or_else(|| tile_char(kind, false, open_doors.contains(&c))),
        };
        Some(ch)
    })
}

fn draw(map: &DungeonMap, mut cell: impl FnMut(Coord) -> Option<char>) -> String {
    let mut out = String::with_capacity((map.width() + 1) * map.height());
    for y in 0..map.height() as i32 {
        let row: String = (0..map.width() as i32)
            .map(|x| cell(Coord::new(x, y)).unwrap_or(' '))
            .collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Parse an `x,y` pair
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad x in '{}': {}", s, e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad y in '{}': {}", s, e))?;
    Ok(Coord::new(x, y))
}
