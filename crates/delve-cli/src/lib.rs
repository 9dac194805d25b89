//! delve-cli: terminal front end for delve-core
//!
//! Prints generated maps as ASCII, dumps them as JSON, and previews what an
//! observer standing somewhere on the map would see.

mod error;
mod render;

pub use error::CliError;
pub use render::{parse_coord, render_fov, render_map};
