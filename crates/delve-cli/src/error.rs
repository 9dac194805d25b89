use delve_core::{ConfigError, Coord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Observer {0} is outside the map")]
    ObserverOffMap(Coord),
    #[error("No room was placed, so there is no entrance to stand in")]
    NoEntrance,
}
