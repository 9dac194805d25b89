//! Dungeon generator
//!
//! Main entry point for the command-line tool.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{error, info};

use delve_cli::{CliError, parse_coord, render_fov, render_map};
use delve_core::{
    Coord, DEFAULT_ROOM_COUNT, DEFAULT_SIGHT_RADIUS, DoorSet, DungeonConfig, GameRng,
    SessionState, generate,
};

/// Procedural dungeon generator with field-of-view preview
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Delve - carve a dungeon and look around", long_about = None)]
struct Args {
    /// RNG seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of rooms to try to place
    #[arg(short = 'r', long = "rooms", default_value_t = DEFAULT_ROOM_COUNT)]
    rooms: usize,

    /// JSON generation config
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Override map width (odd)
    #[arg(long = "width")]
    width: Option<usize>,

    /// Override map height (odd)
    #[arg(long = "height")]
    height: Option<usize>,

    /// Print the map as JSON instead of ASCII
    #[arg(long = "json")]
    json: bool,

    /// Show secret doors and traps
    #[arg(long = "reveal")]
    reveal: bool,

    /// Preview the field of view instead of the whole map
    #[arg(short = 'f', long = "fov")]
    fov: bool,

    /// Observer position as x,y (defaults to the entrance centre)
    #[arg(short = 'o', long = "observer", value_parser = parse_coord)]
    observer: Option<Coord>,

    /// Sight radius for the preview
    #[arg(long = "radius", default_value_t = DEFAULT_SIGHT_RADIUS)]
    radius: u32,

    /// Treat every door, secret or not, as open
    #[arg(long = "open-all-doors")]
    open_all_doors: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("delve: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => DungeonConfig::load_from_file(path)?,
        None => DungeonConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!("seed {}", rng.seed());

    let map = generate(args.rooms, &config, &mut rng)?;

    let mut session = SessionState::new();
    if args.open_all_doors {
        session.open_doors = all_doors(&map);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    if !args.fov {
        print!("{}", render_map(&map, &session.open_doors, args.reveal));
        println!(
            "seed {}  rooms {}/{}  traps {}",
            rng.seed(),
            map.rooms().len(),
            args.rooms,
            map.traps().len()
        );
        return Ok(());
    }

    let observer = match args.observer {
        Some(c) => c,
        None => map.entrance().ok_or(CliError::NoEntrance)?.centroid(),
    };
    if !map.in_bounds(observer) {
        return Err(CliError::ObserverOffMap(observer));
    }

    let visible = session.observe(&map, observer, args.radius);
    print!("{}", render_fov(&map, observer, &visible, &session.open_doors));
    println!(
        "observer {}  radius {}  visible {}",
        observer,
        args.radius,
        visible.len()
    );
    Ok(())
}

fn all_doors(map: &delve_core::DungeonMap) -> DoorSet {
    map.grid()
        .iter()
        .filter(|(_, kind)| kind.is_door())
        .map(|(c, _)| c)
        .collect()
}
