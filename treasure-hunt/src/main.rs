//! Terminal treasure hunt.
//!
//! Walk the `@` over the board with the arrow keys or `hjkl` and pick up
//! every `$`. The `*` trail marks the shortest route to the nearest one.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use treasure_hunt::{
    DEFAULT_SIZE, DEFAULT_TREASURES, GameConfig, GridState, HuntModel, seeded_rng,
};
use trove_core::{App, AppConfig};
use trove_crossterm::CrosstermDriver;

#[derive(Parser)]
#[command(name = "treasure-hunt")]
#[command(about = "Find every treasure on a grid, guided by a shortest-path hint")]
#[command(version)]
struct Cli {
    /// Side length of the square board
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: i32,

    /// Number of treasures to place
    #[arg(short, long, default_value_t = DEFAULT_TREASURES)]
    treasures: usize,

    /// Seed for board generation (random when absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Load the board from a text layout instead of generating one
    #[arg(long, conflicts_with_all = ["size", "treasures", "seed"])]
    layout: Option<PathBuf>,

    /// Append log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8, file: Option<&PathBuf>) -> Result<(), Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    // RUST_LOG still wins over the flag.
    builder.parse_default_env();
    if let Some(path) = file {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(f)));
    }
    builder.try_init()?;
    Ok(())
}

/// Build the board, returning the generation seed when one was used.
fn load_board(cli: &Cli) -> Result<(GridState, Option<u64>), Box<dyn Error>> {
    if let Some(path) = &cli.layout {
        let text = std::fs::read_to_string(path)?;
        let state = GridState::from_layout(&text)?;
        info!("loaded board from {}", path.display());
        return Ok((state, None));
    }
    let config = GameConfig {
        size: cli.size,
        treasures: cli.treasures,
        seed: cli.seed,
    };
    config.validate()?;
    let (mut rng, seed) = seeded_rng(&config);
    info!("generating {0}x{0} board with seed {seed}", config.size);
    Ok((GridState::generate(&config, &mut rng)?, Some(seed)))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_ref())?;

    let (state, seed) = load_board(&cli)?;
    let model = HuntModel::new(state);
    let (rows, cols) = model.canvas_size();
    let mut app = App::new(AppConfig {
        model,
        driver: CrosstermDriver::new(),
        rows,
        cols,
    });
    app.run()?;

    let model = app.into_model();
    let state = model.state();
    if model.is_won() {
        println!(
            "You found all {} treasures in {} moves.",
            state.total_treasures(),
            model.moves()
        );
    } else {
        println!(
            "Found {}/{} treasures.",
            state.treasures_found(),
            state.total_treasures()
        );
    }
    if let Some(seed) = seed {
        println!("Board seed: {seed}");
    }
    Ok(())
}
