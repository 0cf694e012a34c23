//! CLI for walking a maze

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    thread,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use maze_walker::{display, Agent, Clock, Grid, MazeGenerator, Point, SystemClock, WalkConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Watch an agent walk the shortest way through a maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Only print the length of the shortest path
    #[arg(long)]
    no_playback: bool,

    /// Time between agent steps in milliseconds
    #[arg(short, long, default_value_t = WalkConfig::DEFAULT_MOVE_INTERVAL_MS)]
    move_interval_ms: u64,

    /// Frame length in milliseconds
    #[arg(short, long, default_value_t = WalkConfig::DEFAULT_FRAME_LENGTH_MS)]
    frame_length_ms: u64,

    /// Generated maze width
    #[arg(long, default_value_t = WalkConfig::DEFAULT_WIDTH)]
    width: usize,

    /// Generated maze height
    #[arg(long, default_value_t = WalkConfig::DEFAULT_HEIGHT)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Start column
    #[arg(long, default_value_t = 0)]
    start_x: usize,

    /// Start row
    #[arg(long, default_value_t = 0)]
    start_y: usize,

    /// Target column [default: width - 2]
    #[arg(long, requires = "end_y")]
    end_x: Option<usize>,

    /// Target row [default: height - 2]
    #[arg(long, requires = "end_x")]
    end_y: Option<usize>,

    /// File, where to read the maze. Use `-` for stdin. Generated if omitted.
    file: Option<PathBuf>,
}

impl From<Args> for WalkConfig {
    fn from(args: Args) -> Self {
        WalkConfig {
            width: args.width,
            height: args.height,
            seed: args.seed,
            move_interval: Duration::from_millis(args.move_interval_ms),
            frame_length: Duration::from_millis(args.frame_length_ms),
            start: Point::new(args.start_x, args.start_y),
            end: args.end_x.zip(args.end_y).map(|(x, y)| Point::new(x, y)),
            file: args.file,
            playback: !args.no_playback,
        }
    }
}

/// All of `reader` as text
fn read_maze(mut reader: impl Read) -> io::Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Read the maze from the configured file, or generate a new one
fn load_grid(config: &WalkConfig) -> anyhow::Result<Grid> {
    let Some(file) = &config.file else {
        return MazeGenerator::new(config.seed)
            .generate(config.width, config.height)
            .context("Could not generate maze");
    };

    let emojis = if file.to_str() == Some("-") {
        read_maze(io::stdin().lock()).context("Could not read maze from stdin")?
    } else {
        fs::read_to_string(file).with_context(|| format!("Could not read {}", file.display()))?
    };
    Grid::parse(&emojis).with_context(|| format!("Invalid maze in {}", file.display()))
}

/// Generate or read the maze, then play back the walk
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = WalkConfig::from(Args::parse());
    let grid = load_grid(&config)?;
    let start = config.start;
    let end = config.end_for(grid.width(), grid.height());
    info!(
        width = grid.width(),
        height = grid.height(),
        %start,
        %end,
        "Maze ready"
    );

    let clock = SystemClock::new();
    let mut agent = Agent::new(&grid, start, end, config.move_interval, clock.now())
        .context("Could not plan a path")?;

    if agent.path().is_empty() {
        warn!(%start, %end, "No path through the maze");
        if config.playback {
            display::print_frame(&display::frame(&grid, start, end, agent.position()));
        }
        println!("No path from {} to {}.", start, end);
        return Ok(());
    }

    if !config.playback {
        println!("The shortest path is {} steps.", agent.path().len() - 1);
        return Ok(());
    }

    loop {
        agent.tick(&clock);
        display::print_frame(&display::frame(&grid, start, end, agent.position()));
        if agent.has_arrived() {
            break;
        }
        thread::sleep(config.frame_length);
    }
    info!(steps = agent.path().len() - 1, "Agent arrived");
    Ok(())
}
