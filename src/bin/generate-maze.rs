//! CLI for maze generation

use std::io;

use clap::Parser;
use maze_walker::{MazeGenerator, WalkConfig};
use tracing_subscriber::EnvFilter;

/// Maze generator, output is readable by `walk-maze`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field width
    #[arg(long, default_value_t = WalkConfig::DEFAULT_WIDTH)]
    width: usize,

    /// Generated field height
    #[arg(long, default_value_t = WalkConfig::DEFAULT_HEIGHT)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print it as emojis
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let grid = gen.generate(args.width, args.height)?;
    println!("{}", grid.to_emojis());
    Ok(())
}
