//! Arcade CLI - Play the grid game under either scheduling model

mod commands;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::{mt, nomt};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arcade")]
#[command(about = "Pacman on a grid, scheduled with or without multitasking", long_about = None)]
#[command(version)]
struct Cli {
    /// Scheduling model to run the game under
    mode: Mode,

    /// Path to a TOML game config (grid, spawns, timing)
    #[arg(long)]
    config: Option<String>,

    /// Seed for ghost movement
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// One cpu token, no time slicing: the input thread starves everything else
    Nomt,
    /// Time-sliced cooperative scheduler with a background input reader
    Mt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Frames own stdout; logs go to stderr and stay quiet unless RUST_LOG asks
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    tracing::info!(mode = ?cli.mode, "starting arcade");

    match cli.mode {
        Mode::Nomt => nomt::run(&config, cli.seed),
        Mode::Mt => mt::run(&config, cli.seed),
    }
}
