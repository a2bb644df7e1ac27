//! Console tic-tac-toe binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use strictly_tictactoe_console::{
    ComputerPlayer, GameConfig, LineInput, LineOutput, SessionSummary, ThreadPause, run_menu,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load_or_default(&cli.config)?.with_overrides(cli.think_ms, cli.seed);
    run(config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip(config), fields(think_time_ms = config.think_time_ms(), seed = ?config.seed()))]
fn run(config: GameConfig) -> Result<()> {
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut computer = ComputerPlayer::new(rng, ThreadPause, config.think_time());

    let mut input = LineInput::new(io::stdin().lock(), io::stdout());
    let mut output = LineOutput::new(io::stdout());

    let outcomes = run_menu(&mut input, &mut output, &mut computer);

    let summary = SessionSummary::from_outcomes(&outcomes);
    info!(
        sessions = summary.total(),
        x_wins = summary.x_wins(),
        o_wins = summary.o_wins(),
        ties = summary.ties(),
        quits = summary.quits(),
        "Exiting"
    );
    Ok(())
}
