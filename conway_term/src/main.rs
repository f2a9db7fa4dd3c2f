// main.rs - Conway's Game of Life in the terminal
//
//     life                                   10x10 random grid, one generation per second
//     life --size 40 --rate 200ms            bigger and faster
//     life --pattern "gosper glider gun" --width 40 --height 20
//
// Ctrl-C exits. Logs go to stderr; set RUST_LOG=debug to see each step.

mod cli;
mod game;

use std::io;

use anyhow::{Context, Result};
use conway::{PATTERNS, TermSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::game::Game;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();
    if matches.get_flag("list-patterns") {
        for pattern in PATTERNS {
            println!("{}", pattern.name);
        }
        return Ok(());
    }

    let config = cli::matches_to_config(&matches)?;
    let mut game = Game::new(config, TermSink::new(io::stdout()));

    tokio::select! {
        outcome = game.run() => {
            let outcome = outcome?;
            info!(generation = outcome.generation, reason = ?outcome.reason, "finished");
        }
        interrupted = tokio::signal::ctrl_c() => {
            interrupted.context("listening for Ctrl-C")?;
            println!("Exiting...");
        }
    }
    Ok(())
}
