//! Daily Quest CLI Application
//!
//! Command-line front end for the daily quest tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use quest_core::{MemoryStore, TrackerBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        ephemeral,
        no_color,
        command,
    } = Args::parse();

    let mut builder = TrackerBuilder::new().with_database_path(database_file);
    if ephemeral {
        builder = builder.with_store(Box::new(MemoryStore::new()));
    }
    let tracker = builder.build().context("Failed to initialize quest tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Daily quest started");

    let mut cli = Cli::new(tracker, renderer);
    match command {
        Some(Add(args)) => cli.add_quest(args),
        Some(List) | None => cli.list_quests(),
        Some(History) => cli.show_history(),
        Some(Toggle(args)) => cli.toggle_timer(args),
        Some(Complete(args)) => cli.complete_quest(args),
        Some(Fail(args)) => cli.fail_quest(args),
        Some(Clear) => cli.clear_incomplete(),
        Some(Settings(args)) => cli.settings(args),
        Some(Run(args)) => cli.run(args).await,
    }
}
