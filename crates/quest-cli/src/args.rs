use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AddQuestArgs, IdArgs, RunArgs, SettingsArgs};

/// Daily quest tracker for the terminal
///
/// Keep a short list of things to do today, time them while you work, and
/// mark them completed or failed. Quests left active for 24 hours fail
/// automatically unless that setting is turned off.
#[derive(Parser)]
#[command(version, about, name = "dq")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/daily-quest/quests.db
    #[arg(long, global = true, conflicts_with = "ephemeral")]
    pub database_file: Option<PathBuf>,

    /// Keep quests in memory only; nothing is saved
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the dq CLI
///
/// Without a command, `dq` lists today's active quests.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a quest for today
    #[command(alias = "a")]
    Add(AddQuestArgs),
    /// List active quests
    #[command(alias = "ls")]
    List,
    /// Show completed and failed quests
    #[command(alias = "h")]
    History,
    /// Start or stop a quest's timer
    #[command(alias = "t")]
    Toggle(IdArgs),
    /// Mark a quest as completed
    #[command(alias = "done")]
    Complete(IdArgs),
    /// Mark a quest as failed
    Fail(IdArgs),
    /// Fail every active quest
    Clear,
    /// Show or change settings
    Settings(SettingsArgs),
    /// Run the timer for quests whose timer is on
    Run(RunArgs),
}
