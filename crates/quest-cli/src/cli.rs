//! Command arguments and handlers.
//!
//! Each subcommand gets a small clap `Args` struct here, and [`Cli`] turns
//! it into a tracker call and renders the result as markdown.

use std::{future::Future, io};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info, trace, warn};
use quest_core::{
    ActiveQuests, OperationStatus, QuestHistory, QuestTracker, Settings, Ticker, TICK_PERIOD,
};

use crate::renderer::TerminalRenderer;

/// Add a quest for today
#[derive(Args)]
pub struct AddQuestArgs {
    /// Title of the quest
    #[arg(help = "What to do today; surrounding whitespace is trimmed")]
    pub title: String,
}

/// Act on one active quest
#[derive(Args, Clone, Copy)]
pub struct IdArgs {
    /// ID of the quest
    #[arg(help = "Unique identifier of an active quest")]
    pub id: u64,
}

/// Show or change settings
///
/// Without flags, prints the current settings. Turning auto-fail on fails
/// every quest that has already been active for 24 hours.
#[derive(Args, Clone, Copy)]
pub struct SettingsArgs {
    /// Fail quests automatically once they are 24 hours old
    #[arg(long, value_name = "SWITCH", help = "Turn the 24-hour auto-fail on or off")]
    pub auto_fail: Option<Switch>,
}

/// Run the quest timers in the foreground
///
/// Every second, each active quest whose timer is on gains one second of
/// elapsed time. Stops on Ctrl-C, or after `--seconds` when given, and then
/// saves the accumulated time.
#[derive(Args, Clone, Copy)]
pub struct RunArgs {
    /// Stop after this many seconds
    #[arg(long, help = "Stop after this many seconds instead of waiting for Ctrl-C")]
    pub seconds: Option<u64>,
}

/// On/off value for boolean settings
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl From<Switch> for bool {
    fn from(val: Switch) -> Self {
        val == Switch::On
    }
}

impl std::fmt::Display for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Switch::On => write!(f, "on"),
            Switch::Off => write!(f, "off"),
        }
    }
}

/// Runs commands against a tracker and renders their output.
pub struct Cli {
    tracker: QuestTracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: QuestTracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub fn list_quests(&self) -> Result<()> {
        let quests = ActiveQuests(self.tracker.active().snapshot());
        self.renderer.render(&quests.to_string())
    }

    pub fn show_history(&self) -> Result<()> {
        let history = QuestHistory(self.tracker.history().snapshot());
        self.renderer.render(&history.to_string())
    }

    pub fn add_quest(&mut self, args: AddQuestArgs) -> Result<()> {
        let Some(quest) = self
            .tracker
            .add_quest(&args.title)
            .context("Failed to add quest")?
        else {
            bail!("Quest title cannot be empty");
        };

        let status = OperationStatus::success(format!("Added quest {}", quest.id));
        self.renderer.render(&status.to_string())?;
        self.renderer.render(&quest.to_string())
    }

    pub fn toggle_timer(&mut self, args: IdArgs) -> Result<()> {
        let Some(quest) = self
            .tracker
            .toggle_timer(args.id)
            .context("Failed to toggle timer")?
        else {
            bail!(OperationStatus::no_active_quest(args.id).message);
        };

        let state = if quest.is_running { "started" } else { "stopped" };
        let status = OperationStatus::success(format!("Timer {state} for quest {}", quest.id));
        self.renderer.render(&status.to_string())
    }

    pub fn complete_quest(&mut self, args: IdArgs) -> Result<()> {
        let Some(quest) = self
            .tracker
            .complete_quest(args.id)
            .context("Failed to complete quest")?
        else {
            bail!(OperationStatus::no_active_quest(args.id).message);
        };

        let status = OperationStatus::success(format!("Completed quest {}", quest.id));
        self.renderer.render(&status.to_string())?;
        self.renderer.render(&quest.to_string())
    }

    pub fn fail_quest(&mut self, args: IdArgs) -> Result<()> {
        let Some(quest) = self
            .tracker
            .fail_quest(args.id)
            .context("Failed to mark quest as failed")?
        else {
            bail!(OperationStatus::no_active_quest(args.id).message);
        };

        let status = OperationStatus::success(format!("Failed quest {}", quest.id));
        self.renderer.render(&status.to_string())?;
        self.renderer.render(&quest.to_string())
    }

    pub fn clear_incomplete(&mut self) -> Result<()> {
        let failed = self
            .tracker
            .clear_incomplete()
            .context("Failed to clear quests")?;

        let status = if failed.is_empty() {
            OperationStatus::failure("No active quests to clear")
        } else {
            OperationStatus::success(format!("Failed {} incomplete quests", failed.len()))
        };
        self.renderer.render(&status.to_string())
    }

    pub fn settings(&mut self, args: SettingsArgs) -> Result<()> {
        if let Some(auto_fail) = args.auto_fail {
            debug!("Setting auto-fail {auto_fail}");
            let swept = self
                .tracker
                .update_settings(Settings {
                    auto_fail_after_24h: auto_fail.into(),
                })
                .context("Failed to save settings")?;

            let status = OperationStatus::success(format!("Auto-fail turned {auto_fail}"));
            self.renderer.render(&status.to_string())?;
            if !swept.is_empty() {
                let status =
                    OperationStatus::success(format!("Auto-failed {} expired quests", swept.len()));
                self.renderer.render(&status.to_string())?;
            }
        }

        self.renderer.render(&self.tracker.settings().to_string())
    }

    /// Ticks running quests until Ctrl-C, or for `--seconds` ticks, then
    /// saves the elapsed time and prints the active list.
    pub async fn run(mut self, args: RunArgs) -> Result<()> {
        let running = self.tracker.active().iter().filter(|q| q.is_ticking()).count();
        if running == 0 {
            self.renderer.render(
                &OperationStatus::failure("No quest timer is running; use `dq toggle <id>`")
                    .to_string(),
            )?;
        }
        info!("Running timers for {running} quests");

        let ticks = self.tick_until(args.seconds, tokio::signal::ctrl_c()).await;
        debug!("Stopped after {ticks} ticks");

        self.tracker.flush().context("Failed to save quests")?;
        self.list_quests()
    }

    /// Feeds ticks to the tracker until `limit` ticks have been applied or
    /// `interrupt` resolves. Returns the number of ticks applied.
    async fn tick_until<F>(&mut self, limit: Option<u64>, interrupt: F) -> u64
    where
        F: Future<Output = io::Result<()>>,
    {
        if limit == Some(0) {
            return 0;
        }
        tokio::pin!(interrupt);

        let mut ticker = Ticker::start(TICK_PERIOD);
        let mut applied = 0;
        loop {
            tokio::select! {
                tick = ticker.recv() => {
                    let Some(tick) = tick else { break };
                    let advanced = self.tracker.tick();
                    applied = tick.sequence;
                    trace!("Tick {} advanced {advanced} quests", tick.sequence);
                    if limit.is_some_and(|limit| tick.sequence >= limit) {
                        break;
                    }
                }
                signal = &mut interrupt => {
                    match signal {
                        Ok(()) => debug!("Interrupted"),
                        Err(e) => warn!("Failed to listen for Ctrl-C: {e}"),
                    }
                    break;
                }
            }
        }
        ticker.stop().await;
        applied
    }
}

#[cfg(test)]
mod tests {
    use std::future;

    use quest_core::{MemoryStore, TrackerBuilder};

    use super::*;

    fn memory_cli() -> Cli {
        let tracker = TrackerBuilder::new()
            .with_store(Box::new(MemoryStore::new()))
            .build()
            .unwrap();
        Cli::new(tracker, TerminalRenderer::new(false))
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_until_applies_exactly_limit_ticks() {
        let mut cli = memory_cli();
        let id = cli.tracker.add_quest("Timed").unwrap().unwrap().id;
        cli.tracker.toggle_timer(id).unwrap();

        let applied = cli.tick_until(Some(3), future::pending()).await;

        assert_eq!(applied, 3);
        assert_eq!(cli.tracker.get(id).unwrap().elapsed_millis, 3_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_until_zero_limit_applies_nothing() {
        let mut cli = memory_cli();
        let id = cli.tracker.add_quest("Timed").unwrap().unwrap().id;
        cli.tracker.toggle_timer(id).unwrap();

        assert_eq!(cli.tick_until(Some(0), future::pending()).await, 0);
        assert_eq!(cli.tracker.get(id).unwrap().elapsed_millis, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_until_stops_when_signal_listener_fails() {
        let mut cli = memory_cli();
        let interrupt = async { Err(io::Error::other("no signal handler")) };

        assert_eq!(cli.tick_until(None, interrupt).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_until_keeps_ticks_applied_before_interrupt() {
        let mut cli = memory_cli();
        let id = cli.tracker.add_quest("Timed").unwrap().unwrap().id;
        cli.tracker.toggle_timer(id).unwrap();

        let interrupt = async {
            tokio::time::sleep(std::time::Duration::from_millis(2_500)).await;
            Ok(())
        };

        assert_eq!(cli.tick_until(None, interrupt).await, 2);
        assert_eq!(cli.tracker.get(id).unwrap().elapsed_millis, 2_000);
    }

    #[test]
    fn test_switch_into_bool() {
        assert!(bool::from(Switch::On));
        assert!(!bool::from(Switch::Off));
    }

    #[test]
    fn test_switch_display_matches_value_names() {
        for switch in Switch::value_variants() {
            let name = switch.to_possible_value().unwrap();
            assert_eq!(switch.to_string(), name.get_name());
        }
    }
}
