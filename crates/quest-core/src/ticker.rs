//! Periodic tick source.
//!
//! [`Ticker`] runs a tokio interval in a background task and delivers
//! [`Tick`]s over a channel. It knows nothing about quests: the owner of the
//! tracker receives each tick and calls
//! [`QuestTracker::tick`](crate::QuestTracker::tick) itself.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use quest_core::ticker::Ticker;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut ticker = Ticker::start(Duration::from_millis(10));
//! let first = ticker.recv().await.expect("ticker is running");
//! assert_eq!(first.sequence, 1);
//! ticker.stop().await;
//! # }
//! ```

use std::time::Duration;

use log::debug;
use tokio::{
    sync::{
        mpsc::{self, error::TrySendError},
        watch,
    },
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

/// Interval between timer ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Ticks buffered before new ones are dropped.
const TICK_BUFFER: usize = 8;

/// One timer tick. `sequence` starts at 1 and counts delivered ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub sequence: u64,
}

/// A cancellable periodic tick source.
///
/// Dropping the ticker cancels the background task.
pub struct Ticker {
    ticks: mpsc::Receiver<Tick>,
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Starts ticking every `period`. The first tick arrives one period
    /// after the call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime or if `period` is zero.
    pub fn start(period: Duration) -> Self {
        let (tick_tx, ticks) = mpsc::channel(TICK_BUFFER);
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut sequence = 0u64;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match tick_tx.try_send(Tick { sequence: sequence + 1 }) {
                            Ok(()) => sequence += 1,
                            Err(TrySendError::Full(_)) => debug!("Tick dropped, receiver is behind"),
                            Err(TrySendError::Closed(_)) => break,
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            debug!("Ticker shutting down after {sequence} ticks");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            ticks,
            shutdown,
            handle,
        }
    }

    /// Waits for the next tick. Returns `None` once the ticker is cancelled
    /// and every buffered tick has been received.
    pub async fn recv(&mut self) -> Option<Tick> {
        self.ticks.recv().await
    }

    /// Asks the background task to stop.
    pub fn cancel(&self) {
        let _ = self.shutdown.send(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Cancels and waits for the background task to finish.
    pub async fn stop(self) {
        self.cancel();
        if let Err(e) = self.handle.await {
            debug!("Ticker task ended abnormally: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let start = Instant::now();
        let mut ticker = Ticker::start(TICK_PERIOD);

        let tick = ticker.recv().await.unwrap();

        assert_eq!(tick.sequence, 1);
        assert_eq!(Instant::now() - start, TICK_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_are_sequential() {
        let start = Instant::now();
        let mut ticker = Ticker::start(TICK_PERIOD);

        let mut sequences = Vec::new();
        for _ in 0..3 {
            sequences.push(ticker.recv().await.unwrap().sequence);
        }

        assert_eq!(sequences, vec![1, 2, 3]);
        assert_eq!(Instant::now() - start, TICK_PERIOD * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_ends_the_stream() {
        let mut ticker = Ticker::start(TICK_PERIOD);
        ticker.cancel();

        assert!(ticker.is_cancelled());
        assert_eq!(ticker.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_joins_the_task() {
        let mut ticker = Ticker::start(TICK_PERIOD);
        ticker.recv().await.unwrap();
        ticker.stop().await;
    }
}
