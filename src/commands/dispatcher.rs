//! Command dispatcher: applies console commands to the shared stopwatch

use std::{sync::Arc, time::Duration};
use futures::stream::{Stream, StreamExt};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::AppState;
use super::command::Command;

/// Whether the dispatcher keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Sole writer of stopwatch transitions
///
/// Also owns the display baseline: the elapsed time captured on the first
/// start/stop after a reset (or after launch), which the display subtracts
/// so the shown value restarts near zero.
#[derive(Debug)]
pub struct Dispatcher {
    state: Arc<AppState>,
    baseline: Option<Duration>,
    baseline_tx: watch::Sender<Duration>,
}

impl Dispatcher {
    pub fn new(state: Arc<AppState>) -> Self {
        let (baseline_tx, _) = watch::channel(Duration::ZERO);
        Self {
            state,
            baseline: None,
            baseline_tx,
        }
    }

    /// Receiver the display loop reads the current baseline from
    pub fn baseline_receiver(&self) -> watch::Receiver<Duration> {
        self.baseline_tx.subscribe()
    }

    /// Captured baseline, `None` until the next start/stop after a reset
    pub fn baseline(&self) -> Option<Duration> {
        self.baseline
    }

    /// Elapsed time relative to the baseline
    pub fn displayed(&self) -> Duration {
        self.state
            .elapsed()
            .saturating_sub(self.baseline.unwrap_or_default())
    }

    /// Apply a single command
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::StartStop => {
                self.state.toggle_run_stop();
                if self.baseline.is_none() {
                    let baseline = self.state.elapsed();
                    debug!("Captured display baseline at {:?}", baseline);
                    self.baseline = Some(baseline);
                    self.baseline_tx.send_replace(baseline);
                }
                Flow::Continue
            }
            Command::Reset => {
                self.state.reset();
                self.baseline = None;
                self.baseline_tx.send_replace(Duration::ZERO);
                Flow::Continue
            }
            Command::Exit => {
                info!("Exit command received");
                self.state.request_shutdown();
                Flow::Exit
            }
        }
    }

    /// Process commands until exit is requested or the input ends
    pub async fn run<S>(&mut self, mut commands: S)
    where
        S: Stream<Item = Command> + Unpin,
    {
        info!("Starting command dispatcher");

        while let Some(command) = commands.next().await {
            debug!("Dispatching {:?}", command);
            if self.apply(command) == Flow::Exit {
                return;
            }
        }

        info!("Command input closed, shutting down");
        self.state.request_shutdown();
    }
}
