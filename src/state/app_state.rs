//! Shared stopwatch state used by the display loop and the dispatcher

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};
use tokio::sync::watch;
use tracing::{info, warn};

use super::{
    clock::{Clock, MonotonicClock},
    timer_state::{Snapshot, Stopwatch, TimerState},
};

/// Application state shared between the concurrent tasks
///
/// The dispatcher is the only writer of stopwatch transitions; the display
/// loop only reads. The lock is held just long to read or write the
/// stopwatch fields, never across terminal I/O.
#[derive(Debug)]
pub struct AppState {
    stopwatch: Mutex<Stopwatch>,
    /// When the stopwatch was created; no running time can predate it
    pub start_time: Instant,
    /// Cooperative shutdown flag
    shutdown_tx: watch::Sender<bool>,
}

impl AppState {
    /// Create the state with a stopped stopwatch on the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MonotonicClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let (shutdown_tx, _) = watch::channel(false);

        Self {
            stopwatch: Mutex::new(Stopwatch::with_clock(clock)),
            start_time: Instant::now(),
            shutdown_tx,
        }
    }

    fn lock_stopwatch(&self) -> MutexGuard<'_, Stopwatch> {
        self.stopwatch.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("Stopwatch lock was poisoned, recovering last committed state");
            poisoned.into_inner()
        })
    }

    /// Toggle run/stop
    pub fn toggle_run_stop(&self) -> TimerState {
        let state = self.lock_stopwatch().toggle_run_stop();
        info!("Stopwatch {}", if state.is_running() { "started" } else { "stopped" });
        state
    }

    /// Reset the accumulated time
    pub fn reset(&self) -> TimerState {
        let state = self.lock_stopwatch().reset();
        info!("Stopwatch reset (running={})", state.is_running());
        state
    }

    pub fn elapsed(&self) -> Duration {
        self.lock_stopwatch().elapsed()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock_stopwatch().snapshot()
    }

    pub fn timer_state(&self) -> TimerState {
        self.lock_stopwatch().state()
    }

    /// Ask every task to stop at its next poll
    pub fn request_shutdown(&self) {
        if !self.shutdown_tx.send_replace(true) {
            info!("Shutdown requested");
        }
    }

    pub fn is_shutdown_requested(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    /// Receiver that observes the shutdown flag
    pub fn subscribe_shutdown(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
