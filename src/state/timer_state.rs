//! Stopwatch state machine
//!
//! The stopwatch is a single active context that owns the accumulated time.
//! `Running` and `Stopped` are its only substates; transitions between them
//! mutate the context, so the accumulated time survives every toggle.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::debug;

use super::clock::{Clock, MonotonicClock};

/// Run/stop substate of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Counting; the current segment started at `start_instant`
    Running { start_instant: Instant },
    /// Not counting; elapsed time is exactly the accumulated time
    Stopped,
}

impl TimerState {
    /// Check if the stopwatch is counting
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }
}

/// Events the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchEvent {
    StartStop,
    Reset,
}

/// Consistent view of the stopwatch at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub running: bool,
    pub elapsed: Duration,
}

/// Stopwatch holding the accumulated time and the current substate
#[derive(Debug)]
pub struct Stopwatch {
    clock: Arc<dyn Clock>,
    accumulated: Duration,
    state: TimerState,
}

impl Stopwatch {
    /// Create a stopped stopwatch on the system monotonic clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MonotonicClock))
    }

    /// Create a stopped stopwatch reading time from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            accumulated: Duration::ZERO,
            state: TimerState::Stopped,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Time committed by completed running segments since the last reset
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Apply one event and return the resulting substate
    pub fn process_event(&mut self, event: StopwatchEvent) -> TimerState {
        let now = self.clock.now();

        self.state = match (self.state, event) {
            (TimerState::Stopped, StopwatchEvent::StartStop) => {
                TimerState::Running { start_instant: now }
            }
            (TimerState::Running { start_instant }, StopwatchEvent::StartStop) => {
                self.accumulated = self
                    .accumulated
                    .saturating_add(now.saturating_duration_since(start_instant));
                TimerState::Stopped
            }
            (TimerState::Running { .. }, StopwatchEvent::Reset) => {
                self.accumulated = Duration::ZERO;
                TimerState::Running { start_instant: now }
            }
            (TimerState::Stopped, StopwatchEvent::Reset) => {
                self.accumulated = Duration::ZERO;
                TimerState::Stopped
            }
        };

        debug!(
            "Stopwatch event {:?} -> {:?}, accumulated={:?}",
            event, self.state, self.accumulated
        );
        self.state
    }

    /// Start when stopped, stop when running
    pub fn toggle_run_stop(&mut self) -> TimerState {
        self.process_event(StopwatchEvent::StartStop)
    }

    /// Zero the accumulated time without changing the run status
    pub fn reset(&mut self) -> TimerState {
        self.process_event(StopwatchEvent::Reset)
    }

    /// Total running time since the last reset
    pub fn elapsed(&self) -> Duration {
        match self.state {
            TimerState::Stopped => self.accumulated,
            TimerState::Running { start_instant } => self
                .accumulated
                .saturating_add(self.clock.now().saturating_duration_since(start_instant)),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            running: self.is_running(),
            elapsed: self.elapsed(),
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
