//! State management module
//!
//! This module contains the clock source, the stopwatch state machine and
//! the shared handle the concurrent tasks work through.

pub mod clock;
pub mod timer_state;
pub mod app_state;

// Re-export main types
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use timer_state::{Snapshot, Stopwatch, StopwatchEvent, TimerState};
pub use app_state::AppState;
