//! Stopwatch Console - An interactive terminal stopwatch
//!
//! This library provides the stopwatch state machine, the command dispatcher
//! that drives it and the display loop that concurrently renders it.

pub mod config;
pub mod state;
pub mod commands;
pub mod console;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use commands::Dispatcher;
pub use utils::signals::shutdown_signal;
