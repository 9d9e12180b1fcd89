//! Command handling module
//!
//! This module maps console keys to commands and applies them to the stopwatch.

pub mod command;
pub mod dispatcher;

// Re-export main types
pub use command::{Command, KeyBindings};
pub use dispatcher::{Dispatcher, Flow};
