//! Background tasks module
//!
//! This module contains the tasks that run alongside the command dispatcher.

pub mod display_loop;

// Re-export main functions
pub use display_loop::display_loop_task;
