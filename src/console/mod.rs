//! Console I/O module
//!
//! Thin wrappers around the terminal: key input, in-place rendering and
//! raw-mode setup.

pub mod input;
pub mod render;
pub mod terminal;

// Re-export main types and functions
pub use input::{command_for_key, command_stream};
pub use render::{format_elapsed, DisplayFormat, ElapsedRenderer, TerminalRenderer};
pub use terminal::{install_panic_hook, print_farewell, print_menu, restore_terminal, TerminalGuard};
