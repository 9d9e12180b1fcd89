//! Terminal setup and teardown

use std::{
    io::{self, Write},
    panic,
    sync::Once,
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{self, Clear, ClearType},
};
use tracing::{debug, warn};

use crate::commands::KeyBindings;

/// Keeps the terminal in raw mode with a hidden cursor while alive
///
/// Raw mode also suppresses input echo. Everything is restored on drop, and
/// from the panic hook since release builds abort without unwinding.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        debug!("Terminal switched to raw mode, cursor hidden");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Show the cursor and leave raw mode; harmless if neither was changed
pub fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), Show)?;
    terminal::disable_raw_mode()
}

/// Restore the terminal before the default panic report is printed
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();

    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));
    });
}

/// Clear the screen and print the command menu from the top row
pub fn print_menu(bindings: &KeyBindings) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in bindings.menu_lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Print the farewell line below the display row
pub fn print_farewell(display_row: u16) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(out, MoveTo(0, display_row.saturating_add(1)))?;
    writeln!(out, "Exiting!")?;
    out.flush()
}
