//! Rendering of the elapsed time

use std::{
    io::{self, Stdout, Write},
    time::Duration,
};
use clap::ValueEnum;
use crossterm::{cursor::MoveTo, queue, style::Print};

/// How the elapsed time is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayFormat {
    /// Whole seconds as a float, e.g. `12.000000`
    #[default]
    Seconds,
    /// Hours, minutes and seconds, e.g. `00:00:12`
    Clock,
}

/// Format a displayed duration; only whole seconds are shown
pub fn format_elapsed(displayed: Duration, format: DisplayFormat) -> String {
    let secs = displayed.as_secs();
    match format {
        DisplayFormat::Seconds => format!("{:.6}", secs as f64),
        DisplayFormat::Clock => {
            format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
        }
    }
}

/// Sink the display loop draws into
pub trait ElapsedRenderer: Send {
    fn render(&mut self, displayed: Duration) -> io::Result<()>;
}

/// Overwrites the elapsed time in place at a fixed terminal position
pub struct TerminalRenderer {
    out: Stdout,
    column: u16,
    row: u16,
    format: DisplayFormat,
}

impl TerminalRenderer {
    pub fn new(column: u16, row: u16, format: DisplayFormat) -> Self {
        Self {
            out: io::stdout(),
            column,
            row,
            format,
        }
    }
}

impl ElapsedRenderer for TerminalRenderer {
    fn render(&mut self, displayed: Duration) -> io::Result<()> {
        // Trailing padding wipes digits left over from a longer previous value
        let text = format!("{}    ", format_elapsed(displayed, self.format));
        queue!(
            self.out,
            MoveTo(self.column, self.row),
            Print(text),
            MoveTo(self.column, self.row)
        )?;
        self.out.flush()
    }
}
