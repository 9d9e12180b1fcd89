//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};
use clap::Parser;

use crate::{commands::KeyBindings, console::DisplayFormat};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "stopwatch-console")]
#[command(about = "An interactive terminal stopwatch")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Display refresh interval in milliseconds
    #[arg(short, long, default_value = "50", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Column the elapsed time is drawn at
    #[arg(long, default_value = "20")]
    pub column: u16,

    /// Row the elapsed time is drawn at
    #[arg(long, default_value = "4")]
    pub row: u16,

    /// How the elapsed time is shown
    #[arg(short, long, value_enum, default_value_t = DisplayFormat::Seconds)]
    pub format: DisplayFormat,

    /// Key that starts and stops the stopwatch
    #[arg(long, default_value = "S")]
    pub start_stop_key: char,

    /// Key that resets the stopwatch
    #[arg(long, default_value = "R")]
    pub reset_key: char,

    /// Key that exits
    #[arg(long, default_value = "T")]
    pub exit_key: char,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the display refresh interval
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.interval)
    }

    /// Get the validated key bindings
    pub fn key_bindings(&self) -> anyhow::Result<KeyBindings> {
        KeyBindings::new(self.start_stop_key, self.reset_key, self.exit_key)
            .map_err(anyhow::Error::msg)
    }

    /// Get the appropriate log level based on verbose flag and log target
    pub fn log_level(&self) -> &'static str {
        // stderr shares the screen with the display, so keep it quiet there
        match (self.verbose, self.log_file.is_some()) {
            (true, _) => "debug",
            (false, true) => "info",
            (false, false) => "warn",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_layout() {
        let config = Config::try_parse_from(["stopwatch-console"]).unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_millis(50));
        assert_eq!((config.column, config.row), (20, 4));
        assert_eq!(config.format, DisplayFormat::Seconds);
        assert_eq!(config.key_bindings().unwrap(), KeyBindings::default());
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn custom_keys_and_format() {
        let config = Config::try_parse_from([
            "stopwatch-console",
            "--start-stop-key", "g",
            "--reset-key", "h",
            "--exit-key", "q",
            "--format", "clock",
            "-v",
        ])
        .unwrap();

        let keys = config.key_bindings().unwrap();
        assert_eq!((keys.start_stop, keys.reset, keys.exit), ('g', 'h', 'q'));
        assert_eq!(config.format, DisplayFormat::Clock);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn conflicting_keys_are_an_error() {
        let config =
            Config::try_parse_from(["stopwatch-console", "--reset-key", "s"]).unwrap();
        assert!(config.key_bindings().is_err());
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Config::try_parse_from(["stopwatch-console", "--interval", "0"]).is_err());
    }
}
