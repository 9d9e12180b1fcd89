//! Stopwatch Console - An interactive terminal stopwatch
//!
//! This is the main entry point for the stopwatch-console application.

use std::{fs::File, sync::{Arc, Mutex}};
use anyhow::Context;
use tracing::info;

use stopwatch_console::{
    commands::Dispatcher,
    config::Config,
    console::{command_stream, print_farewell, print_menu, TerminalGuard, TerminalRenderer},
    state::AppState,
    tasks::display_loop_task,
    utils::shutdown_signal,
};

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = format!("stopwatch_console={}", config.log_level());

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    let bindings = config.key_bindings()?;

    info!("Starting stopwatch-console v1.0.0");
    info!("Configuration: interval={}ms, position=({}, {}), format={:?}",
          config.interval, config.column, config.row, config.format);

    // Single stopwatch instance shared by both tasks
    let state = Arc::new(AppState::new());
    let mut dispatcher = Dispatcher::new(Arc::clone(&state));

    print_menu(&bindings).context("Failed to print menu")?;
    let guard = TerminalGuard::enter().context("Failed to prepare terminal")?;

    // Start the display refresh background task
    let display = tokio::spawn(display_loop_task(
        Arc::clone(&state),
        dispatcher.baseline_receiver(),
        TerminalRenderer::new(config.column, config.row, config.format),
        config.refresh_interval(),
    ));

    tokio::select! {
        _ = dispatcher.run(command_stream(bindings)) => {}
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            state.request_shutdown();
        }
    }

    // Wait for the display loop to observe the shutdown flag
    let frames = display.await.context("Display loop task failed")?;
    info!("Display loop finished after {} frames", frames);

    drop(guard);
    print_farewell(config.row).context("Failed to print farewell")?;

    info!("Stopwatch shutdown complete after {:?}", state.start_time.elapsed());
    Ok(())
}
