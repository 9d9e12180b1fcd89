//! Display refresh background task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{console::ElapsedRenderer, state::AppState};

/// Background task that redraws the elapsed time relative to the baseline
///
/// Only reads the stopwatch. Stops at the first poll after shutdown is
/// requested and returns the number of frames drawn.
pub async fn display_loop_task<R>(
    state: Arc<AppState>,
    baseline_rx: watch::Receiver<Duration>,
    mut renderer: R,
    refresh_interval: Duration,
) -> u64
where
    R: ElapsedRenderer,
{
    info!("Starting display loop, refreshing every {:?}", refresh_interval);

    let mut shutdown_rx = state.subscribe_shutdown();
    let mut ticker = interval(refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frames = 0u64;
    let mut last_running = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if *shutdown_rx.borrow() {
                    break;
                }

                let snapshot = state.snapshot();
                if last_running != Some(snapshot.running) {
                    debug!("Display sees stopwatch running={}", snapshot.running);
                    last_running = Some(snapshot.running);
                }

                let baseline = *baseline_rx.borrow();
                let displayed = snapshot.elapsed.saturating_sub(baseline);
                match renderer.render(displayed) {
                    Ok(()) => frames += 1,
                    Err(e) => warn!("Failed to render elapsed time: {}", e),
                }
            }

            changed = shutdown_rx.changed() => {
                // A dropped sender also means nobody can keep us running
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    debug!("Display loop stopped after {} frames", frames);
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        sync::{Mutex, PoisonError},
    };
    use crate::state::ManualClock;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Duration>>>);

    impl Recorder {
        fn frames(&self) -> Vec<Duration> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
        }
    }

    impl ElapsedRenderer for Recorder {
        fn render(&mut self, displayed: Duration) -> io::Result<()> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner).push(displayed);
            Ok(())
        }
    }

    struct Failing;

    impl ElapsedRenderer for Failing {
        fn render(&mut self, _: Duration) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "terminal gone"))
        }
    }

    #[tokio::test]
    async fn renders_elapsed_minus_baseline_until_shutdown() {
        let clock = Arc::new(ManualClock::new());
        let state = Arc::new(AppState::with_clock(clock.clone()));
        let (baseline_tx, baseline_rx) = watch::channel(Duration::from_secs(1));
        let recorder = Recorder::default();

        state.toggle_run_stop();
        clock.advance(Duration::from_secs(5));

        let handle = tokio::spawn(display_loop_task(
            Arc::clone(&state),
            baseline_rx,
            recorder.clone(),
            Duration::from_millis(5),
        ));

        tokio::time::sleep(Duration::from_millis(40)).await;
        baseline_tx.send_replace(Duration::from_secs(5));
        tokio::time::sleep(Duration::from_millis(40)).await;
        state.request_shutdown();

        let frames = tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("display loop did not stop")
            .expect("display loop panicked");

        let recorded = recorder.frames();
        assert_eq!(frames as usize, recorded.len());
        assert_eq!(recorded.first(), Some(&Duration::from_secs(4)));
        assert_eq!(recorded.last(), Some(&Duration::ZERO));
    }

    #[tokio::test]
    async fn stopped_stopwatch_renders_a_stable_value() {
        let clock = Arc::new(ManualClock::new());
        let state = Arc::new(AppState::with_clock(clock.clone()));
        let (_baseline_tx, baseline_rx) = watch::channel(Duration::ZERO);
        let recorder = Recorder::default();

        state.toggle_run_stop();
        clock.advance(Duration::from_secs(3));
        state.toggle_run_stop();

        let handle = tokio::spawn(display_loop_task(
            Arc::clone(&state),
            baseline_rx,
            recorder.clone(),
            Duration::from_millis(5),
        ));
        tokio::time::sleep(Duration::from_millis(15)).await;
        clock.advance(Duration::from_secs(60));
        tokio::time::sleep(Duration::from_millis(15)).await;
        state.request_shutdown();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("display loop did not stop")
            .expect("display loop panicked");

        let recorded = recorder.frames();
        assert!(!recorded.is_empty());
        assert!(recorded.iter().all(|d| *d == Duration::from_secs(3)));
    }

    #[tokio::test]
    async fn stops_immediately_when_shutdown_already_requested() {
        let state = Arc::new(AppState::new());
        let (_baseline_tx, baseline_rx) = watch::channel(Duration::ZERO);
        state.request_shutdown();

        let frames = display_loop_task(state, baseline_rx, Recorder::default(), Duration::from_millis(5)).await;
        assert_eq!(frames, 0);
    }

    #[tokio::test]
    async fn keeps_running_through_render_errors() {
        let state = Arc::new(AppState::new());
        let (_baseline_tx, baseline_rx) = watch::channel(Duration::ZERO);

        let handle = tokio::spawn(display_loop_task(
            Arc::clone(&state),
            baseline_rx,
            Failing,
            Duration::from_millis(5),
        ));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!handle.is_finished());

        state.request_shutdown();
        let frames = tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("display loop did not stop")
            .expect("display loop panicked");
        assert_eq!(frames, 0);
    }
}
