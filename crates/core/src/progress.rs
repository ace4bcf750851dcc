//! Cosmetic progress for a running analysis.
//!
//! The value is not tied to upload or processing telemetry: it climbs in
//! fixed steps while the request is in flight, stalls below completion, and
//! jumps to 100 once the request settles.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
    time::Duration,
};

use tokio::{task::JoinHandle, time::MissedTickBehavior};

pub const TICK_INTERVAL: Duration = Duration::from_millis(500);
pub const TICK_STEP: u8 = 10;
pub const TICK_CEILING: u8 = 90;
pub const COMPLETE: u8 = 100;

/// Shared percentage shown by the progress bar.
#[derive(Debug, Clone, Default)]
pub struct ProgressGauge(Arc<AtomicU8>);

impl ProgressGauge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    /// One tick: add a step, never past the ceiling.
    pub fn advance(&self) -> u8 {
        let next = |p: u8| p.saturating_add(TICK_STEP).min(TICK_CEILING).max(p);
        let prev = self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |p| Some(next(p)))
            .unwrap_or_else(|p| p);
        next(prev)
    }

    pub fn complete(&self) {
        self.0.store(COMPLETE, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Background task advancing a gauge on a fixed interval until stopped.
#[must_use = "the ticker stops as soon as it is dropped"]
pub struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    pub fn start(gauge: ProgressGauge) -> Self {
        Self::with_interval(gauge, TICK_INTERVAL)
    }

    pub fn with_interval(gauge: ProgressGauge, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                gauge.advance();
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        // Drop aborts the task.
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
