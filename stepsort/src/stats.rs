//! Live run statistics: comparison/write counters and elapsed time.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Default)]
struct Timer {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

/// Tracks counters and wall-clock time for the current/most recent run.
///
/// Counters reset to 0 at `reset()` and at the start of every run. The
/// clock starts when a run starts, freezes at completion or pause, and
/// reads zero when no run has started since the last reset.
#[derive(Default)]
pub struct StatsTracker {
    comparisons: AtomicU64,
    writes: AtomicU64,
    timer: Mutex<Timer>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the counters and clear the clock.
    pub fn reset(&self) {
        self.comparisons.store(0, Ordering::SeqCst);
        self.writes.store(0, Ordering::SeqCst);
        *self.timer.lock() = Timer::default();
    }

    /// Zero the counters and start the clock.
    pub fn start_run(&self) {
        self.comparisons.store(0, Ordering::SeqCst);
        self.writes.store(0, Ordering::SeqCst);
        *self.timer.lock() = Timer {
            started: Some(Instant::now()),
            stopped: None,
        };
    }

    /// Freeze the clock at the current instant.
    pub fn stop_clock(&self) {
        let mut timer = self.timer.lock();
        if timer.started.is_some() && timer.stopped.is_none() {
            timer.stopped = Some(Instant::now());
        }
    }

    pub fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::SeqCst);
        crate::metrics::record_comparison();
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        crate::metrics::record_write();
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Elapsed time of the current/most recent run, zero if none started.
    pub fn elapsed(&self) -> Duration {
        let timer = self.timer.lock();
        match timer.started {
            Some(started) => timer.stopped.unwrap_or_else(Instant::now) - started,
            None => Duration::ZERO,
        }
    }

    /// Point-in-time view of all statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            comparisons: self.comparisons(),
            writes: self.writes(),
            elapsed: self.elapsed(),
        }
    }
}

/// Queryable statistics snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub comparisons: u64,
    pub writes: u64,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let stats = StatsTracker::new();
        stats.record_comparison();
        stats.record_comparison();
        stats.record_write();
        assert_eq!(stats.comparisons(), 2);
        assert_eq!(stats.writes(), 1);

        stats.reset();
        assert_eq!(stats.comparisons(), 0);
        assert_eq!(stats.writes(), 0);
    }

    #[test]
    fn test_elapsed_zero_before_any_run() {
        let stats = StatsTracker::new();
        assert_eq!(stats.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_elapsed_freezes_on_stop() {
        let stats = StatsTracker::new();
        stats.start_run();
        stats.stop_clock();
        let first = stats.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(stats.elapsed(), first);
    }

    #[test]
    fn test_start_run_zeroes_counters() {
        let stats = StatsTracker::new();
        stats.record_write();
        stats.start_run();
        assert_eq!(stats.snapshot().writes, 0);
        assert_eq!(stats.snapshot().comparisons, 0);
    }
}
