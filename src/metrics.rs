// Filter metrics module
//
// Provides lightweight counters for monitoring how much the filter is doing

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Filter activity counters
///
/// Uses atomic operations so the counters can be shared with the host without locks.
/// Unresolved objects and NPCs are not counted separately; they are ordinary drops.
#[derive(Debug)]
pub struct Metrics {
    /// Ticks on which the filter ran with a note-like item selected
    pub ticks_filtered: AtomicU64,

    /// Ticks that passed the menu through because the selected item is not note-like
    pub ticks_inactive: AtomicU64,

    /// Ticks gated off (not logged in, menu open, nothing selected)
    pub ticks_skipped: AtomicU64,

    /// Candidate entries seen on filtered ticks
    pub entries_examined: AtomicU64,

    /// Candidate entries removed from the menu
    pub entries_dropped: AtomicU64,

    /// Number of custom allow list rebuilds
    pub allow_list_rebuilds: AtomicU64,

    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            ticks_filtered: AtomicU64::new(0),
            ticks_inactive: AtomicU64::new(0),
            ticks_skipped: AtomicU64::new(0),
            entries_examined: AtomicU64::new(0),
            entries_dropped: AtomicU64::new(0),
            allow_list_rebuilds: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a filtered batch
    pub fn record_filtered(&self, examined: usize, kept: usize) {
        self.ticks_filtered.fetch_add(1, Ordering::Relaxed);
        self.entries_examined
            .fetch_add(examined as u64, Ordering::Relaxed);
        self.entries_dropped
            .fetch_add(examined.saturating_sub(kept) as u64, Ordering::Relaxed);
    }

    pub fn record_tick_inactive(&self) {
        self.ticks_inactive.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_tick_skipped(&self) {
        self.ticks_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_allow_list_rebuild(&self) {
        self.allow_list_rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Fraction of examined entries that were dropped
    pub fn drop_ratio(&self) -> f64 {
        let examined = self.entries_examined.load(Ordering::Relaxed);
        let dropped = self.entries_dropped.load(Ordering::Relaxed);
        if examined > 0 {
            dropped as f64 / examined as f64
        } else {
            0.0
        }
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Filter Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Ticks: {} filtered, {} inactive, {} skipped",
            self.ticks_filtered.load(Ordering::Relaxed),
            self.ticks_inactive.load(Ordering::Relaxed),
            self.ticks_skipped.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Entries: {} examined, {} dropped ({:.1}%)",
            self.entries_examined.load(Ordering::Relaxed),
            self.entries_dropped.load(Ordering::Relaxed),
            self.drop_ratio() * 100.0
        );
        tracing::info!(
            "Allow list rebuilds: {}",
            self.allow_list_rebuilds.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
