//! The clock seam.
//!
//! A room compares its lock deadline against wall-clock time whenever
//! admission is checked. Embedding systems that need deterministic
//! tests inject their own [`Clock`] instead of the system one, the same
//! way an auth layer would swap a production validator for a mock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of "now" in unix seconds.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current time as seconds since the Unix epoch.
    fn now_unix(&self) -> u64;
}

/// The production clock: reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time is before the Unix epoch")
            .as_secs()
    }
}

/// A hand-driven clock for tests and simulations.
///
/// Time only moves when told to. Keep a second `Arc` to the clock and
/// call [`set`](Self::set) or [`advance`](Self::advance) while a room
/// holds its clone.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    /// Creates a clock frozen at the given unix timestamp.
    pub fn new(now: u64) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    /// Jumps the clock to an absolute timestamp.
    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::Relaxed);
    }

    /// Moves the clock forward by `secs` seconds.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_unix(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}
