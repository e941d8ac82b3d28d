//! Per-connection write bookkeeping.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Write history of one connection, shared by whatever tasks write to it.
///
/// `first_write` is monotonic: once a write has been attempted it stays set
/// for the lifetime of the state. The last-write offset is measured on the
/// monotonic clock against a per-state epoch and only ever moves forward,
/// so idle-timeout collaborators can poll it without locking.
pub struct WriteState {
    epoch: Instant,
    first_write: AtomicBool,
    // Nanoseconds since `epoch`, offset by 1 so that 0 means "never".
    last_write: AtomicU64,
}

impl WriteState {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            first_write: AtomicBool::new(false),
            last_write: AtomicU64::new(0),
        }
    }

    /// Test-and-set the first-write flag. Returns `true` for exactly one
    /// caller, the first.
    pub fn mark_written(&self) -> bool {
        !self.first_write.swap(true, Ordering::SeqCst)
    }

    /// Whether any write has been attempted on this connection.
    pub fn has_written(&self) -> bool {
        self.first_write.load(Ordering::SeqCst)
    }

    /// Record a write attempt at the current instant.
    pub fn touch(&self) {
        let nanos = self.epoch.elapsed().as_nanos() as u64 + 1;
        self.last_write.fetch_max(nanos, Ordering::SeqCst);
    }

    /// Offset of the most recent write attempt since this state was created,
    /// or `None` if nothing was ever written.
    pub fn last_write(&self) -> Option<Duration> {
        match self.last_write.load(Ordering::SeqCst) {
            0 => None,
            nanos => Some(Duration::from_nanos(nanos - 1)),
        }
    }

    /// Time elapsed since the most recent write attempt.
    pub fn idle_for(&self) -> Option<Duration> {
        self.last_write()
            .map(|offset| self.epoch.elapsed().saturating_sub(offset))
    }
}

impl Default for WriteState {
    fn default() -> Self {
        Self::new()
    }
}
