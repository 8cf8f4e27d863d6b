//! Staleness guards for overlapping async fetches.
//!
//! DESIGN
//! ======
//! Each logical resource owns a `FetchSequence`. Starting a fetch takes a
//! token; when the response arrives it is applied only if that token is still
//! the latest one and the owning view's `MountFlag` is still set. In-flight
//! requests are never cancelled, only ignored.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Opaque ticket identifying one fetch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Monotonic per-resource counter.
#[derive(Clone, Debug, Default)]
pub struct FetchSequence {
    latest: Arc<AtomicU64>,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede every earlier token and return a fresh one.
    pub fn begin(&self) -> FetchToken {
        FetchToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: FetchToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// Cleared when the owning view unmounts.
#[derive(Clone, Debug)]
pub struct MountFlag {
    alive: Arc<AtomicBool>,
}

impl Default for MountFlag {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl MountFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
