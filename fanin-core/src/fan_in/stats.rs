//! Coordination task accounting.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::warn;

use crate::signal::SignalId;

/// Counters shared by every task a [`FanIn`](super::FanIn) spawns.
#[derive(Debug, Default)]
pub(crate) struct TaskCounters {
    spawned: AtomicUsize,
    live: AtomicUsize,
    fired: AtomicUsize,
    abandoned: AtomicUsize,
    dropped: AtomicUsize,
}

impl TaskCounters {
    /// Record a newly spawned task feeding `output`. The returned guard
    /// keeps it counted as live until dropped.
    pub(crate) fn start(self: &Arc<Self>, output: SignalId) -> LiveTask {
        self.spawned.fetch_add(1, Ordering::Relaxed);
        self.live.fetch_add(1, Ordering::SeqCst);
        LiveTask {
            counters: Arc::clone(self),
            output,
            settled: false,
        }
    }

    pub(crate) fn snapshot(&self) -> FanInStats {
        FanInStats {
            spawned: self.spawned.load(Ordering::Relaxed),
            live: self.live.load(Ordering::SeqCst),
            fired: self.fired.load(Ordering::Relaxed),
            abandoned: self.abandoned.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

/// Keeps one task counted as live.
///
/// Decrements on drop. A task that is dropped before it either fired or
/// was abandoned (its runtime shut down, or was already gone at spawn
/// time) is counted as dropped and logged: its output will never fire.
pub(crate) struct LiveTask {
    counters: Arc<TaskCounters>,
    output: SignalId,
    settled: bool,
}

impl LiveTask {
    pub(crate) fn record_fired(&mut self) {
        self.settled = true;
        self.counters.fired.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_abandoned(&mut self) {
        self.settled = true;
        self.counters.abandoned.fetch_add(1, Ordering::Relaxed);
    }
}

impl Drop for LiveTask {
    fn drop(&mut self) {
        if !self.settled {
            self.counters.dropped.fetch_add(1, Ordering::Relaxed);
            warn!(
                output = %self.output,
                "coordination task dropped before its race finished; output will stay pending"
            );
        }
        self.counters.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Point-in-time view of a fan-in's coordination tasks.
///
/// Once every task has finished, `fired + abandoned + dropped == spawned`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanInStats {
    /// Tasks spawned since the fan-in was created.
    pub spawned: usize,

    /// Tasks still running.
    pub live: usize,

    /// Tasks that fired their output.
    pub fired: usize,

    /// Tasks that exited because nobody observed their output anymore.
    pub abandoned: usize,

    /// Tasks dropped by their runtime before finishing. Their outputs
    /// never fire.
    pub dropped: usize,
}
