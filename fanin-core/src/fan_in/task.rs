//! Coordination Tasks
//!
//! Every coordination task has the same shape regardless of strategy: it
//! owns the [`Trigger`] of one derived signal, waits for "some input fired",
//! and fires. It also watches its own output. Once nobody holds a handle to
//! the derived signal there is nothing left to notify, so the task exits
//! and drops its input handles.
//!
//! That second exit is what keeps losing branches from piling up. A parent
//! race that resolves drops both of its child signals; the child still
//! waiting then has no observers and exits, and so on down the subtree.
//! Caller-owned inputs are only ever observed, never fired or cancelled.
//!
//! A task can also be dropped by its runtime without finishing: the runtime
//! was already shut down when the task was spawned, or shut down mid-race.
//! Its trigger is dropped unfired, so the output stays pending. The task's
//! [`LiveTask`](super::stats::LiveTask) guard logs this at `warn` and counts
//! it in [`FanInStats::dropped`](super::FanInStats::dropped).

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, trace, Instrument, Span};

use super::stats::TaskCounters;
use crate::signal::Trigger;

/// Spawns coordination tasks for one fan-in call.
pub(crate) struct Spawner {
    handle: Handle,
    counters: Arc<TaskCounters>,
    span: Span,
}

impl Spawner {
    pub(crate) fn new(handle: Handle, counters: Arc<TaskCounters>, span: Span) -> Self {
        Self {
            handle,
            counters,
            span,
        }
    }

    /// Spawn a task that fires `trigger` once `first_input` resolves.
    pub(crate) fn spawn<F>(&self, trigger: Trigger, first_input: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let output = trigger.id();
        let mut live = self.counters.start(output);

        let task = async move {
            let fired = tokio::select! {
                _ = first_input => true,
                _ = trigger.closed() => false,
            };

            if fired {
                live.record_fired();
                trace!(%output, "input fired");
                trigger.fire();
            } else {
                live.record_abandoned();
                debug!(%output, "output unobserved, abandoning race");
            }
        };

        self.handle.spawn(task.instrument(self.span.clone()));
    }
}
