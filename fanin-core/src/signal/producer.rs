//! Signal producers.
//!
//! Helpers that run an activity on the tokio runtime and fire a signal when
//! it finishes. A deadline is just another producer: put an [`after`] signal
//! into a fan-in set and the combined signal fires no later than that.

use std::future::Future;
use std::time::Duration;

use tracing::trace;

use super::Signal;

/// Create a signal that fires once `delay` has elapsed.
///
/// The delay is measured from this call. If every handle to the returned
/// signal is dropped first, the timer task stops early.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn after(delay: Duration) -> Signal {
    on_completion(tokio::time::sleep(delay))
}

/// Run `work` on the runtime and create a signal that fires when it
/// completes.
///
/// The output of `work` is discarded. If every handle to the returned signal
/// is dropped before `work` completes, `work` is dropped as well.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn on_completion<F>(work: F) -> Signal
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let (trigger, signal) = Signal::pair();
    let id = trigger.id();

    tokio::spawn(async move {
        let completed = tokio::select! {
            _ = work => true,
            _ = trigger.closed() => false,
        };

        if completed {
            trace!(signal = %id, "activity completed, firing");
            trigger.fire();
        } else {
            trace!(signal = %id, "no observers left, dropping activity");
        }
    });

    signal
}
