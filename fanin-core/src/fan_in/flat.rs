//! Flat Fan-In
//!
//! One coordination task waits on every input at once and fires on the
//! first. No intermediate signals, no task tree.

use std::future::IntoFuture;

use futures_util::future::select_all;

use super::task::Spawner;
use crate::signal::Signal;

/// Combine `signals` into one signal that fires when any of them does.
pub(crate) fn combine(mut signals: Vec<Signal>, spawner: &Spawner) -> Signal {
    if signals.len() < 2 {
        return signals.pop().unwrap_or_else(Signal::fired);
    }

    let (trigger, derived) = Signal::pair();
    let any = select_all(signals.into_iter().map(IntoFuture::into_future));

    spawner.spawn(trigger, async move {
        any.await;
    });

    derived
}
