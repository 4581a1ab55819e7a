//! Tree Fan-In
//!
//! Recursive divide-and-conquer: split the inputs at the midpoint, combine
//! each half, then race the two halves. A single input is its own result,
//! so two inputs become one race of two leaves and `N` inputs become a
//! balanced tree of `N - 1` races, `ceil(log2 N)` deep.
//!
//! Every intermediate result is an ordinary [`Signal`], indistinguishable
//! from a caller's input.

use super::task::Spawner;
use crate::signal::Signal;

/// Combine `signals` into one signal that fires when any of them does.
pub(crate) fn combine(mut signals: Vec<Signal>, spawner: &Spawner) -> Signal {
    if signals.len() < 2 {
        return signals.pop().unwrap_or_else(Signal::fired);
    }

    let upper = signals.split_off(signals.len() / 2);
    let left = combine(signals, spawner);
    let right = combine(upper, spawner);

    race(left, right, spawner)
}

/// Spawn a 2-way race and return its output.
fn race(left: Signal, right: Signal, spawner: &Spawner) -> Signal {
    let (trigger, derived) = Signal::pair();

    spawner.spawn(trigger, async move {
        tokio::select! {
            _ = left.wait() => {}
            _ = right.wait() => {}
        }
    });

    derived
}
