//! Signal Fan-In
//!
//! Combine any number of done signals into one that fires as soon as the
//! first of them fires.
//!
//! # Cardinality
//!
//! - No inputs: the result has already fired. There is nothing to wait for.
//! - One input: the result *is* that input. No task is spawned.
//! - Two or more: a new signal, fired by coordination tasks running on a
//!   tokio runtime.
//!
//! The result never fires before some input has fired, and if no input ever
//! fires it stays pending forever. There is no built-in timeout; add an
//! [`after`](crate::signal::after) signal to the set instead.
//!
//! # Strategies
//!
//! [`Strategy::Tree`] (the default) builds a balanced binary tree of 2-way
//! races. [`Strategy::Flat`] runs one task that waits on everything. Both
//! give the same guarantees.
//!
//! # Task Lifetime
//!
//! Every coordination task exits once its output has fired or once nobody
//! holds its output anymore. Dropping the returned signal before it fires
//! tears the whole tree down. See [`FanIn::stats`] for live counts.
//!
//! A task dropped by its runtime before finishing cannot fire its output,
//! so the result stays pending even if an input fires. This happens when
//! the runtime shuts down mid-race, or when it was already shut down at
//! call time (the call itself still succeeds). Each such task is logged at
//! `warn` and counted in [`FanInStats::dropped`].
//!
//! # Absent Handles
//!
//! A [`Signal`] cannot be null. Callers that build sets out of optional
//! handles use [`try_fan_in`], which rejects the first `None` with
//! [`FanInError::MissingSignal`] before anything is spawned.

mod flat;
mod stats;
mod strategy;
mod task;
mod tree;

pub use stats::FanInStats;
pub use strategy::Strategy;

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug_span, trace};

use self::stats::TaskCounters;
use self::task::Spawner;
use crate::error::{FanInError, Result};
use crate::signal::Signal;

/// Combine `signals` into one signal that fires when any of them fires.
///
/// Uses a default [`FanIn`].
///
/// # Panics
///
/// Panics at call time if there are two or more signals and the caller is
/// not inside a tokio runtime.
pub fn fan_in<I>(signals: I) -> Signal
where
    I: IntoIterator<Item = Signal>,
{
    FanIn::new().combine(signals)
}

/// Like [`fan_in`], for sets that may contain absent handles.
///
/// Rejects the set with [`FanInError::MissingSignal`] if any entry is
/// `None`, and with [`FanInError::NoRuntime`] instead of panicking.
pub fn try_fan_in<I>(signals: I) -> Result<Signal>
where
    I: IntoIterator<Item = Option<Signal>>,
{
    FanIn::new().try_combine_optional(signals)
}

/// Configured fan-in combinator.
///
/// Clones share their task counters.
///
/// # Example
///
/// ```rust,ignore
/// let fan = FanIn::new().strategy(Strategy::Flat).label("shutdown");
///
/// let done = fan.combine([ctrl_c, after(Duration::from_secs(30)), workers_done]);
/// done.wait().await;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FanIn {
    strategy: Strategy,

    /// Runtime to spawn on. `None` means the caller's ambient runtime.
    handle: Option<Handle>,

    /// Attached to the tracing span of every spawned task.
    label: Option<String>,

    counters: Arc<TaskCounters>,
}

impl FanIn {
    /// Create a fan-in with the tree strategy on the ambient runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordination strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Spawn coordination tasks on `handle` instead of the ambient runtime.
    ///
    /// The runtime must outlive the race. If it has shut down, or shuts
    /// down before an input fires, the combined signal never fires; the
    /// lost tasks show up in [`FanInStats::dropped`] and are logged at
    /// `warn`.
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Label the tracing span of every task this fan-in spawns.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the configured strategy.
    pub fn current_strategy(&self) -> Strategy {
        self.strategy
    }

    /// Combine `signals` into one signal that fires when any of them fires.
    ///
    /// # Panics
    ///
    /// Panics at call time if there are two or more signals, no runtime was
    /// configured, and the caller is not inside a tokio runtime.
    pub fn combine<I>(&self, signals: I) -> Signal
    where
        I: IntoIterator<Item = Signal>,
    {
        self.try_combine(signals)
            .unwrap_or_else(|err| panic!("fan-in failed: {err}"))
    }

    /// Combine `signals`, reporting a missing runtime as an error.
    pub fn try_combine<I>(&self, signals: I) -> Result<Signal>
    where
        I: IntoIterator<Item = Signal>,
    {
        let mut signals: Vec<Signal> = signals.into_iter().collect();
        let inputs = signals.len();

        if inputs < 2 {
            trace!(inputs, "trivial fan-in, no task needed");
            return Ok(signals.pop().unwrap_or_else(Signal::fired));
        }

        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => Handle::try_current()?,
        };
        let span = debug_span!(
            "fan_in",
            strategy = %self.strategy,
            inputs,
            label = self.label.as_deref()
        );
        trace!(parent: &span, "spawning coordination tasks");

        let spawner = Spawner::new(handle, Arc::clone(&self.counters), span);
        Ok(match self.strategy {
            Strategy::Tree => tree::combine(signals, &spawner),
            Strategy::Flat => flat::combine(signals, &spawner),
        })
    }

    /// Combine a set of optional handles.
    ///
    /// The whole set is checked before anything is spawned; the first
    /// `None` is reported with its position.
    pub fn try_combine_optional<I>(&self, signals: I) -> Result<Signal>
    where
        I: IntoIterator<Item = Option<Signal>>,
    {
        let signals = signals
            .into_iter()
            .enumerate()
            .map(|(index, signal)| signal.ok_or(FanInError::MissingSignal { index }))
            .collect::<Result<Vec<_>>>()?;

        self.try_combine(signals)
    }

    /// Snapshot of the coordination tasks spawned by this fan-in and its
    /// clones.
    pub fn stats(&self) -> FanInStats {
        self.counters.snapshot()
    }
}
