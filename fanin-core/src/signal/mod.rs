//! One-Shot Signals
//!
//! This module implements the done signal: a notification that some
//! activity has finished. It carries no data. It is either pending or
//! fired, and once fired it stays fired.
//!
//! # Concepts
//!
//! ## Signal and Trigger
//!
//! A signal is split into two halves. The [`Trigger`] belongs to whoever
//! runs the activity and is consumed when fired. The [`Signal`] is the
//! observe-only side; it can be cloned and handed to any number of
//! observers, all of which see the same fire.
//!
//! ## Producers
//!
//! [`after`] and [`on_completion`] spawn the activity and return only the
//! observing half, which is the shape most callers want.

mod done;
mod id;
mod producer;

pub use done::{Signal, Trigger};
pub use id::SignalId;
pub use producer::{after, on_completion};
