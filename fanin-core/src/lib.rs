//! Fanin Core
//!
//! This crate provides a fan-in combinator for one-shot completion signals.
//! It implements:
//!
//! - Done signals (a pending/fired flag with one producer and any number of
//!   observers)
//! - Signal producers for timers and arbitrary futures
//! - First-to-fire fan-in over a runtime-sized set of signals
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `signal`: The `Signal`/`Trigger` pair and signal producers
//! - `fan_in`: The combinator, its strategies, and task accounting
//! - `error`: Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use fanin_core::{fan_in, signal::after};
//!
//! let start = tokio::time::Instant::now();
//! fan_in([
//!     after(Duration::from_secs(2 * 60 * 60)),
//!     after(Duration::from_secs(5 * 60)),
//!     after(Duration::from_secs(1)),
//!     after(Duration::from_secs(60 * 60)),
//!     after(Duration::from_secs(60)),
//! ])
//! .await;
//!
//! println!("done after {:?}", start.elapsed()); // ~1s
//! ```

pub mod error;
pub mod fan_in;
pub mod signal;

pub use error::{FanInError, Result};
pub use fan_in::{fan_in, try_fan_in, FanIn, FanInStats, Strategy};
pub use signal::{Signal, SignalId, Trigger};
