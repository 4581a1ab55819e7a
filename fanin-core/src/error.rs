//! Error types.
//!
//! Fan-in itself has almost nothing that can go wrong: a coordination task
//! only ever observes signals. Everything here is reported synchronously,
//! at the call that caused it.

use std::time::Duration;

use thiserror::Error;

/// Errors reported by the fan-in combinator and signal helpers.
#[derive(Debug, Error)]
pub enum FanInError {
    /// An absent handle was found in an optional signal set.
    #[error("signal at position {index} is absent")]
    MissingSignal {
        /// Position of the absent handle in the input sequence.
        index: usize,
    },

    /// Two or more signals were combined outside a tokio runtime.
    #[error("fan-in of two or more signals requires a tokio runtime")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),

    /// A strategy name did not match any known strategy.
    #[error("unknown fan-in strategy `{0}` (expected `tree` or `flat`)")]
    UnknownStrategy(String),

    /// A bounded wait ran out before the signal fired.
    #[error("signal did not fire within {0:?}")]
    Timeout(Duration),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FanInError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_signal_names_position() {
        let err = FanInError::MissingSignal { index: 3 };
        assert_eq!(err.to_string(), "signal at position 3 is absent");
    }

    #[test]
    fn unknown_strategy_echoes_input() {
        let err = FanInError::UnknownStrategy("spiral".into());
        assert!(err.to_string().contains("`spiral`"));
    }
}
