//! Done Signal Implementation
//!
//! A done signal is a one-shot completion notification. It starts pending,
//! fires at most once, and never goes back.
//!
//! # How It Works
//!
//! Each signal is a `tokio::sync::watch` channel carrying a `bool`:
//!
//! 1. [`Signal::pair`] creates the channel with `false` and splits it into a
//!    [`Trigger`] (the sender) and a [`Signal`] (a receiver).
//!
//! 2. [`Trigger::fire`] consumes the trigger and publishes `true`. Because it
//!    takes `self`, a producer cannot fire the same signal twice.
//!
//! 3. Observers clone the [`Signal`] freely. Every clone reads the same flag
//!    and every waiting observer is woken when it flips.
//!
//! A trigger that is dropped without firing leaves its signal pending
//! forever. Waiting on such a signal never resolves; it does not error.
//!
//! # Observer Tracking
//!
//! The sending side knows when the last [`Signal`] handle is dropped
//! ([`Trigger::closed`]). Producers that do work only to fire a signal use
//! this to stop early when nobody is listening anymore. Fan-in coordination
//! tasks rely on it to tear down losing branches.

use std::fmt;
use std::future::IntoFuture;
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};
use tokio::sync::watch;

use super::SignalId;
use crate::error::{FanInError, Result};

/// Observe-only handle to a one-shot done signal.
///
/// # Example
///
/// ```rust,ignore
/// let (trigger, signal) = Signal::pair();
///
/// tokio::spawn(async move {
///     do_work().await;
///     trigger.fire();
/// });
///
/// signal.wait().await;
/// ```
#[derive(Clone)]
pub struct Signal {
    /// Unique identifier shared by all clones.
    id: SignalId,

    /// The fired flag.
    rx: watch::Receiver<bool>,
}

/// Producer handle for a [`Signal`].
///
/// There is exactly one trigger per signal. It is not `Clone`.
pub struct Trigger {
    id: SignalId,
    tx: watch::Sender<bool>,
}

impl Signal {
    /// Create a pending signal together with its trigger.
    pub fn pair() -> (Trigger, Signal) {
        let id = SignalId::new();
        let (tx, rx) = watch::channel(false);
        (Trigger { id, tx }, Signal { id, rx })
    }

    /// Create a signal that has already fired.
    pub fn fired() -> Self {
        let (trigger, signal) = Self::pair();
        trigger.fire();
        signal
    }

    /// Create a signal that can never fire.
    pub fn never() -> Self {
        let (trigger, signal) = Self::pair();
        drop(trigger);
        signal
    }

    /// Get the signal's unique ID.
    pub fn id(&self) -> SignalId {
        self.id
    }

    /// Check whether the signal has fired, without waiting.
    pub fn is_fired(&self) -> bool {
        *self.rx.borrow()
    }

    /// Check whether two handles refer to the same underlying signal.
    pub fn same_as(&self, other: &Signal) -> bool {
        self.rx.same_channel(&other.rx)
    }

    /// Wait until the signal fires.
    ///
    /// Returns immediately if it already has. If the trigger was dropped
    /// without firing, this never returns.
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        let closed = rx.wait_for(|fired| *fired).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }

    /// Wait until the signal fires, giving up after `limit`.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn wait_timeout(&self, limit: Duration) -> Result<()> {
        tokio::time::timeout(limit, self.wait())
            .await
            .map_err(|_| FanInError::Timeout(limit))
    }
}

impl IntoFuture for Signal {
    type Output = ();
    type IntoFuture = BoxFuture<'static, ()>;

    fn into_future(self) -> Self::IntoFuture {
        async move { self.wait().await }.boxed()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.id)
            .field("fired", &self.is_fired())
            .finish()
    }
}

impl Trigger {
    /// Get the ID of the signal this trigger fires.
    pub fn id(&self) -> SignalId {
        self.id
    }

    /// Fire the signal, waking every observer.
    ///
    /// Firing succeeds even when nobody is observing.
    pub fn fire(self) {
        self.tx.send_replace(true);
    }

    /// Create another observer handle for this trigger's signal.
    pub fn subscribe(&self) -> Signal {
        Signal {
            id: self.id,
            rx: self.tx.subscribe(),
        }
    }

    /// Check whether any [`Signal`] handle is still alive.
    pub fn is_observed(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Wait until every [`Signal`] handle has been dropped.
    pub async fn closed(&self) {
        self.tx.closed().await
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("id", &self.id)
            .field("observers", &self.tx.receiver_count())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn pair_starts_pending() {
        let (trigger, signal) = Signal::pair();
        assert!(!signal.is_fired());
        assert_eq!(trigger.id(), signal.id());
    }

    #[test]
    fn fire_is_visible_to_all_clones() {
        let (trigger, signal) = Signal::pair();
        let other = signal.clone();

        trigger.fire();

        assert!(signal.is_fired());
        assert!(other.is_fired());
        assert!(signal.same_as(&other));
    }

    #[test]
    fn fired_and_never() {
        assert!(Signal::fired().is_fired());
        assert!(!Signal::never().is_fired());
    }

    #[test]
    fn distinct_signals_are_not_the_same() {
        let a = Signal::never();
        let b = Signal::never();
        assert!(!a.same_as(&b));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn trigger_tracks_observers() {
        let (trigger, signal) = Signal::pair();
        assert!(trigger.is_observed());

        let extra = trigger.subscribe();
        drop(signal);
        assert!(trigger.is_observed());

        drop(extra);
        assert!(!trigger.is_observed());
    }

    #[tokio::test]
    async fn wait_returns_after_fire() {
        let (trigger, signal) = Signal::pair();

        let waiter = tokio::spawn({
            let signal = signal.clone();
            async move { signal.wait().await }
        });

        tokio::task::yield_now().await;
        trigger.fire();

        waiter.await.unwrap();
        assert!(signal.is_fired());
    }

    #[tokio::test]
    async fn signal_can_be_awaited_directly() {
        Signal::fired().await;
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_trigger_never_fires() {
        let (trigger, signal) = Signal::pair();
        drop(trigger);

        let err = signal.wait_timeout(Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, FanInError::Timeout(d) if d == Duration::from_secs(5)));
        assert!(!signal.is_fired());
    }

    #[tokio::test]
    async fn every_observer_sees_one_fire() {
        let (trigger, signal) = Signal::pair();
        let woken = Arc::new(AtomicUsize::new(0));

        let observers: Vec<_> = (0..8)
            .map(|_| {
                let signal = signal.clone();
                let woken = woken.clone();
                tokio::spawn(async move {
                    signal.wait().await;
                    woken.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        trigger.fire();
        for observer in observers {
            observer.await.unwrap();
        }

        assert_eq!(woken.load(Ordering::SeqCst), 8);
        assert!(signal.is_fired());
    }

    #[tokio::test]
    async fn closed_resolves_when_observers_drop() {
        let (trigger, signal) = Signal::pair();
        let watcher = tokio::spawn(async move { trigger.closed().await });

        drop(signal);
        watcher.await.unwrap();
    }
}
