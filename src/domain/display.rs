//! Last-message-wins display surface.
//!
//! [`DisplaySurface`] wraps a [`tokio::sync::watch`] channel. Every inbound
//! message overwrites the surface wholesale; only the most recent message is
//! ever observable, with no history retained.

use tokio::sync::watch;

/// Text surface showing the most recently received message.
///
/// Backed by a `watch` channel, which natively keeps exactly the latest
/// value: after messages `m1..mN` have been written, observers see `mN` and
/// nothing else. Cloning the surface clones the sender side; all clones
/// write to the same surface.
#[derive(Debug, Clone)]
pub struct DisplaySurface {
    tx: watch::Sender<String>,
}

impl DisplaySurface {
    /// Creates an empty display surface.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self { tx }
    }

    /// Overwrites the entire surface with `text`.
    ///
    /// Never fails: the write lands even when nothing is observing.
    pub fn replace(&self, text: impl Into<String>) {
        let _prev = self.tx.send_replace(text.into());
    }

    /// Returns a snapshot of the surface's current content.
    #[must_use]
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Returns a change-notified view of the surface.
    ///
    /// Each UI renderer should call this once and await changes.
    #[must_use]
    pub fn observe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for DisplaySurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let display = DisplaySurface::new();
        assert_eq!(display.current(), "");
    }

    #[test]
    fn replace_overwrites_wholesale() {
        let display = DisplaySurface::new();
        display.replace("first");
        display.replace("second");
        assert_eq!(display.current(), "second");
    }

    #[test]
    fn only_last_of_sequence_is_observable() {
        let display = DisplaySurface::new();
        for i in 0..100 {
            display.replace(format!("message {i}"));
        }
        assert_eq!(display.current(), "message 99");
    }

    #[test]
    fn replace_without_observers_still_lands() {
        let display = DisplaySurface::new();
        display.replace("unobserved");
        assert_eq!(display.current(), "unobserved");
    }

    #[tokio::test]
    async fn observer_sees_updates() {
        let display = DisplaySurface::new();
        let mut rx = display.observe();

        display.replace("update");
        let changed = rx.changed().await;
        assert!(changed.is_ok());
        assert_eq!(*rx.borrow_and_update(), "update");
    }

    #[tokio::test]
    async fn late_observer_sees_only_latest() {
        let display = DisplaySurface::new();
        display.replace("old");
        display.replace("new");

        let rx = display.observe();
        assert_eq!(*rx.borrow(), "new");
    }
}
