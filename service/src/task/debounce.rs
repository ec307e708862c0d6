//! [`Debounce`] definitions.

use std::{future, pin::Pin, time::Duration};

use tokio::time::{self, Sleep};

/// Single-slot debouncing timer.
///
/// Collapses a burst of values [scheduled][`Debounce::schedule()`] in quick
/// succession into the last one, which becomes [ready][`Debounce::ready()`]
/// once no new value has been scheduled for the configured delay.
#[derive(Debug)]
pub struct Debounce<T> {
    /// Quiet period a scheduled value must survive to become ready.
    delay: Duration,

    /// Pending value along with its timer.
    pending: Option<(T, Pin<Box<Sleep>>)>,
}

impl<T> Debounce<T> {
    /// Creates a new idle [`Debounce`] with the provided `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Indicates whether a value is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedules the provided `value`, restarting the timer.
    ///
    /// Returns the pending value it replaces, if any.
    ///
    /// # Panics
    ///
    /// If called outside of a [`tokio`] runtime.
    pub fn schedule(&mut self, value: T) -> Option<T> {
        self.pending
            .replace((value, Box::pin(time::sleep(self.delay))))
            .map(|(replaced, _)| replaced)
    }

    /// Cancels the pending value, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Waits for the pending value to become ready and takes it.
    ///
    /// Never resolves while nothing is pending.
    ///
    /// # Cancel safety
    ///
    /// This method is cancel safe: dropping its [`Future`] keeps the pending
    /// value and its timer intact.
    pub async fn ready(&mut self) -> T {
        loop {
            if let Some((_, timer)) = &mut self.pending {
                timer.as_mut().await;
            } else {
                future::pending::<()>().await;
            }
            if let Some((value, _)) = self.pending.take() {
                return value;
            }
        }
    }
}
