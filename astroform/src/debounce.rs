//! Debounced callbacks.
//!
//! A [`Debouncer`] owns one timer. Every [`trigger`](Debouncer::trigger)
//! re-arms it; the callback runs once the timer survives a full quiet
//! period, with the value from the last trigger.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::trace;
use tokio::task::JoinHandle;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    callback: Callback<T>,
    timer: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            timer: None,
        }
    }

    /// Arm the timer with `value`, replacing any pending value.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self, value: T) {
        self.cancel();

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
        trace!("Debounce timer armed for {delay:?}");
    }

    /// Disarm the timer without running the callback.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// Whether a trigger is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("armed", &self.timer.is_some())
            .finish()
    }
}
