use std::time::{Duration, Instant};

/// Delay between the last keystroke and the search being applied
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Cancel-and-restart debouncer.
///
/// Scheduling a value replaces any pending one and restarts the delay, so only the most
/// recent value is ever released. Time is passed in explicitly; the caller polls from its
/// event loop.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Schedule `value`, cancelling whatever was pending
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Release the pending value if its delay has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Release the pending value immediately, ignoring the delay
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending value is due, if any
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|(_, deadline)| deadline.saturating_duration_since(now))
    }
}
