/// A trailing-edge debouncer driven by adapter-supplied timestamps.
///
/// Every [`schedule`](Self::schedule) supersedes the pending value and re-arms the timer for
/// `quiet_ms` after that call. [`poll`](Self::poll) hands the latest value out exactly once,
/// as soon as the quiet period has elapsed. Intermediate values are dropped, never queued.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debouncer<T> {
    quiet_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Pending<T> {
    value: T,
    due_ms: u64,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    pub fn set_quiet_ms(&mut self, quiet_ms: u64) {
        self.quiet_ms = quiet_ms;
    }

    /// Arms the timer with `value`, cancelling whatever was pending.
    pub fn schedule(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            value,
            due_ms: now_ms.saturating_add(self.quiet_ms),
        });
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value fires, if any.
    pub fn due_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    /// Fires the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.due_ms().is_some_and(|due| now_ms >= due) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Fires the pending value immediately, regardless of the timer.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drops the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
