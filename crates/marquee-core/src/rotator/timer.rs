use std::time::Duration;

use tokio::time::Instant;

/// Identifies one scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// "Schedule callback after delay" / "cancel scheduled callback"
pub trait TimerFacility {
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}

/// One-shot deadline timer polled by its owner.
///
/// Holds at most one pending deadline; scheduling again replaces it. Built on
/// `tokio::time::Instant` so paused test clocks apply.
#[derive(Debug, Default)]
pub struct DeadlineTimer {
    next_id: u64,
    pending: Option<(TimerHandle, Instant)>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deadline of the pending callback, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending handle if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.pending {
            Some((handle, deadline)) if deadline <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// [`take_due`](Self::take_due) against the current time
    pub fn poll(&mut self) -> Option<TimerHandle> {
        self.take_due(Instant::now())
    }
}

impl TimerFacility for DeadlineTimer {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}
