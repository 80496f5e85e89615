/// Trailing-edge throttle driven by a host-supplied clock.
///
/// The first notification arms a deadline `interval` milliseconds later;
/// notifications arriving while a deadline is pending are coalesced into
/// it. Once the host polls at or after the deadline the throttle fires once
/// and disarms.
#[derive(Debug, Clone, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    deadline: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            deadline: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Timestamp at which the pending call fires, if one is armed.
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Record a notification at `now_ms`. Returns `true` if this call armed
    /// a new deadline. A non-finite timestamp is ignored.
    pub fn notify(&mut self, now_ms: f64) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        if !now_ms.is_finite() {
            tracing::debug!(now_ms, "ignoring notification with unusable timestamp");
            return false;
        }
        let deadline = now_ms + self.interval_ms;
        tracing::trace!(now_ms, deadline, "throttle armed");
        self.deadline = Some(deadline);
        true
    }

    /// Returns `true` exactly once per armed deadline, on the first poll at
    /// or after it.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                tracing::trace!(now_ms, deadline, "throttle fired");
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending call without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
