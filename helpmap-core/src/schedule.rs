//! Repeating-timer seam used by the carousel autoplay.
//!
//! Browsers provide `setInterval`; tests and the tester CLI use
//! [`VirtualScheduler`], a deterministic clock that only moves when asked.

use std::fmt::Debug;
use std::time::Duration;

/// Source of repeating callbacks.
///
/// The scheduler only books and cancels intervals. Delivering a fired
/// interval back to its owner is the caller's job, which keeps the owner free
/// of self-references.
pub trait Scheduler {
    type Handle: Copy + Eq + Debug;

    /// Book a repeating interval. Returns `None` when the platform refuses.
    fn start_interval(&mut self, period: Duration) -> Option<Self::Handle>;

    /// Cancel a previously booked interval. Unknown handles are ignored.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Handle issued by [`VirtualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Interval {
    id: TimerId,
    period_ms: u64,
    next_due_ms: u64,
}

/// Deterministic millisecond clock with repeating intervals.
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now_ms: u64,
    next_id: u64,
    intervals: Vec<Interval>,
    started: usize,
    cancelled: usize,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of intervals currently booked.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_active(&self, id: TimerId) -> bool {
        self.intervals.iter().any(|interval| interval.id == id)
    }

    /// Total intervals ever booked.
    #[must_use]
    pub const fn started_total(&self) -> usize {
        self.started
    }

    /// Total intervals ever cancelled.
    #[must_use]
    pub const fn cancelled_total(&self) -> usize {
        self.cancelled
    }

    /// Due time of the next fire, if any interval is booked.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.intervals.iter().map(|i| i.next_due_ms).min()
    }

    /// Pop the earliest fire due at or before `deadline_ms`.
    ///
    /// The clock moves to the fire time and the interval is rebooked one
    /// period later. Ties fire in booking order.
    pub fn pop_due(&mut self, deadline_ms: u64) -> Option<TimerId> {
        let idx = self
            .intervals
            .iter()
            .enumerate()
            .filter(|(_, interval)| interval.next_due_ms <= deadline_ms)
            .min_by_key(|(_, interval)| (interval.next_due_ms, interval.id))
            .map(|(idx, _)| idx)?;
        let interval = &mut self.intervals[idx];
        self.now_ms = interval.next_due_ms;
        interval.next_due_ms += interval.period_ms;
        Some(interval.id)
    }

    /// Move the clock forward to `deadline_ms` without firing anything.
    ///
    /// Callers drain [`Self::pop_due`] first; this only settles the clock.
    pub fn settle_at(&mut self, deadline_ms: u64) {
        self.now_ms = self.now_ms.max(deadline_ms);
    }

    /// Advance by `ms`, returning every fire in order.
    ///
    /// Use this when nothing reacts to the fires by rebooking timers; owners
    /// that do react should drain [`Self::pop_due`] themselves.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerId> {
        let deadline = self.now_ms + ms;
        let mut fired = Vec::new();
        while let Some(id) = self.pop_due(deadline) {
            fired.push(id);
        }
        self.settle_at(deadline);
        fired
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = TimerId;

    fn start_interval(&mut self, period: Duration) -> Option<TimerId> {
        let period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX).max(1);
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.started += 1;
        self.intervals.push(Interval {
            id,
            period_ms,
            next_due_ms: self.now_ms.saturating_add(period_ms),
        });
        Some(id)
    }

    fn cancel(&mut self, handle: TimerId) {
        let before = self.intervals.len();
        self.intervals.retain(|interval| interval.id != handle);
        if self.intervals.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_fire_on_their_period() {
        let mut sched = VirtualScheduler::new();
        let id = sched.start_interval(Duration::from_millis(100)).unwrap();
        assert!(sched.advance(99).is_empty());
        assert_eq!(sched.advance(1), vec![id]);
        assert_eq!(sched.advance(250), vec![id, id]);
        assert_eq!(sched.now_ms(), 350);
    }

    #[test]
    fn cancelled_intervals_stop_firing() {
        let mut sched = VirtualScheduler::new();
        let id = sched.start_interval(Duration::from_millis(10)).unwrap();
        sched.cancel(id);
        sched.cancel(id);
        assert_eq!(sched.active_count(), 0);
        assert_eq!(sched.cancelled_total(), 1);
        assert!(sched.advance(100).is_empty());
    }

    #[test]
    fn interval_booked_later_counts_from_booking_time() {
        let mut sched = VirtualScheduler::new();
        sched.advance(37);
        let id = sched.start_interval(Duration::from_millis(50)).unwrap();
        assert_eq!(sched.next_due_ms(), Some(87));
        assert!(sched.is_active(id));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut sched = VirtualScheduler::new();
        sched.start_interval(Duration::ZERO).unwrap();
        assert_eq!(sched.advance(3).len(), 3);
    }
}
