//! Periodic tick scheduling contract
//!
//! The core never owns real timers. The controller registers one periodic
//! cadence with an injected [`Scheduler`] when a run starts and cancels it
//! on stop or reset; whatever drives the scheduler is responsible for
//! actually invoking `tick()` at that cadence. Cancellation is synchronous:
//! once `cancel` returns, no further ticks fire.

use std::time::Duration;

/// Opaque handle identifying one periodic scheduling registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchedulerHandle(u64);

impl SchedulerHandle {
    /// Create a handle from a scheduler-assigned id
    pub fn new(id: u64) -> Self {
        SchedulerHandle(id)
    }

    /// The scheduler-assigned id
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// External collaborator that invokes `tick()` on a fixed cadence.
pub trait Scheduler {
    /// Register a periodic cadence and return its handle. The controller
    /// holds at most one active registration per running simulation.
    fn schedule(&mut self, interval: Duration) -> SchedulerHandle;

    /// Cancel a previously issued registration. Must be synchronous and
    /// immediate; ticks for this handle stop before the call returns.
    fn cancel(&mut self, handle: SchedulerHandle);
}

/// In-process scheduler for tests and headless runs.
///
/// Hands out handles and tracks the active registration while the caller
/// drives `tick()` from a plain loop. The registration and cancellation
/// counters let tests assert the controller's scheduling contract.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    active: Option<(SchedulerHandle, Duration)>,
    scheduled: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Create a scheduler with no registrations
    pub fn new() -> Self {
        ManualScheduler::default()
    }

    /// Handle of the active registration, if any
    pub fn active_handle(&self) -> Option<SchedulerHandle> {
        self.active.map(|(handle, _)| handle)
    }

    /// Interval of the active registration, if any
    pub fn active_interval(&self) -> Option<Duration> {
        self.active.map(|(_, interval)| interval)
    }

    /// Whether a registration is currently active
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Total registrations ever made
    pub fn scheduled_count(&self) -> u64 {
        self.scheduled
    }

    /// Total cancellations of a live handle
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) -> SchedulerHandle {
        let handle = SchedulerHandle::new(self.next_id);
        self.next_id += 1;
        self.scheduled += 1;
        self.active = Some((handle, interval));
        handle
    }

    fn cancel(&mut self, handle: SchedulerHandle) {
        if self.active_handle() == Some(handle) {
            self.active = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_then_cancel_round_trip() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.is_active());

        let handle = scheduler.schedule(Duration::from_secs(1));
        assert!(scheduler.is_active());
        assert_eq!(scheduler.active_handle(), Some(handle));
        assert_eq!(scheduler.active_interval(), Some(Duration::from_secs(1)));

        scheduler.cancel(handle);
        assert!(!scheduler.is_active());
        assert_eq!(scheduler.scheduled_count(), 1);
        assert_eq!(scheduler.cancelled_count(), 1);
    }

    #[test]
    fn cancelling_a_stale_handle_is_ignored() {
        let mut scheduler = ManualScheduler::new();
        let old = scheduler.schedule(Duration::from_millis(500));
        scheduler.cancel(old);

        let current = scheduler.schedule(Duration::from_millis(500));
        scheduler.cancel(old);
        assert!(scheduler.is_active());
        assert_eq!(scheduler.active_handle(), Some(current));
        assert_eq!(scheduler.cancelled_count(), 1);
    }

    #[test]
    fn handles_are_unique_across_registrations() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.schedule(Duration::from_secs(1));
        scheduler.cancel(first);
        let second = scheduler.schedule(Duration::from_secs(1));
        assert_ne!(first, second);
    }
}
