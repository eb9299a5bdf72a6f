// SPDX-License-Identifier: MPL-2.0
//! Per-toast phase timers.
//!
//! Each live toast owns up to three deadlines: the enter tick (fires on the
//! first tick after insertion so the entering transition is observable), the
//! auto-expiry deadline, and the post-exit removal deadline. The controller
//! only stores and answers deadlines; the [`Manager`](crate::Manager) applies
//! the resulting store mutations on each tick.
//!
//! Deadlines are keyed by id. A caller-supplied duplicate id therefore shares
//! one timer entry and the duplicates move through their lifecycle in
//! lockstep; that coexistence is documented caller responsibility.

use crate::record::{Expiry, ToastId};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Default)]
struct PhaseTimers {
    enter_at: Option<Instant>,
    expire_at: Option<Instant>,
    remove_at: Option<Instant>,
}

/// Holds every pending deadline for every live toast.
///
/// Dropping the controller (manager teardown) cancels everything at once.
#[derive(Debug, Default)]
pub(crate) struct TimerController {
    timers: HashMap<ToastId, PhaseTimers>,
}

impl TimerController {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Arms the enter tick for a freshly inserted toast.
    ///
    /// If the id already has a timer entry (duplicate explicit id), the
    /// existing deadlines are kept and only the enter tick is re-armed.
    pub(crate) fn schedule_enter(&mut self, id: &ToastId, now: Instant) {
        self.timers.entry(id.clone()).or_default().enter_at = Some(now);
    }

    pub(crate) fn enter_due(&self, id: &ToastId, now: Instant) -> bool {
        self.timers
            .get(id)
            .and_then(|t| t.enter_at)
            .is_some_and(|at| now >= at)
    }

    /// Disarms the enter tick and arms auto-expiry.
    ///
    /// `Expiry::Never` leaves no deadline armed: the toast stays in
    /// `Entering` until explicitly dismissed.
    pub(crate) fn arm_expiry(&mut self, id: &ToastId, now: Instant, expiry: Expiry) {
        if let Some(timers) = self.timers.get_mut(id) {
            timers.enter_at = None;
            timers.expire_at = match expiry {
                Expiry::After(duration) => Some(now + duration),
                Expiry::Never => None,
            };
        }
    }

    pub(crate) fn expire_due(&self, id: &ToastId, now: Instant) -> bool {
        self.timers
            .get(id)
            .and_then(|t| t.expire_at)
            .is_some_and(|at| now >= at)
    }

    /// Arms the post-exit removal deadline.
    ///
    /// Any still-pending enter or expiry deadline is cancelled here: once a
    /// toast is exiting, a late expiry firing must not transition it twice.
    pub(crate) fn arm_removal(&mut self, id: &ToastId, at: Instant) {
        if let Some(timers) = self.timers.get_mut(id) {
            timers.enter_at = None;
            timers.expire_at = None;
            timers.remove_at = Some(at);
        }
    }

    pub(crate) fn remove_due(&self, id: &ToastId, now: Instant) -> bool {
        self.timers
            .get(id)
            .and_then(|t| t.remove_at)
            .is_some_and(|at| now >= at)
    }

    /// Cancels every pending deadline for `id`.
    ///
    /// Must be called whenever the toast's records leave the store, so no
    /// stale deadline can act on a removed or reused id.
    pub(crate) fn cancel(&mut self, id: &ToastId) {
        self.timers.remove(id);
    }

    /// Cancels everything. Used when the owning manager is cleared down.
    pub(crate) fn cancel_all(&mut self) {
        self.timers.clear();
    }

    #[cfg(test)]
    pub(crate) fn pending_count(&self) -> usize {
        self.timers.len()
    }
}
