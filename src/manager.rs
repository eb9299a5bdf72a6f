// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Manager`] owns the record store, the per-toast phase timers and the
//! completion callbacks. It is an explicit value held in the host
//! application's state (no global singleton), mutated through [`Message`]s
//! in the host's `update`, and driven by a periodic tick subscription while
//! toasts are on screen.
//!
//! All operations are synchronous and infallible: unknown ids, repeated
//! dismissals and timer races against manual dismissal are absorbed as
//! no-ops. Dropping the manager cancels every outstanding timer.

use crate::config::Defaults;
use crate::projector;
use crate::record::{
    CloseCallback, Expiry, Phase, Position, ToastDefinition, ToastId, ToastRecord,
};
use crate::store::Store;
use crate::timer::TimerController;
use iced::{time, Subscription};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Tick period while toasts are active. Short enough that the
/// `Initial -> Entering` transition reads as the next rendering opportunity.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Request dismissal of a specific toast (close button, host code).
    Dismiss(ToastId),
    /// Periodic tick driving phase transitions.
    Tick(Instant),
}

/// Owns and drives every live toast.
pub struct Manager {
    store: Store,
    timers: TimerController,
    /// Completion callbacks keyed by id, taken out exactly once at removal.
    /// Duplicate explicit ids stack their callbacks under one key.
    callbacks: HashMap<ToastId, Vec<CloseCallback>>,
    defaults: Defaults,
}

impl Manager {
    /// Creates a manager with the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(Defaults::default())
    }

    /// Creates a manager with explicit fallback configuration.
    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            store: Store::new(),
            timers: TimerController::new(),
            callbacks: HashMap::new(),
            defaults,
        }
    }

    /// Read-only snapshot of the manager-wide defaults.
    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Shows a toast, returning its resolved id.
    ///
    /// Unset definition fields fall back to the manager defaults. The record
    /// starts in `Initial` phase and becomes visible on the next tick.
    pub fn show(&mut self, definition: ToastDefinition) -> ToastId {
        let ToastDefinition {
            id,
            title,
            description,
            variant,
            expiry,
            animation,
            position,
            on_close,
        } = definition;

        let id = id.unwrap_or_else(ToastId::generate);
        let record = ToastRecord {
            id: id.clone(),
            title,
            description,
            variant: variant.unwrap_or(self.defaults.variant),
            expiry: expiry.unwrap_or_else(|| self.defaults.expiry()),
            animation: animation.unwrap_or(self.defaults.animation),
            position: position.unwrap_or(self.defaults.position),
            // Stamped by the store on insert.
            created_at: Instant::now(),
            seq: 0,
            phase: Phase::Initial,
            dismissed: false,
        };

        self.store.insert(record);
        self.timers.schedule_enter(&id, Instant::now());
        if let Some(callback) = on_close {
            self.callbacks.entry(id.clone()).or_default().push(callback);
        }

        log::debug!("toast {id} shown");
        id
    }

    /// Flags a toast as dismissed; it transitions out on the next tick.
    ///
    /// Idempotent: dismissing twice, or dismissing an unknown id, is a no-op.
    pub fn dismiss(&mut self, id: &ToastId) {
        if self.store.mark_dismissed(id) {
            log::debug!("toast {id} dismissed");
        }
    }

    /// Dismisses every currently active toast.
    ///
    /// Toasts shown after this call are unaffected.
    pub fn clear_all(&mut self) {
        if !self.store.is_empty() {
            log::debug!("dismissing all {} active toasts", self.store.len());
        }
        self.store.mark_all_dismissed();
    }

    /// Returns the first active record with `id`, if any.
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.store.get(id)
    }

    /// Iterates over all active records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ToastRecord> {
        self.store.iter()
    }

    /// Number of active toasts.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.store.len()
    }

    /// Whether any toast is active. Useful for gating the tick subscription.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.store.is_empty()
    }

    /// Active records partitioned by position and ordered for display.
    ///
    /// The returned borrows are read-only; the display surface never mutates
    /// records.
    #[must_use]
    pub fn grouped(&self) -> Vec<(Position, Vec<&ToastRecord>)> {
        projector::by_position(&self.store)
    }

    /// Applies every phase transition due at `now`.
    ///
    /// Each record advances at most one phase per tick:
    /// `Initial -> Entering` on the first tick after insertion,
    /// `-> Exiting` on expiry or dismissal (dismissal cancels a pending
    /// expiry deadline), and removal once the exit animation has played.
    /// Completion callbacks fire exactly once, at removal.
    pub fn tick(&mut self, now: Instant) {
        // Due transitions are collected before anything mutates, keyed by id
        // (duplicate explicit ids move in lockstep).
        let mut to_enter: Vec<(ToastId, Expiry)> = Vec::new();
        let mut to_exit: Vec<(ToastId, Duration)> = Vec::new();
        let mut to_remove: Vec<ToastId> = Vec::new();

        for record in self.store.iter() {
            match record.phase {
                Phase::Initial => {
                    if record.dismissed {
                        push_unique(&mut to_exit, record.id.clone(), || {
                            record.animation.exit_duration()
                        });
                    } else if self.timers.enter_due(&record.id, now) {
                        push_unique(&mut to_enter, record.id.clone(), || record.expiry);
                    }
                }
                Phase::Entering => {
                    if record.dismissed || self.timers.expire_due(&record.id, now) {
                        push_unique(&mut to_exit, record.id.clone(), || {
                            record.animation.exit_duration()
                        });
                    }
                }
                Phase::Exiting => {
                    if self.timers.remove_due(&record.id, now) && !to_remove.contains(&record.id) {
                        to_remove.push(record.id.clone());
                    }
                }
            }
        }

        for (id, expiry) in to_enter {
            self.store.advance_phase(&id, Phase::Entering);
            self.timers.arm_expiry(&id, now, expiry);
            log::trace!("toast {id} entering");
        }

        for (id, exit_delay) in to_exit {
            self.store.advance_phase(&id, Phase::Exiting);
            self.timers.arm_removal(&id, now + exit_delay);
            log::trace!("toast {id} exiting");
        }

        for id in to_remove {
            if let Some(callbacks) = self.callbacks.remove(&id) {
                for callback in callbacks {
                    callback();
                }
            }
            self.store.remove(&id);
            self.timers.cancel(&id);
            log::debug!("toast {id} removed");
        }
    }

    /// Handles a toast message from the host's `update`.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Periodic tick subscription, armed only while toasts are active.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.store.is_empty() {
            Subscription::none()
        } else {
            time::every(TICK_INTERVAL).map(Message::Tick)
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("active", &self.store.len())
            .field("pending_callbacks", &self.callbacks.len())
            .field("defaults", &self.defaults)
            .finish()
    }
}

fn push_unique<T>(list: &mut Vec<(ToastId, T)>, id: ToastId, value: impl FnOnce() -> T) {
    if !list.iter().any(|(existing, _)| existing == &id) {
        list.push((id, value()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Animation, Variant};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn tick_all(manager: &mut Manager, from: Instant, offsets_ms: &[u64]) {
        for &ms in offsets_ms {
            manager.tick(from + Duration::from_millis(ms));
        }
    }

    #[test]
    fn show_resolves_unset_fields_from_defaults() {
        let defaults = Defaults {
            duration_ms: 2000,
            animation: Animation::Scale,
            position: Position::BottomLeft,
            variant: Variant::Info,
        };
        let mut manager = Manager::with_defaults(defaults);

        let id = manager.show(ToastDefinition::new().with_title("hello"));
        let record = manager.get(&id).unwrap();

        assert_eq!(record.variant(), Variant::Info);
        assert_eq!(record.animation(), Animation::Scale);
        assert_eq!(record.position(), Position::BottomLeft);
        assert_eq!(record.expiry(), Expiry::after_ms(2000));
        assert_eq!(record.phase(), Phase::Initial);
        assert!(!record.dismissed());
    }

    #[test]
    fn per_call_values_override_defaults() {
        let mut manager = Manager::new();
        let id = manager.show(
            ToastDefinition::new()
                .with_variant(Variant::Error)
                .with_position(Position::BottomCenter)
                .with_expiry(Expiry::Never),
        );
        let record = manager.get(&id).unwrap();

        assert_eq!(record.variant(), Variant::Error);
        assert_eq!(record.position(), Position::BottomCenter);
        assert_eq!(record.expiry(), Expiry::Never);
    }

    #[test]
    fn show_returns_caller_supplied_id() {
        let mut manager = Manager::new();
        let id = manager.show(ToastDefinition::new().with_id("my-toast"));
        assert_eq!(id.as_str(), "my-toast");
        assert!(manager.get(&id).is_some());
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut manager = Manager::new();
        manager.show(ToastDefinition::new());
        manager.dismiss(&ToastId::from("missing"));
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn record_enters_on_first_tick() {
        let mut manager = Manager::new();
        let id = manager.show(ToastDefinition::new());
        assert_eq!(manager.get(&id).unwrap().phase(), Phase::Initial);

        manager.tick(Instant::now());
        assert_eq!(manager.get(&id).unwrap().phase(), Phase::Entering);
    }

    #[test]
    fn dismissal_supersedes_pending_expiry() {
        let mut manager = Manager::new();
        let id = manager.show(ToastDefinition::new().with_expiry(Expiry::after_ms(1000)));

        let t0 = Instant::now();
        manager.tick(t0);
        manager.dismiss(&id);
        manager.tick(t0 + Duration::from_millis(10));
        assert_eq!(manager.get(&id).unwrap().phase(), Phase::Exiting);

        // Ticking past the original expiry deadline must not act on the
        // already-exiting record, and removal happens exactly once.
        tick_all(&mut manager, t0, &[1000, 1100, 2000]);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn callback_fires_once_on_natural_expiry() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let mut manager = Manager::new();
        manager.show(
            ToastDefinition::new()
                .with_expiry(Expiry::after_ms(100))
                .with_on_close(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        );

        let t0 = Instant::now();
        tick_all(&mut manager, t0, &[0, 100, 320, 500, 1000]);

        assert_eq!(manager.active_count(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn callback_fires_once_when_dismissed_before_expiry() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let mut manager = Manager::new();
        let id = manager.show(
            ToastDefinition::new()
                .with_expiry(Expiry::after_ms(5000))
                .with_on_close(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        );

        let t0 = Instant::now();
        manager.tick(t0);
        manager.dismiss(&id);
        // Dismissal exit, removal, then ticks past the old expiry deadline.
        tick_all(&mut manager, t0, &[50, 270, 5000, 6000]);

        assert_eq!(manager.active_count(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_all_spares_later_toasts() {
        let mut manager = Manager::new();
        manager.show(ToastDefinition::new().with_title("a"));
        manager.show(ToastDefinition::new().with_title("b"));
        manager.clear_all();
        let late = manager.show(ToastDefinition::new().with_title("c"));

        assert!(!manager.get(&late).unwrap().dismissed());
        assert_eq!(
            manager.records().filter(|r| r.dismissed()).count(),
            2
        );
    }

    #[test]
    fn handle_message_routes_dismiss() {
        let mut manager = Manager::new();
        let id = manager.show(ToastDefinition::new());
        manager.handle_message(&Message::Dismiss(id.clone()));
        assert!(manager.get(&id).unwrap().dismissed());
    }

    #[test]
    fn tick_on_empty_manager_is_a_noop() {
        let mut manager = Manager::new();
        manager.tick(Instant::now());
        assert!(!manager.has_toasts());
    }
}
