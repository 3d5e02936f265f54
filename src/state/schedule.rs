//! Per-behavior scheduling state: trailing debounce and animation-frame coalescing.

use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Generation counter shared by a debouncer and its pending callbacks. A callback
/// only runs if no newer one was scheduled after it.
#[derive(Default)]
pub struct Latest {
    generation: Cell<u64>,
}

impl Latest {
    /// Wraps `f` so it becomes a no-op once a later callback has been wrapped.
    pub fn wrap(self: Rc<Self>, f: impl FnOnce() + 'static) -> impl FnOnce() + 'static {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        move || {
            if self.generation.get() == generation {
                f();
            }
        }
    }
}

/// Trailing-edge debounce. Holds at most one pending timer; scheduling again
/// drops the previous `Timeout`, which cancels it.
pub struct Debouncer {
    delay_ms: u32,
    latest: Rc<Latest>,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            latest: Rc::new(Latest::default()),
            pending: RefCell::new(None),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, self.latest.clone().wrap(f));
        // replaces (and cancels) any timer that has not fired yet
        self.pending.replace(Some(timeout));
    }
}

/// At most one pending animation-frame recompute.
#[derive(Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// Returns `true` if the caller should request a frame.
    pub fn claim(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_scheduled_callback_runs() {
        let latest = Rc::new(Latest::default());
        let ran = Rc::new(RefCell::new(Vec::new()));
        let first = {
            let ran = ran.clone();
            latest.clone().wrap(move || ran.borrow_mut().push("first"))
        };
        let second = {
            let ran = ran.clone();
            latest.clone().wrap(move || ran.borrow_mut().push("second"))
        };
        // a superseded timer that still fires must do nothing
        first();
        second();
        assert_eq!(*ran.borrow(), vec!["second"]);
    }

    #[test]
    fn callback_runs_when_nothing_newer_is_scheduled() {
        let latest = Rc::new(Latest::default());
        let ran = Rc::new(Cell::new(0));
        let ran_cb = ran.clone();
        latest.clone().wrap(move || ran_cb.set(ran_cb.get() + 1))();
        let ran_cb = ran.clone();
        latest.clone().wrap(move || ran_cb.set(ran_cb.get() + 1))();
        assert_eq!(ran.get(), 2);
    }

    #[test]
    fn burst_claims_one_frame() {
        let gate = FrameGate::default();
        let claimed = (0..10).filter(|_| gate.claim()).count();
        assert_eq!(claimed, 1);
    }

    #[test]
    fn release_allows_next_frame() {
        let gate = FrameGate::default();
        assert!(gate.claim());
        assert!(!gate.claim());
        gate.release();
        assert!(gate.claim());
        assert!(!gate.claim());
    }
}
