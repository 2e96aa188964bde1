//! One-shot deferred callbacks.
//!
//! DESIGN
//! ======
//! The banner needs exactly one primitive: "run this once after a delay,
//! and maybe cancel it". `BrowserTimers` maps that onto `setTimeout`;
//! `ManualTimers` keeps a virtual clock so tests can step time without
//! sleeping.
//!
//! A `TimerHandle` owns its timer: dropping or cancelling it stops the
//! callback and frees it. `detach` hands the timer over to run on its own,
//! which is what the stacking banner policy uses.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Deferred callback scheduler.
pub trait Timers {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Owning handle for a scheduled callback.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)), detach: None }
    }

    /// Run `detach` when the handle gives up ownership of a live timer.
    #[must_use]
    pub fn on_detach(mut self, detach: impl FnOnce() + 'static) -> Self {
        self.detach = Some(Box::new(detach));
        self
    }

    /// Stop the callback from running. No-op if it already ran.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Let the callback fire without this handle.
    pub fn detach(mut self) {
        self.cancel = None;
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle").finish_non_exhaustive()
    }
}

// =============================================================================
// VIRTUAL CLOCK
// =============================================================================

/// Timers driven by `advance` instead of wall-clock time.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

struct Pending {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Callbacks scheduled and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward by `by`, firing every callback due on the way
    /// in due-time order. Ties fire in scheduling order. Callbacks may
    /// schedule or cancel other timers.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.id))
                    .map(|(idx, _)| idx);
                if let Some(idx) = due {
                    let pending = clock.pending.remove(idx);
                    clock.now = pending.due;
                    Some(pending.callback)
                } else {
                    clock.now = target;
                    None
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

impl fmt::Debug for ManualTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualTimers")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

impl Timers for ManualTimers {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.pending.push(Pending { id, due, callback });

        let weak = Rc::downgrade(&self.clock);
        TimerHandle::new(move || {
            if let Some(clock) = weak.upgrade() {
                clock.borrow_mut().pending.retain(|p| p.id != id);
            }
        })
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `setTimeout`-backed timers.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

#[cfg(feature = "hydrate")]
impl Timers for BrowserTimers {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = gloo_timers::callback::Timeout::new(millis, callback);
        let timeout = Rc::new(RefCell::new(Some(timeout)));
        let owned = Rc::clone(&timeout);

        TimerHandle::new(move || {
            // Cancelling returns the closure; dropping it frees the callback.
            if let Some(timeout) = owned.borrow_mut().take() {
                drop(timeout.cancel());
            }
        })
        .on_detach(move || {
            if let Some(timeout) = timeout.borrow_mut().take() {
                let _id = timeout.forget();
            }
        })
    }
}
