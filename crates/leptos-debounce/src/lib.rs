//! Leptos Debounce Utilities
//!
//! Trailing-edge debounce for input handlers and a request sequencer that
//! lets async handlers drop responses superseded by a newer request.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

/// Something that can run a callback after a delay.
///
/// Dropping the returned handle must cancel the callback if it has not run yet.
pub trait Timer {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timer backed by `setTimeout`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, callback)
    }
}

/// Trailing debounce: only the last call within `delay_ms` of inactivity runs.
///
/// Every call cancels the pending one and restarts the timer.
pub struct Debouncer<T: Timer = BrowserTimer> {
    timer: T,
    delay_ms: u32,
    pending: Rc<RefCell<Option<T::Handle>>>,
}

impl<T: Timer + Clone> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            timer: self.timer.clone(),
            delay_ms: self.delay_ms,
            pending: Rc::clone(&self.pending),
        }
    }
}

impl Debouncer<BrowserTimer> {
    pub fn new(delay_ms: u32) -> Self {
        Self::with_timer(BrowserTimer, delay_ms)
    }
}

impl<T: Timer> Debouncer<T> {
    pub fn with_timer(timer: T, delay_ms: u32) -> Self {
        Self {
            timer,
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Schedule `f`, replacing whatever was pending
    pub fn call(&self, f: impl FnOnce() + 'static) {
        let handle = self.timer.schedule(self.delay_ms, Box::new(f));
        // The old handle is dropped here, which cancels it.
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Create a browser debouncer owned by the current reactive owner.
///
/// The pending call is cancelled when the owner is cleaned up.
pub fn use_debounce(delay_ms: u32) -> StoredValue<Debouncer, LocalStorage> {
    let debouncer = StoredValue::new_local(Debouncer::new(delay_ms));
    on_cleanup(move || {
        debouncer.try_with_value(|d| d.cancel());
    });
    debouncer
}

/// Ticket handed out by a [`Sequencer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Monotonic request counter for one logical channel (e.g. "idea list").
///
/// Take a ticket before starting a request and check it before applying the
/// response; anything but the latest ticket is stale.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    latest: Arc<AtomicU64>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }
}
