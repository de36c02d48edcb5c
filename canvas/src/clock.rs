//! Time sources for the placement gate.
//!
//! The engine never reads wall-clock time directly. Hosts pass in a [`Clock`]:
//! the browser client reads `Date.now()`, native code uses [`SystemClock`],
//! and tests drive a [`ManualClock`] by hand.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;
use std::rc::Rc;

/// Milliseconds on a host-defined monotonic-enough timeline.
pub type Millis = u64;

pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> Millis;
}

/// Wall-clock time since the Unix epoch.
///
/// Not usable on `wasm32-unknown-unknown`, where `SystemTime` is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(Millis::MAX))
    }
}

/// Hand-driven clock. Clones share the same timeline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: Millis) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    /// Jump to an absolute time. Going backwards is allowed; the gate
    /// treats a negative elapsed time as zero.
    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}
