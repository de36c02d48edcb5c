//! Timer slots: at most one pending timer per purpose.
//!
//! DESIGN
//! ======
//! The engine cannot own real timers, so it asks its host to schedule them
//! via [`Action`](crate::engine::Action)s. Every request carries a
//! [`TimerToken`]. Re-arming a [`TimerSlot`] bumps its generation, which
//! makes every earlier token stale. A host that fails to cancel an old timer
//! therefore cannot corrupt state: the stale expiry is dropped on arrival.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// What a timer is for. Each purpose owns one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// One-shot hide of the cooldown notice.
    NoticeHide,
    /// Repeating countdown refresh.
    CountdownTick,
}

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct TimerSlot {
    kind: TimerKind,
    generation: u64,
    armed: bool,
}

impl TimerSlot {
    #[must_use]
    pub fn new(kind: TimerKind) -> Self {
        Self { kind, generation: 0, armed: false }
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Cancel whatever is pending and hand out a fresh token.
    pub fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        self.armed = true;
        TimerToken { kind: self.kind, generation: self.generation }
    }

    /// Forget the pending timer. Its token becomes stale.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether `token` belongs to the live timer of this slot.
    #[must_use]
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.armed && token.kind == self.kind && token.generation == self.generation
    }
}
