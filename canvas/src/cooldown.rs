//! Placement cooldown: the gate itself and the countdown display.
//!
//! DESIGN
//! ======
//! `Cooldown` answers one question: may a placement happen at time `now`?
//! It is Ready until the first accepted placement and then Cooling for
//! `duration_ms` after each one.
//!
//! `Countdown` owns the text shown next to the board while Cooling. It is
//! refreshed by a repeating tick and cleared once the displayed seconds reach
//! zero. Seconds are floored, so the last tick before the gate opens may
//! already read `0s`.

#[cfg(test)]
#[path = "cooldown_test.rs"]
mod cooldown_test;

use crate::clock::Millis;
use crate::consts::MS_PER_SECOND;
use crate::timer::{TimerKind, TimerSlot, TimerToken};

// =============================================================================
// GATE
// =============================================================================

#[derive(Debug, Clone)]
pub struct Cooldown {
    duration_ms: Millis,
    last_accepted: Option<Millis>,
}

impl Cooldown {
    #[must_use]
    pub fn new(duration_ms: Millis) -> Self {
        Self { duration_ms, last_accepted: None }
    }

    #[must_use]
    pub fn duration_ms(&self) -> Millis {
        self.duration_ms
    }

    #[must_use]
    pub fn last_accepted(&self) -> Option<Millis> {
        self.last_accepted
    }

    /// Milliseconds until the gate opens; zero when Ready.
    ///
    /// A clock that moved backwards counts as zero elapsed time.
    #[must_use]
    pub fn remaining_ms_at(&self, now: Millis) -> Millis {
        match self.last_accepted {
            None => 0,
            Some(last) => self.duration_ms.saturating_sub(now.saturating_sub(last)),
        }
    }

    /// Whole seconds left, floored. Never negative.
    #[must_use]
    pub fn remaining_seconds_at(&self, now: Millis) -> u64 {
        self.remaining_ms_at(now) / MS_PER_SECOND
    }

    #[must_use]
    pub fn is_ready_at(&self, now: Millis) -> bool {
        self.remaining_ms_at(now) == 0
    }

    /// Record an accepted placement, entering Cooling.
    pub fn record_at(&mut self, now: Millis) {
        self.last_accepted = Some(now);
    }
}

// =============================================================================
// COUNTDOWN
// =============================================================================

/// Result of feeding a tick into the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// The tick belongs to a superseded countdown.
    Stale,
    /// Display now reads the contained text.
    Updated(String),
    /// Display reached zero and was cleared; the tick is cancelled.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    text: Option<String>,
    tick: TimerSlot,
}

impl Default for Countdown {
    fn default() -> Self {
        Self { text: None, tick: TimerSlot::new(TimerKind::CountdownTick) }
    }
}

impl Countdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `seconds` and re-arm the tick, cancelling any running countdown.
    pub fn start(&mut self, seconds: u64) -> TimerToken {
        self.text = Some(format_seconds(seconds));
        self.tick.arm()
    }

    pub fn on_tick(&mut self, token: TimerToken, remaining_seconds: u64) -> Tick {
        if !self.tick.is_current(token) {
            return Tick::Stale;
        }
        if remaining_seconds == 0 {
            self.tick.cancel();
            self.text = None;
            return Tick::Finished;
        }
        let text = format_seconds(remaining_seconds);
        self.text = Some(text.clone());
        Tick::Updated(text)
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.tick.is_armed()
    }
}

/// Countdown label, e.g. `"3s"`.
#[must_use]
pub fn format_seconds(seconds: u64) -> String {
    format!("{seconds}s")
}
