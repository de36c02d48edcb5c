#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::clock::Millis;
use crate::timer::{TimerKind, TimerSlot, TimerToken};

/// Transient "wait for the cooldown" banner with debounced auto-hide.
///
/// Every `show` re-arms the single hide timer, so the banner disappears
/// `delay_ms` after the most recent `show`, never earlier.
#[derive(Debug, Clone)]
pub struct CooldownNotice {
    visible: bool,
    delay_ms: Millis,
    hide: TimerSlot,
}

impl CooldownNotice {
    #[must_use]
    pub fn new(delay_ms: Millis) -> Self {
        Self { visible: false, delay_ms, hide: TimerSlot::new(TimerKind::NoticeHide) }
    }

    /// Make the notice visible and return the token for the hide timer the
    /// host must schedule `delay_ms` from now.
    pub fn show(&mut self) -> TimerToken {
        self.visible = true;
        self.hide.arm()
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hide.cancel();
    }

    /// Handle an expired hide timer. Returns `true` when the notice was hidden,
    /// `false` for a superseded timer.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.hide.is_current(token) {
            return false;
        }
        self.hide();
        true
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn delay_ms(&self) -> Millis {
        self.delay_ms
    }

    #[must_use]
    pub fn is_hide_pending(&self) -> bool {
        self.hide.is_armed()
    }
}
