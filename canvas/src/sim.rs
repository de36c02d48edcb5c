//! Deterministic host: drives a [`BoardCore`] on virtual time.
//!
//! DESIGN
//! ======
//! `Simulation` plays the role the browser plays in production. It executes
//! the engine's [`Action`]s against a virtual timer table keyed by
//! [`TimerKind`], so a new schedule for a kind always replaces the old one,
//! and it fires due timers in time order while advancing a [`ManualClock`].
//! Every action is recorded with the virtual time it was produced at.

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

use std::collections::BTreeMap;

use crate::cell::CellPos;
use crate::clock::{Clock, ManualClock, Millis};
use crate::color::Color;
use crate::config::BoardConfig;
use crate::engine::{Action, BoardCore, BoardError};
use crate::timer::{TimerKind, TimerToken};

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    token: TimerToken,
    due: Millis,
    every: Option<Millis>,
}

pub struct Simulation {
    clock: ManualClock,
    board: BoardCore<ManualClock>,
    timers: BTreeMap<TimerKind, PendingTimer>,
    log: Vec<(Millis, Action)>,
}

impl Simulation {
    /// Build a board at virtual time `start`.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from [`BoardCore::new`].
    pub fn new(config: BoardConfig, start: Millis) -> Result<Self, BoardError> {
        let clock = ManualClock::new(start);
        let board = BoardCore::new(config, clock.clone())?;
        Ok(Self { clock, board, timers: BTreeMap::new(), log: Vec::new() })
    }

    /// Click a cell at the current virtual time.
    ///
    /// # Errors
    ///
    /// See [`BoardCore::activate_cell`].
    pub fn click(&mut self, pos: CellPos) -> Result<Vec<Action>, BoardError> {
        let actions = self.board.activate_cell(pos)?;
        self.apply(&actions);
        Ok(actions)
    }

    /// Click a palette swatch.
    ///
    /// # Errors
    ///
    /// See [`BoardCore::select_color`].
    pub fn select(&mut self, color: &Color) -> Result<Vec<Action>, BoardError> {
        let actions = self.board.select_color(color)?;
        self.apply(&actions);
        Ok(actions)
    }

    /// Fire every timer due up to and including `target`, then move the clock
    /// to `target`. Moving backwards only sets the clock.
    pub fn advance_to(&mut self, target: Millis) {
        while let Some((kind, timer)) = self.next_due(target) {
            self.clock.set(timer.due.max(self.clock.now_ms()));
            match timer.every {
                Some(every) => {
                    let next = PendingTimer { due: timer.due.saturating_add(every), ..timer };
                    self.timers.insert(kind, next);
                }
                None => {
                    self.timers.remove(&kind);
                }
            }
            let actions = self.board.on_timer(timer.token);
            self.apply(&actions);
        }
        self.clock.set(target);
    }

    pub fn advance_by(&mut self, by: Millis) {
        self.advance_to(self.clock.now_ms().saturating_add(by));
    }

    fn next_due(&self, target: Millis) -> Option<(TimerKind, PendingTimer)> {
        self.timers
            .iter()
            .filter(|(_, t)| t.due <= target)
            .min_by_key(|(kind, t)| (t.due, **kind))
            .map(|(kind, t)| (*kind, *t))
    }

    fn apply(&mut self, actions: &[Action]) {
        let now = self.clock.now_ms();
        for action in actions {
            match action {
                Action::ScheduleTimeout { token, delay_ms } => {
                    let timer = PendingTimer { token: *token, due: now.saturating_add(*delay_ms), every: None };
                    self.timers.insert(token.kind, timer);
                }
                Action::ScheduleInterval { token, every_ms } => {
                    let timer = PendingTimer {
                        token: *token,
                        due: now.saturating_add(*every_ms),
                        every: Some(*every_ms),
                    };
                    self.timers.insert(token.kind, timer);
                }
                Action::CancelTimer(kind) => {
                    self.timers.remove(kind);
                }
                _ => {}
            }
            self.log.push((now, action.clone()));
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn board(&self) -> &BoardCore<ManualClock> {
        &self.board
    }

    #[must_use]
    pub fn now(&self) -> Millis {
        self.clock.now_ms()
    }

    /// Every action seen so far, with the virtual time it was produced at.
    #[must_use]
    pub fn log(&self) -> &[(Millis, Action)] {
        &self.log
    }

    /// Due time of the pending timer of `kind`, if one is scheduled.
    #[must_use]
    pub fn pending_due(&self, kind: TimerKind) -> Option<Millis> {
        self.timers.get(&kind).map(|t| t.due)
    }

    /// Countdown labels in display order; `None` marks a clear.
    #[must_use]
    pub fn countdown_history(&self) -> Vec<(Millis, Option<String>)> {
        self.log
            .iter()
            .filter_map(|(at, action)| match action {
                Action::CountdownText(text) => Some((*at, text.clone())),
                _ => None,
            })
            .collect()
    }

    /// Times at which the notice was hidden.
    #[must_use]
    pub fn notice_hidden_at(&self) -> Vec<Millis> {
        self.log
            .iter()
            .filter(|(_, action)| matches!(action, Action::NoticeHidden))
            .map(|(at, _)| *at)
            .collect()
    }
}
