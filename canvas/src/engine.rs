use tracing::{debug, info};

use crate::cell::{Cell, CellPos};
use crate::clock::{Clock, Millis};
use crate::color::Color;
use crate::config::{BoardConfig, ConfigError};
use crate::cooldown::{Cooldown, Countdown, Tick, format_seconds};
use crate::notice::CooldownNotice;
use crate::palette::{Palette, PaletteError};
use crate::timer::{TimerKind, TimerToken};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A placement passed the gate and `pos` now shows `color`.
    Placed { pos: CellPos, color: Color },
    /// A placement was refused because the cooldown is still running.
    Rejected { pos: CellPos, remaining_ms: Millis },
    /// The palette selection moved to this color.
    SelectionChanged(Color),
    NoticeShown,
    NoticeHidden,
    /// New countdown label; `None` clears it.
    CountdownText(Option<String>),
    /// Run a one-shot timer and call `on_timer(token)` after `delay_ms`.
    ScheduleTimeout { token: TimerToken, delay_ms: Millis },
    /// Call `on_timer(token)` every `every_ms` until cancelled.
    ScheduleInterval { token: TimerToken, every_ms: Millis },
    /// Drop the pending timer of this kind, if any.
    CancelTimer(TimerKind),
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("cell {0} is outside the board")]
    OutOfBounds(CellPos),
}

/// The board: grid, palette, cooldown gate, notice, and countdown.
///
/// Holds no DOM or timer handles, so it can be driven entirely from tests.
/// Every mutating call returns the [`Action`]s the host has to carry out.
pub struct BoardCore<C: Clock> {
    config: BoardConfig,
    cells: Vec<Cell>,
    palette: Palette,
    notice: CooldownNotice,
    cooldown: Cooldown,
    countdown: Countdown,
    clock: C,
}

impl<C: Clock> BoardCore<C> {
    /// Validate `config` and lay out `width * height` blank cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] when the configuration is invalid.
    pub fn new(config: BoardConfig, clock: C) -> Result<Self, BoardError> {
        config.validate()?;
        let palette = config.palette().map_err(ConfigError::from)?;
        let blank = config.cell_color_in(&palette).map_err(ConfigError::from)?;

        let mut cells = Vec::with_capacity(config.cell_count());
        for row in 0..config.height {
            for col in 0..config.width {
                cells.push(Cell::new(CellPos::new(row, col), blank.clone()));
            }
        }

        Ok(Self {
            notice: CooldownNotice::new(config.notice_ms),
            cooldown: Cooldown::new(config.cooldown_ms),
            countdown: Countdown::new(),
            config,
            cells,
            palette,
            clock,
        })
    }

    // --- Input events ---

    /// A cell was clicked: place the selected color if the cooldown allows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a position outside the grid.
    pub fn activate_cell(&mut self, pos: CellPos) -> Result<Vec<Action>, BoardError> {
        let index = self.index_of(pos)?;
        let now = self.clock.now_ms();
        let mut actions = Vec::new();

        if !self.cooldown.is_ready_at(now) {
            let remaining_ms = self.cooldown.remaining_ms_at(now);
            info!(row = pos.row, col = pos.col, remaining_ms, "placement rejected: cooldown active");
            actions.push(Action::Rejected { pos, remaining_ms });
            self.show_notice(&mut actions);
            return Ok(actions);
        }

        let color = self.palette.selected_color().clone();
        self.cells[index].set_color(color.clone());
        self.cooldown.record_at(now);
        debug!(row = pos.row, col = pos.col, %color, "placement accepted");
        actions.push(Action::Placed { pos, color });

        if self.countdown.is_running() {
            actions.push(Action::CancelTimer(TimerKind::CountdownTick));
        }
        let token = self.countdown.start(self.cooldown.remaining_seconds_at(now));
        actions.push(Action::CountdownText(self.countdown.text().map(str::to_owned)));
        actions.push(Action::ScheduleInterval { token, every_ms: self.config.tick_ms });
        Ok(actions)
    }

    /// A palette swatch was clicked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Palette`] when `color` is not in the palette;
    /// the selection is left unchanged.
    pub fn select_color(&mut self, color: &Color) -> Result<Vec<Action>, BoardError> {
        self.palette.select_color(color)?;
        Ok(vec![Action::SelectionChanged(color.clone())])
    }

    /// Hide the notice now and drop its pending auto-hide.
    pub fn hide_notice(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.notice.is_hide_pending() {
            actions.push(Action::CancelTimer(TimerKind::NoticeHide));
        }
        if self.notice.is_visible() {
            actions.push(Action::NoticeHidden);
        }
        self.notice.hide();
        actions
    }

    /// A timer scheduled through an earlier action fired.
    ///
    /// Superseded timers produce no actions.
    pub fn on_timer(&mut self, token: TimerToken) -> Vec<Action> {
        match token.kind {
            TimerKind::NoticeHide => {
                if self.notice.on_timer(token) {
                    debug!("cooldown notice hidden");
                    vec![Action::NoticeHidden]
                } else {
                    Vec::new()
                }
            }
            TimerKind::CountdownTick => {
                let seconds = self.cooldown.remaining_seconds_at(self.clock.now_ms());
                match self.countdown.on_tick(token, seconds) {
                    Tick::Stale => Vec::new(),
                    Tick::Updated(text) => vec![Action::CountdownText(Some(text))],
                    Tick::Finished => {
                        debug!("countdown finished");
                        vec![
                            Action::CountdownText(Some(format_seconds(0))),
                            Action::CountdownText(None),
                            Action::CancelTimer(TimerKind::CountdownTick),
                        ]
                    }
                }
            }
        }
    }

    fn show_notice(&mut self, actions: &mut Vec<Action>) {
        if self.notice.is_hide_pending() {
            actions.push(Action::CancelTimer(TimerKind::NoticeHide));
        }
        let token = self.notice.show();
        actions.push(Action::NoticeShown);
        actions.push(Action::ScheduleTimeout { token, delay_ms: self.notice.delay_ms() });
    }

    fn index_of(&self, pos: CellPos) -> Result<usize, BoardError> {
        if pos.row >= self.config.height || pos.col >= self.config.width {
            return Err(BoardError::OutOfBounds(pos));
        }
        Ok(pos.row * self.config.width + pos.col)
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.config.height
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        match self.index_of(pos) {
            Ok(index) => self.cells.get(index),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn notice_visible(&self) -> bool {
        self.notice.is_visible()
    }

    #[must_use]
    pub fn countdown_text(&self) -> Option<&str> {
        self.countdown.text()
    }

    /// Milliseconds until the next placement is allowed.
    #[must_use]
    pub fn remaining_ms(&self) -> Millis {
        self.cooldown.remaining_ms_at(self.clock.now_ms())
    }

    #[must_use]
    pub fn is_cooling(&self) -> bool {
        self.remaining_ms() > 0
    }
}
