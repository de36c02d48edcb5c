//! Shared constants for the canvas crate.

// ── Palette ─────────────────────────────────────────────────────

/// Default palette, in display order.
pub const DEFAULT_COLORS: [&str; 5] = ["#ff4500", "#00cc78", "#2450a5", "#fed734", "#f9fafc"];

// ── Grid ────────────────────────────────────────────────────────

/// Default grid width in cells.
pub const DEFAULT_WIDTH: usize = 25;

/// Default grid height in cells.
pub const DEFAULT_HEIGHT: usize = 25;

/// Largest accepted `width * height`.
pub const MAX_CELLS: usize = 1 << 20;

/// Rendered size of one tile, in CSS pixels.
pub const DEFAULT_TILE_SIZE_PX: u32 = 20;

// ── Timing ──────────────────────────────────────────────────────

/// Minimum wait between two accepted placements.
pub const DEFAULT_COOLDOWN_MS: u64 = 3000;

/// Countdown refresh period, kept just under one second.
pub const DEFAULT_TICK_MS: u64 = 990;

/// How long the cooldown notice stays visible after the last rejection.
pub const DEFAULT_NOTICE_MS: u64 = DEFAULT_COOLDOWN_MS;

/// Milliseconds per displayed countdown second.
pub const MS_PER_SECOND: u64 = 1000;
