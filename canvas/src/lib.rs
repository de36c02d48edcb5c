//! Board engine for the pixel-placement canvas.
//!
//! This crate owns every rule of the board: the grid of cells, the palette
//! selection, the placement cooldown, the countdown label, and the cooldown
//! notice. It never touches the DOM or a real timer. Input handlers return
//! [`engine::Action`]s and the host (the browser client, or
//! [`sim::Simulation`] in tests) carries them out, feeding timer expirations
//! back through [`engine::BoardCore::on_timer`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::BoardCore`], the placement gate, and the `Action` protocol |
//! | [`cell`] | Grid squares and their coordinates |
//! | [`palette`] | Selectable colors with exactly one active swatch |
//! | [`cooldown`] | Cooldown gate and countdown label |
//! | [`notice`] | Debounced cooldown notice |
//! | [`timer`] | One-timer-per-purpose slots and tokens |
//! | [`clock`] | Injected time sources |
//! | [`config`] | Board configuration and validation |
//! | [`color`] | Palette color tag |
//! | [`sim`] | Deterministic virtual-time host |
//! | [`consts`] | Default palette, grid size, and timings |

pub mod cell;
pub mod clock;
pub mod color;
pub mod config;
pub mod consts;
pub mod cooldown;
pub mod engine;
pub mod notice;
pub mod palette;
pub mod sim;
pub mod timer;
