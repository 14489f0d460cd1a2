//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It avoids widget libraries and
//! instead renders into a framebuffer that is diffed and flushed to the
//! terminal backend.
//!
//! - [`GameView`] is pure: snapshot and overlays in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and writes changed cells only

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hanoi_core as core;
pub use tui_hanoi_engine as engine;
pub use tui_hanoi_leaderboard as leaderboard;
pub use tui_hanoi_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
