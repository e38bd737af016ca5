//! Terminal renderer for the warehouse puzzle.
//!
//! Sessions are drawn into a plain [`FrameBuffer`] of styled cells by [`GameView`]
//! and flushed to the terminal by [`TerminalRenderer`]. Board cells are two columns
//! wide to make up for the tall aspect ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_warehouse_core as core;
pub use tui_warehouse_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
