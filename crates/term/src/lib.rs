//! Terminal rendering for the kana drill.
//!
//! Frames are drawn into a plain [`FrameBuffer`] by [`GameView`] and flushed
//! to the terminal by [`TerminalRenderer`] as a diff against the previous
//! frame. Nothing here mutates session state.

pub mod fb;
pub mod frame_throttle;
pub mod game_view;
pub mod renderer;

pub use kana_drop_core as core;
pub use kana_drop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_throttle::FrameThrottle;
pub use game_view::{final_score_line, FieldLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
