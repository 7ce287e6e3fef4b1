//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` events.
//! It maps key events into [`InputEvent`]s, which then translate either into
//! menu navigation or into engine [`crate::types::GameEvent`]s.

pub mod map;

pub use kana_drop_types as types;

pub use map::{map_key, should_quit, InputEvent};
