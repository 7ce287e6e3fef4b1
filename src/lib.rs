//! Kana Drop (workspace facade crate).
//!
//! Re-exports the game crates under `kana_drop::{core,input,term,types}` so
//! the binary, benches and integration tests share one import path.

pub use kana_drop_core as core;
pub use kana_drop_input as input;
pub use kana_drop_term as term;
pub use kana_drop_types as types;
