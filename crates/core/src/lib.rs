//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the kana typing drill. It has no
//! dependencies on terminals or I/O, which makes it:
//!
//! - **Deterministic**: randomness is injected through [`RandomSource`]
//! - **Testable**: time is a plain `u64` passed in by the caller
//! - **Portable**: the same engine drives the terminal binary and the tests
//!
//! # Module Structure
//!
//! - [`kana`]: glyph/romaji tables and subset selection
//! - [`falling`]: one kana in flight and the spawner
//! - [`session`]: session configuration and mutable state
//! - [`engine`]: tick, input and delayed-transition handlers
//! - [`scheduler`]: priority queue of deferred events
//! - [`game`]: driver tying state, scheduler and rng to one clock
//! - [`menu`]: pre-session configuration state machine
//! - [`snapshot`]: read-only render query
//!
//! # Example
//!
//! ```
//! use kana_drop_core::{Game, SequenceRng, SessionConfig};
//! use kana_drop_core::types::{GameEvent, KanaScript};
//!
//! // Index 5 of the plain hiragana table is "ka".
//! let cfg = SessionConfig::new(KanaScript::Hiragana, false, 1, 4);
//! let mut game = Game::start(cfg, SequenceRng::new(vec![5]));
//!
//! game.advance(300);
//! game.dispatch(GameEvent::TextInput("k".into()));
//! game.dispatch(GameEvent::TextInput("a".into()));
//!
//! assert_eq!(game.state().correct(), 1);
//! assert_eq!(game.state().points(), 100);
//! ```

pub mod engine;
pub mod falling;
pub mod game;
pub mod kana;
pub mod menu;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod snapshot;

pub use kana_drop_types as types;

// Re-export commonly used types for convenience
pub use engine::{handle_event, Schedules};
pub use falling::FallingKana;
pub use game::Game;
pub use kana::{select_set, Kana};
pub use menu::{MenuAction, MenuSection, MenuState};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scheduler::Scheduler;
pub use session::{SessionConfig, SessionState};
pub use snapshot::{GameSnapshot, KanaSnapshot};
