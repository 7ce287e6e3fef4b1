//! Shared types module - constants and plain data shared by every crate
//!
//! Everything here is pure data with no dependencies, so the same definitions
//! can be used by the engine, the input mapper and the terminal view.
//!
//! # Play Field
//!
//! - **Width**: 55 horizontal slots (indexed 0-54)
//! - **Height**: 15 fall positions; reaching row 15 is a miss
//!
//! # Timing Constants
//!
//! Scheduler delays are logical milliseconds. The fall interval and its
//! accumulator are [`Duration`]s so repeated speed-ups keep sub-millisecond
//! precision:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` / `TICK` | 100ms | Periodic tick quantum |
//! | `BASE_FALL_MS` / `BASE_FALL` | 700ms | Fall interval at level 1 |
//! | `FALL_FLOOR_MS` / `FALL_FLOOR` | 100ms | Fastest possible fall interval |
//! | `SPEED_UP_FACTOR` | 0.85 | Interval multiplier applied per level-up |
//! | `FEEDBACK_DELAY_MS` | 500 | Delay of the clear-correct / clear-feedback transitions |
//!
//! # Progression
//!
//! Every `CORRECTS_PER_LEVEL` hits raises the level by one, shortens the fall
//! interval and adds one more falling kana to the field.
//!
//! # Examples
//!
//! ```
//! use kana_drop_types::{KanaScript, Schedule, GameEvent, TICK_MS, FEEDBACK_DELAY_MS};
//!
//! assert_eq!(KanaScript::from_str("katakana"), Some(KanaScript::Katakana));
//! assert_eq!(Schedule::Tick.delay_ms(), TICK_MS);
//! assert_eq!(Schedule::ClearCorrect.delay_ms(), FEEDBACK_DELAY_MS);
//! assert_eq!(Schedule::ClearFeedback.event(), GameEvent::ClearFeedbackTimer);
//! ```

use std::time::Duration;

/// Number of horizontal slots in the play field
pub const FIELD_WIDTH: u16 = 55;

/// Fall position at which a kana counts as missed
pub const MAX_FALL_HEIGHT: u16 = 15;

/// Periodic tick quantum in milliseconds
pub const TICK_MS: u32 = 100;

/// Fall interval at level 1 (700ms per row)
pub const BASE_FALL_MS: u32 = 700;

/// Fall interval floor (100ms)
pub const FALL_FLOOR_MS: u32 = 100;

/// Fall interval multiplier per level-up
pub const SPEED_UP_FACTOR: f64 = 0.85;

pub const TICK: Duration = Duration::from_millis(TICK_MS as u64);
pub const BASE_FALL: Duration = Duration::from_millis(BASE_FALL_MS as u64);
pub const FALL_FLOOR: Duration = Duration::from_millis(FALL_FLOOR_MS as u64);

/// Delay before a matched kana is cleared or wrong feedback is released
pub const FEEDBACK_DELAY_MS: u32 = 500;

/// Hits needed to advance one level
pub const CORRECTS_PER_LEVEL: u32 = 20;

/// Points awarded per hit
pub const POINTS_PER_CORRECT: u32 = 100;

pub const MIN_START_LEVEL: u32 = 1;
pub const MAX_START_LEVEL: u32 = 10;

pub const MIN_START_LIVES: u32 = 1;
pub const MAX_START_LIVES: u32 = 10;

/// Lives at session start unless configured otherwise
pub const DEFAULT_START_LIVES: u32 = 4;

/// Apply one speed-up step to a fall interval, never going below the floor.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use kana_drop_types::{sped_up_interval, FALL_FLOOR};
///
/// assert_eq!(sped_up_interval(Duration::from_millis(700)), Duration::from_millis(595));
/// assert_eq!(sped_up_interval(Duration::from_millis(595)), Duration::from_micros(505_750));
/// assert_eq!(sped_up_interval(Duration::from_millis(110)), FALL_FLOOR);
/// ```
pub fn sped_up_interval(interval: Duration) -> Duration {
    // Whole nanoseconds, truncated.
    let nanos = (interval.as_nanos() as f64 * SPEED_UP_FACTOR) as u64;
    Duration::from_nanos(nanos).max(FALL_FLOOR)
}

/// Which kana script(s) to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaScript {
    Hiragana,
    Katakana,
    Both,
}

impl KanaScript {
    /// All scripts in menu order
    pub const ALL: [KanaScript; 3] = [KanaScript::Hiragana, KanaScript::Katakana, KanaScript::Both];

    /// Parse script from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use kana_drop_types::KanaScript;
    ///
    /// assert_eq!(KanaScript::from_str("Hiragana"), Some(KanaScript::Hiragana));
    /// assert_eq!(KanaScript::from_str("both"), Some(KanaScript::Both));
    /// assert_eq!(KanaScript::from_str("kanji"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hiragana" => Some(KanaScript::Hiragana),
            "katakana" => Some(KanaScript::Katakana),
            "both" => Some(KanaScript::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KanaScript::Hiragana => "Hiragana",
            KanaScript::Katakana => "Katakana",
            KanaScript::Both => "Both",
        }
    }

    /// Menu cursor index (0-2)
    pub fn index(&self) -> usize {
        match self {
            KanaScript::Hiragana => 0,
            KanaScript::Katakana => 1,
            KanaScript::Both => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Feedback shown to the player after the last resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedbackKind {
    #[default]
    None,
    Correct,
    Wrong,
}

/// Events delivered to the engine, one at a time
///
/// Input events come from the terminal; timer events come back from the
/// scheduler after a [`Schedule`] was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Periodic tick (one `TICK_MS` quantum elapsed)
    Tick,
    /// Typed text (usually one character)
    TextInput(String),
    /// Remove the last typed character
    Backspace,
    /// Delayed transition: remove kana currently shown as correct
    ClearCorrectTimer,
    /// Delayed transition: release the wrong-feedback latch
    ClearFeedbackTimer,
    /// Stop the session
    Quit,
}

/// A deferred event the engine asks the host to deliver later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    Tick,
    ClearCorrect,
    ClearFeedback,
}

impl Schedule {
    /// Delay between the request and delivery
    pub fn delay_ms(&self) -> u32 {
        match self {
            Schedule::Tick => TICK_MS,
            Schedule::ClearCorrect | Schedule::ClearFeedback => FEEDBACK_DELAY_MS,
        }
    }

    /// Event delivered when the delay elapses
    pub fn event(&self) -> GameEvent {
        match self {
            Schedule::Tick => GameEvent::Tick,
            Schedule::ClearCorrect => GameEvent::ClearCorrectTimer,
            Schedule::ClearFeedback => GameEvent::ClearFeedbackTimer,
        }
    }
}
