use std::time::Duration;

use crate::falling::FallingKana;
use crate::types::{FeedbackKind, FIELD_WIDTH, MAX_FALL_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KanaSnapshot {
    pub glyph: &'static str,
    pub romaji: &'static str,
    pub fall_position: u16,
    pub slot: u16,
    pub marked_correct: bool,
}

impl From<FallingKana> for KanaSnapshot {
    fn from(value: FallingKana) -> Self {
        Self {
            glyph: value.kana.glyph,
            romaji: value.kana.romaji,
            fall_position: value.fall_position,
            slot: value.slot,
            marked_correct: value.marked_correct,
        }
    }
}

/// Read-only view of a session, enough to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub objects: Vec<KanaSnapshot>,
    pub input: String,
    pub lives: u32,
    pub start_lives: u32,
    pub level: u32,
    pub points: u32,
    pub correct: u32,
    pub total: u32,
    pub feedback: FeedbackKind,
    pub feedback_latched: bool,
    pub has_marked: bool,
    pub game_over: bool,
    pub quitting: bool,
    pub field_width: u16,
    pub field_height: u16,
    pub fall_interval: Duration,
}

impl GameSnapshot {
    /// Cheap change detector for render throttling
    pub fn fingerprint(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            input: String::new(),
            lives: 0,
            start_lives: 0,
            level: 1,
            points: 0,
            correct: 0,
            total: 0,
            feedback: FeedbackKind::None,
            feedback_latched: false,
            has_marked: false,
            game_over: false,
            quitting: false,
            field_width: FIELD_WIDTH,
            field_height: MAX_FALL_HEIGHT,
            fall_interval: Duration::ZERO,
        }
    }
}
