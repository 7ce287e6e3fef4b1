//! Session module - configuration and the mutable per-session aggregate
//!
//! `SessionState` is owned by exactly one driver and only mutated through the
//! transition functions in [`crate::engine`]. Level and points are derived from
//! the counters on demand and never stored.

use std::time::Duration;

use tracing::debug;

use crate::falling::FallingKana;
use crate::kana::{select_set, Kana};
use crate::rng::RandomSource;
use crate::types::*;

/// Finalized configuration for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub script: KanaScript,
    pub include_voiced: bool,
    pub start_level: u32,
    pub start_lives: u32,
    pub field_width: u16,
    pub max_fall_height: u16,
}

impl SessionConfig {
    /// Create a config, clamping level and lives into their allowed ranges
    pub fn new(script: KanaScript, include_voiced: bool, start_level: u32, start_lives: u32) -> Self {
        Self {
            script,
            include_voiced,
            start_level: start_level.clamp(MIN_START_LEVEL, MAX_START_LEVEL),
            start_lives: start_lives.clamp(MIN_START_LIVES, MAX_START_LIVES),
            field_width: FIELD_WIDTH,
            max_fall_height: MAX_FALL_HEIGHT,
        }
    }

    /// Override the play field geometry (both dimensions at least 1)
    pub fn with_field(mut self, field_width: u16, max_fall_height: u16) -> Self {
        self.field_width = field_width.max(1);
        self.max_fall_height = max_fall_height.max(1);
        self
    }

    /// Fall interval for the starting level: 700ms sped up once per level above 1
    pub fn initial_fall_interval(&self) -> Duration {
        let mut interval = BASE_FALL;
        for _ in 1..self.start_level {
            interval = sped_up_interval(interval);
            if interval == FALL_FLOOR {
                break;
            }
        }
        interval
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(KanaScript::Both, true, MIN_START_LEVEL, DEFAULT_START_LIVES)
    }
}

/// Complete state of one running session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) config: SessionConfig,
    pub(crate) kana_set: Vec<Kana>,
    pub(crate) objects: Vec<FallingKana>,
    pub(crate) input: String,
    pub(crate) correct: u32,
    pub(crate) total: u32,
    pub(crate) lives: u32,
    pub(crate) fall_interval: Duration,
    pub(crate) elapsed_since_fall: Duration,
    pub(crate) feedback: FeedbackKind,
    pub(crate) feedback_latched: bool,
    pub(crate) game_over: bool,
    pub(crate) quitting: bool,
    pub(crate) level_offset: u32,
}

impl SessionState {
    /// Start a session: derive speed from the starting level and pre-spawn
    /// one kana per level.
    pub fn start(config: SessionConfig, rng: &mut impl RandomSource) -> Self {
        let kana_set = select_set(config.script, config.include_voiced);
        let mut state = Self {
            config,
            kana_set,
            objects: Vec::with_capacity(config.start_level as usize),
            input: String::new(),
            correct: 0,
            total: 0,
            lives: config.start_lives,
            fall_interval: config.initial_fall_interval(),
            elapsed_since_fall: Duration::ZERO,
            feedback: FeedbackKind::None,
            feedback_latched: false,
            game_over: false,
            quitting: false,
            level_offset: config.start_level - 1,
        };

        for _ in 0..config.start_level {
            let fk = state.spawn(rng);
            state.objects.push(fk);
        }

        debug!(
            target: "engine",
            script = config.script.as_str(),
            voiced = config.include_voiced,
            level = config.start_level,
            lives = config.start_lives,
            fall_interval = ?state.fall_interval,
            "session_started"
        );
        state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn kana_set(&self) -> &[Kana] {
        &self.kana_set
    }

    pub fn objects(&self) -> &[FallingKana] {
        &self.objects
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    pub fn elapsed_since_fall(&self) -> Duration {
        self.elapsed_since_fall
    }

    pub fn feedback(&self) -> FeedbackKind {
        self.feedback
    }

    pub fn feedback_latched(&self) -> bool {
        self.feedback_latched
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn quitting(&self) -> bool {
        self.quitting
    }

    pub fn level_offset(&self) -> u32 {
        self.level_offset
    }

    /// Current level: one per `CORRECTS_PER_LEVEL` hits, plus the start offset
    pub fn level(&self) -> u32 {
        self.correct / CORRECTS_PER_LEVEL + 1 + self.level_offset
    }

    pub fn points(&self) -> u32 {
        self.correct * POINTS_PER_CORRECT
    }

    /// Whether any kana is frozen showing a match
    pub fn has_marked(&self) -> bool {
        self.objects.iter().any(|fk| fk.marked_correct)
    }

    /// Session no longer accepts ticks or input
    pub fn is_finished(&self) -> bool {
        self.game_over || self.quitting
    }

    pub(crate) fn spawn(&self, rng: &mut impl RandomSource) -> FallingKana {
        FallingKana::spawn(&self.kana_set, self.config.field_width, rng)
    }

    /// Spawn until the live count matches the current level
    pub(crate) fn replenish(&mut self, rng: &mut impl RandomSource) {
        let level = self.level() as usize;
        while self.objects.len() < level {
            let fk = self.spawn(rng);
            self.objects.push(fk);
        }
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        use crate::snapshot::KanaSnapshot;

        out.objects.clear();
        out.objects
            .extend(self.objects.iter().map(|fk| KanaSnapshot::from(*fk)));
        out.input.clear();
        out.input.push_str(&self.input);
        out.lives = self.lives;
        out.start_lives = self.config.start_lives;
        out.level = self.level();
        out.points = self.points();
        out.correct = self.correct;
        out.total = self.total;
        out.feedback = self.feedback;
        out.feedback_latched = self.feedback_latched;
        out.has_marked = self.has_marked();
        out.game_over = self.game_over;
        out.quitting = self.quitting;
        out.field_width = self.config.field_width;
        out.field_height = self.config.max_fall_height;
        out.fall_interval = self.fall_interval;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
