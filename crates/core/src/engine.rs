//! Engine module - the session state machine
//!
//! Every transition takes the session, applies one event and returns the
//! deferred events the host must deliver later. Nothing here blocks, sleeps or
//! reads a clock; the scheduler decides when a requested event fires.
//!
//! # Rules
//!
//! - **Fall-step**: once `elapsed_since_fall` reaches the fall interval,
//!   every kana not marked correct drops one row. Overshoot carries over.
//! - **Miss**: a kana reaching the bottom costs a life and is replaced in
//!   place. One wrong-feedback timer per fall-step at most.
//! - **Hit**: the trimmed, lower-cased input equals a live romaji. The kana is
//!   frozen until the clear-correct timer removes it.
//! - **Wrong by typing**: the input is neither a romaji nor a prefix of one.
//! - **Level-up**: every 20th hit speeds up the fall and adds a kana.

use std::time::Duration;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::rng::RandomSource;
use crate::session::SessionState;
use crate::types::{sped_up_interval, FeedbackKind, GameEvent, Schedule, CORRECTS_PER_LEVEL, FALL_FLOOR, TICK};

/// Deferred events requested by one transition.
pub type Schedules = ArrayVec<Schedule, 3>;

/// Apply one event to the session.
pub fn handle_event(state: &mut SessionState, event: &GameEvent, rng: &mut impl RandomSource) -> Schedules {
    match event {
        GameEvent::Tick => tick(state, rng),
        GameEvent::TextInput(text) => text_input(state, text, rng),
        GameEvent::Backspace => backspace(state),
        GameEvent::ClearCorrectTimer => clear_correct(state, rng),
        GameEvent::ClearFeedbackTimer => clear_feedback(state),
        GameEvent::Quit => quit(state),
    }
}

/// Periodic tick: accumulate time and run a fall-step when due.
pub fn tick(state: &mut SessionState, rng: &mut impl RandomSource) -> Schedules {
    let mut out = Schedules::new();
    if state.is_finished() {
        return out;
    }

    state.elapsed_since_fall += TICK;
    if state.elapsed_since_fall < state.fall_interval {
        out.push(Schedule::Tick);
        return out;
    }
    state.elapsed_since_fall -= state.fall_interval;

    let missed = fall_step(state, rng);

    if missed {
        state.feedback = FeedbackKind::Wrong;
        state.feedback_latched = true;
    }
    if !state.game_over {
        out.push(Schedule::Tick);
    }
    if missed {
        out.push(Schedule::ClearFeedback);
    }
    out
}

/// Advance every unfrozen kana one row. Returns whether any kana was missed.
fn fall_step(state: &mut SessionState, rng: &mut impl RandomSource) -> bool {
    let max_fall_height = state.config.max_fall_height;
    let mut missed = false;

    for i in 0..state.objects.len() {
        if state.objects[i].marked_correct {
            continue;
        }
        if !state.objects[i].fall(max_fall_height) {
            continue;
        }

        debug_assert!(state.lives > 0, "miss observed with no lives left");
        state.lives = state.lives.saturating_sub(1);
        state.total += 1;
        state.input.clear();
        missed = true;

        let replacement = state.spawn(rng);
        let lost = std::mem::replace(&mut state.objects[i], replacement);
        debug!(target: "engine", romaji = lost.kana.romaji, lives = state.lives, "kana_missed");

        if state.lives == 0 {
            state.game_over = true;
            debug!(target: "engine", points = state.points(), correct = state.correct, "game_over");
            break;
        }
    }

    missed
}

/// Typed text: extend the guess and resolve it against the live kana.
pub fn text_input(state: &mut SessionState, text: &str, rng: &mut impl RandomSource) -> Schedules {
    let mut out = Schedules::new();
    if state.is_finished() || state.feedback_latched {
        return out;
    }

    if state.has_marked() {
        start_fresh_guess(state);
    }

    state.input.push_str(text);
    let answer = state.input.trim().to_lowercase();

    if let Some(i) = state.objects.iter().position(|fk| fk.kana.romaji == answer) {
        state.total += 1;
        state.correct += 1;
        state.feedback = FeedbackKind::Correct;
        state.objects[i].marked_correct = true;
        state.elapsed_since_fall = Duration::ZERO;
        debug!(target: "engine", romaji = state.objects[i].kana.romaji, correct = state.correct, "kana_hit");

        if state.correct % CORRECTS_PER_LEVEL == 0 {
            level_up(state, rng);
        }
        out.push(Schedule::ClearCorrect);
    } else if state.objects.iter().any(|fk| fk.kana.romaji.starts_with(answer.as_str())) {
        trace!(target: "engine", input = %state.input, "guess_in_progress");
        state.feedback = FeedbackKind::None;
    } else {
        debug!(target: "engine", input = %state.input, "guess_wrong");
        state.feedback = FeedbackKind::Wrong;
        state.feedback_latched = true;
        state.input.clear();
        out.push(Schedule::ClearFeedback);
    }
    out
}

fn level_up(state: &mut SessionState, rng: &mut impl RandomSource) {
    state.fall_interval = sped_up_interval(state.fall_interval);
    debug_assert!(state.fall_interval >= FALL_FLOOR);
    state.replenish(rng);
    debug!(
        target: "engine",
        level = state.level(),
        fall_interval = ?state.fall_interval,
        kana = state.objects.len(),
        "level_up"
    );
}

/// A keystroke while a match is on display starts a new guess.
fn start_fresh_guess(state: &mut SessionState) {
    state.input.clear();
    for fk in state.objects.iter_mut() {
        fk.marked_correct = false;
    }
}

/// Remove the last typed character.
pub fn backspace(state: &mut SessionState) -> Schedules {
    if state.is_finished() || state.feedback_latched {
        return Schedules::new();
    }

    if state.has_marked() {
        start_fresh_guess(state);
        return Schedules::new();
    }

    if state.input.pop().is_some() {
        state.feedback = FeedbackKind::None;
    }
    Schedules::new()
}

/// Delayed transition: drop matched kana and refill the field.
pub fn clear_correct(state: &mut SessionState, rng: &mut impl RandomSource) -> Schedules {
    state.objects.retain(|fk| !fk.marked_correct);
    state.replenish(rng);
    state.input.clear();
    state.elapsed_since_fall = Duration::ZERO;
    if state.feedback == FeedbackKind::Correct {
        state.feedback = FeedbackKind::None;
    }
    Schedules::new()
}

/// Delayed transition: release the wrong-feedback latch.
pub fn clear_feedback(state: &mut SessionState) -> Schedules {
    if state.feedback_latched {
        state.feedback_latched = false;
        state.feedback = FeedbackKind::None;
    }
    Schedules::new()
}

/// Stop the session: ticks and input are ignored from now on.
pub fn quit(state: &mut SessionState) -> Schedules {
    state.quitting = true;
    Schedules::new()
}
