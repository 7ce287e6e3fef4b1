//! Integration tests for the session driver

use std::time::Duration;

use kana_drop::core::{Game, MenuAction, MenuState, SequenceRng, SessionConfig};
use kana_drop::types::{FeedbackKind, GameEvent, KanaScript};

/// Every spawn is "ka" (plain hiragana index 5) at slot 20.
fn ka_game(level: u32, lives: u32) -> Game<SequenceRng> {
    let cfg = SessionConfig::new(KanaScript::Hiragana, false, level, lives);
    Game::start(cfg, SequenceRng::new(vec![5, 20]))
}

fn type_str<R: kana_drop::core::RandomSource>(game: &mut Game<R>, s: &str) {
    for c in s.chars() {
        game.dispatch(GameEvent::TextInput(c.to_string()));
    }
}

#[test]
fn test_hit_before_first_fall() {
    let mut game = ka_game(1, 4);
    assert_eq!(game.state().fall_interval(), Duration::from_millis(700));
    assert_eq!(game.state().objects().len(), 1);

    game.advance(600);
    assert_eq!(game.state().objects()[0].fall_position, 0);

    type_str(&mut game, "ka");
    let state = game.state();
    assert_eq!(state.correct(), 1);
    assert_eq!(state.total(), 1);
    assert_eq!(state.points(), 100);
    assert_eq!(state.feedback(), FeedbackKind::Correct);
    assert!(state.has_marked());
    assert_eq!(state.elapsed_since_fall(), Duration::ZERO);

    // Marked kana stays put until the clear-correct timer.
    game.advance(499);
    assert!(game.state().has_marked());
    assert_eq!(game.state().input(), "ka");

    game.advance(1);
    let state = game.state();
    assert!(!state.has_marked());
    assert_eq!(state.objects().len(), 1);
    assert_eq!(state.input(), "");
    assert_eq!(state.feedback(), FeedbackKind::None);
}

#[test]
fn test_miss_costs_a_life_and_latches_wrong() {
    let mut game = ka_game(1, 4);

    // Fifteen fall-steps at 700ms each reach the bottom.
    game.advance_to(10_400);
    assert_eq!(game.state().lives(), 4);
    assert_eq!(game.state().objects()[0].fall_position, 14);

    game.advance_to(10_500);
    let state = game.state();
    assert_eq!(state.lives(), 3);
    assert_eq!(state.total(), 1);
    assert_eq!(state.correct(), 0);
    assert_eq!(state.feedback(), FeedbackKind::Wrong);
    assert!(state.feedback_latched());
    assert_eq!(state.objects().len(), 1);
    assert_eq!(state.objects()[0].fall_position, 0);
    assert_eq!(game.scheduler().count(&GameEvent::ClearFeedbackTimer), 1);

    // Typing is ignored while the latch is held.
    game.dispatch(GameEvent::TextInput("k".into()));
    assert_eq!(game.state().input(), "");

    game.advance_to(11_000);
    assert!(!game.state().feedback_latched());
    assert_eq!(game.state().feedback(), FeedbackKind::None);

    game.dispatch(GameEvent::TextInput("k".into()));
    assert_eq!(game.state().input(), "k");
}

#[test]
fn test_last_life_ends_the_session() {
    let mut game = ka_game(1, 1);
    game.advance_to(10_500);

    let state = game.state();
    assert!(state.game_over());
    assert_eq!(state.lives(), 0);
    assert_eq!(game.scheduler().count(&GameEvent::Tick), 0);
    assert_eq!(game.scheduler().count(&GameEvent::ClearFeedbackTimer), 1);

    // Input and time no longer change the board.
    let before = game.snapshot();
    game.dispatch(GameEvent::TextInput("ka".into()));
    game.dispatch(GameEvent::Backspace);
    assert_eq!(game.snapshot().objects, before.objects);
    assert_eq!(game.snapshot().input, before.input);

    game.advance(2_000);
    assert!(game.is_settled());
    assert!(!game.state().feedback_latched());
}

#[test]
fn test_twenty_hits_level_up() {
    let mut game = ka_game(1, 4);
    for i in 1..=20 {
        type_str(&mut game, "ka");
        assert_eq!(game.state().correct(), i);
        game.advance(500);
    }

    let state = game.state();
    assert_eq!(state.level(), 2);
    assert_eq!(state.fall_interval(), Duration::from_millis(595));
    assert_eq!(state.objects().len(), 2);
    assert_eq!(state.points(), 2_000);
    assert_eq!(state.lives(), 4);
}

#[test]
fn test_prefix_keeps_state() {
    let mut game = ka_game(1, 4);
    let requested = game.dispatch(GameEvent::TextInput("k".into()));

    assert!(requested.is_empty());
    assert_eq!(game.state().input(), "k");
    assert_eq!(game.state().feedback(), FeedbackKind::None);
    assert_eq!(game.state().total(), 0);

    // Not a prefix of any live romaji.
    game.dispatch(GameEvent::TextInput("x".into()));
    let state = game.state();
    assert_eq!(state.input(), "");
    assert_eq!(state.feedback(), FeedbackKind::Wrong);
    assert!(state.feedback_latched());
    assert_eq!(state.lives(), 4);
    assert_eq!(state.total(), 0);
}

#[test]
fn test_backspace_edits_guess() {
    let mut game = ka_game(1, 4);
    type_str(&mut game, "kx");
    game.advance(500);

    type_str(&mut game, "k");
    game.dispatch(GameEvent::Backspace);
    assert_eq!(game.state().input(), "");
    game.dispatch(GameEvent::Backspace);
    assert_eq!(game.state().input(), "");

    type_str(&mut game, "ka");
    assert_eq!(game.state().correct(), 1);
}

#[test]
fn test_quit_stops_ticks() {
    let mut game = ka_game(1, 4);
    game.advance(650);
    game.dispatch(GameEvent::Quit);
    game.advance(5_000);

    let state = game.state();
    assert!(state.quitting());
    assert_eq!(state.objects()[0].fall_position, 0);
    assert!(game.is_settled());
}

#[test]
fn test_invariants_hold_over_long_run() {
    let cfg = SessionConfig::new(KanaScript::Both, true, 3, 10);
    let mut game = Game::start(cfg, kana_drop::core::SimpleRng::new(12345));
    let romaji: Vec<&str> = ["ka", "shi", "n", "zu", "po", "a"].to_vec();

    for step in 0..2_000u64 {
        game.advance(100);
        if step % 7 == 0 {
            type_str(&mut game, romaji[(step as usize / 7) % romaji.len()]);
        }
        let state = game.state();
        assert!(state.correct() <= state.total());
        assert!(state.fall_interval() >= Duration::from_millis(100));
        assert!(state.lives() <= 10);
        assert!(state.objects().iter().all(|o| o.fall_position < 15));
        assert!(state.objects().iter().all(|o| o.slot < 55));
        if state.game_over() {
            assert_eq!(state.lives(), 0);
            break;
        }
        assert!(state.objects().len() >= state.level() as usize || state.has_marked());
    }
}

#[test]
fn test_menu_flow_starts_configured_session() {
    let mut menu = MenuState::default();
    menu.apply(MenuAction::Right); // Script
    menu.apply(MenuAction::Down); // Both -> Hiragana
    assert_eq!(menu.apply(MenuAction::Confirm), None); // commit, move to Voiced
    menu.apply(MenuAction::Up); // voiced off
    menu.apply(MenuAction::Right); // Level
    menu.apply(MenuAction::Up); // 2
    menu.apply(MenuAction::Right); // Lives
    menu.apply(MenuAction::Down); // 3
    menu.apply(MenuAction::Right); // Start

    let cfg = menu.apply(MenuAction::Confirm).unwrap();
    assert_eq!(cfg.script, KanaScript::Hiragana);
    assert!(!cfg.include_voiced);
    assert_eq!(cfg.start_level, 2);
    assert_eq!(cfg.start_lives, 3);

    let game = Game::start(cfg, SequenceRng::new(vec![0]));
    let state = game.state();
    assert_eq!(state.kana_set().len(), 46);
    assert_eq!(state.objects().len(), 2);
    assert_eq!(state.level(), 2);
    assert_eq!(state.lives(), 3);
    assert_eq!(state.fall_interval(), Duration::from_millis(595));
}
