use kana_drop::core::{Game, MenuState, SequenceRng, SessionConfig};
use kana_drop::term::{FrameBuffer, GameView, Rgb, Viewport};
use kana_drop::types::{GameEvent, KanaScript};

fn ka_game(lives: u32) -> Game<SequenceRng> {
    let cfg = SessionConfig::new(KanaScript::Hiragana, false, 1, lives);
    Game::start(cfg, SequenceRng::new(vec![5, 20]))
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .filter_map(|x| fb.get(x, y))
        .filter(|c| !c.is_wide_tail())
        .map(|c| c.ch)
        .collect()
}

fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
}

// 80x40: field border at (11, 10), 58x17.
const VP: Viewport = Viewport {
    width: 80,
    height: 40,
};

#[test]
fn term_view_renders_field_border() {
    let game = ka_game(4);
    let fb = GameView::default().render(&game.snapshot(), VP);

    assert_eq!(fb.get(11, 10).unwrap().ch, '╭');
    assert_eq!(fb.get(68, 10).unwrap().ch, '╮');
    assert_eq!(fb.get(11, 26).unwrap().ch, '╰');
    assert_eq!(fb.get(68, 26).unwrap().ch, '╯');
}

#[test]
fn term_view_places_kana_at_slot_and_row() {
    let mut game = ka_game(4);
    game.advance(700);
    let fb = GameView::default().render(&game.snapshot(), VP);

    // slot 20, row 1 inside the border
    let cell = fb.get(32, 12).unwrap();
    assert_eq!(cell.ch, 'か');
    assert!(fb.get(33, 12).unwrap().is_wide_tail());
    assert_eq!(fb.get(32, 11).unwrap().ch, ' ');
}

#[test]
fn term_view_colors_marked_kana_and_input_border() {
    let mut game = ka_game(4);
    game.dispatch(GameEvent::TextInput("ka".into()));
    let fb = GameView::default().render(&game.snapshot(), VP);

    let green = Rgb::new(0, 215, 135);
    assert_eq!(fb.get(32, 11).unwrap().style.fg, green);
    // Input box: y = 10 + 17 + 1, x centered under the field.
    assert_eq!(fb.get(24, 28).unwrap().ch, '╭');
    assert_eq!(fb.get(24, 28).unwrap().style.fg, green);
    assert!(row_text(&fb, 29).contains("ka"));
}

#[test]
fn term_view_marks_wrong_input_red() {
    let mut game = ka_game(4);
    game.dispatch(GameEvent::TextInput("q".into()));
    let fb = GameView::default().render(&game.snapshot(), VP);

    assert_eq!(fb.get(24, 28).unwrap().style.fg, Rgb::new(255, 0, 0));
    assert!(row_text(&fb, 29).contains('_'));
}

#[test]
fn term_view_shows_hearts_per_life() {
    let game = ka_game(3);
    let fb = GameView::default().render(&game.snapshot(), VP);

    let stats = row_text(&fb, 8);
    assert_eq!(stats.matches('♥').count(), 3);
    assert!(stats.contains("Level 1"));
    assert!(stats.contains("0pt"));
}

#[test]
fn term_view_draws_game_over_overlay() {
    let mut game = ka_game(1);
    game.dispatch(GameEvent::TextInput("ka".into()));
    game.advance(500);
    game.advance_to(20_000);
    assert!(game.state().game_over());

    let fb = GameView::default().render(&game.snapshot(), VP);
    assert!(screen_contains(&fb, "GAME OVER"));
    assert!(screen_contains(&fb, "Final Score: 100 points (1 correct)"));
    assert!(screen_contains(&fb, "x_x"));
}

#[test]
fn term_view_renders_menu() {
    let menu = MenuState::default();
    let fb = GameView::default().render_menu(&menu, VP);

    assert!(screen_contains(&fb, "KANA DROP"));
    assert!(screen_contains(&fb, "Hiragana"));
    assert!(screen_contains(&fb, "Katakana"));
    assert!(screen_contains(&fb, "[ Start ]"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let game = ka_game(4);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}
