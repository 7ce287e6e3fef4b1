//! GameView: maps a session snapshot (or the menu) into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, MenuSection, MenuState};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{FeedbackKind, KanaScript};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TITLE: Rgb = Rgb::new(255, 95, 175);
const STATS: Rgb = Rgb::new(135, 175, 255);
const HEART: Rgb = Rgb::new(230, 60, 80);
const FIELD_BORDER: Rgb = Rgb::new(95, 95, 255);
const KANA: Rgb = Rgb::new(238, 238, 238);
const CORRECT: Rgb = Rgb::new(0, 215, 135);
const WRONG: Rgb = Rgb::new(255, 0, 0);
const MUTED: Rgb = Rgb::new(98, 98, 98);

fn style(fg: Rgb, bold: bool) -> CellStyle {
    CellStyle {
        fg,
        bg: BG,
        bold,
        dim: false,
    }
}

/// Screen position of the play field, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Top-left corner of the field border.
    pub x: u16,
    pub y: u16,
    /// Border box size.
    pub w: u16,
    pub h: u16,
}

impl FieldLayout {
    /// Screen cell of a kana at `slot`, `fall_position`.
    pub fn cell(&self, slot: u16, fall_position: u16) -> (u16, u16) {
        (self.x + 1 + slot, self.y + 1 + fall_position)
    }
}

/// A lightweight terminal renderer for the typing drill.
pub struct GameView {
    /// Input box width including its border.
    input_box_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { input_box_w: 32 }
    }
}

impl GameView {
    pub fn new(input_box_w: u16) -> Self {
        Self {
            input_box_w: input_box_w.max(3),
        }
    }

    /// Field placement for a snapshot in a viewport.
    ///
    /// The field is one column wider than the slot count so a double-width
    /// glyph in the last slot still fits.
    pub fn field_layout(&self, snap: &GameSnapshot, viewport: Viewport) -> FieldLayout {
        let w = snap.field_width + 3;
        let h = snap.field_height + 2;
        // title, blank, stats, blank | field | blank, input box (3), blank, footer
        let total_h = 4 + h + 6;
        let x = viewport.width.saturating_sub(w) / 2;
        let top = viewport.height.saturating_sub(total_h) / 2;
        FieldLayout { x, y: top + 4, w, h }
    }

    /// Render the current session into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let field = self.field_layout(snap, viewport);
        let top = field.y.saturating_sub(4);

        fb.put_str_centered(field.x, top, field.w, "KANA DROP", style(TITLE, true));
        self.draw_stats(fb, snap, field, top + 2);

        draw_border(fb, field.x, field.y, field.w, field.h, style(FIELD_BORDER, false));
        for obj in snap.objects.iter() {
            if obj.fall_position >= snap.field_height || obj.slot >= snap.field_width {
                continue;
            }
            let Some(ch) = obj.glyph.chars().next() else {
                continue;
            };
            let (x, y) = field.cell(obj.slot, obj.fall_position);
            let fg = if obj.marked_correct { CORRECT } else { KANA };
            fb.put_wide_char(x, y, ch, style(fg, true));
        }

        let input_y = field.y + field.h + 1;
        self.draw_input_box(fb, snap, field, input_y);

        fb.put_str_centered(
            field.x,
            input_y + 4,
            field.w,
            "Type the romaji - Esc or Ctrl+C to quit",
            style(MUTED, false),
        );

        if snap.game_over {
            self.draw_game_over(fb, snap, field);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, field: FieldLayout, y: u16) {
        // "♥ ♥ ♥   Level 2   1200pt"
        let hearts_w = if snap.lives == 0 { 3 } else { snap.lives as u16 * 2 - 1 };
        let level_w = 6 + digits(snap.level);
        let points_w = digits(snap.points) + 2;
        let total = hearts_w + 3 + level_w + 3 + points_w;
        let mut x = field.x + field.w.saturating_sub(total) / 2;

        if snap.lives == 0 {
            fb.put_str(x, y, "x_x", style(HEART, true));
        } else {
            for i in 0..snap.lives as u16 {
                fb.put_char(x + i * 2, y, '♥', style(HEART, true));
            }
        }
        x += hearts_w + 3;

        let stats = style(STATS, false);
        fb.put_str(x, y, "Level ", stats);
        fb.put_u32(x + 6, y, snap.level, stats);
        x += level_w + 3;

        fb.put_u32(x, y, snap.points, stats);
        fb.put_str(x + digits(snap.points), y, "pt", stats);
    }

    fn draw_input_box(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, field: FieldLayout, y: u16) {
        let border = if snap.has_marked {
            CORRECT
        } else if snap.feedback_latched && snap.feedback == FeedbackKind::Wrong {
            WRONG
        } else {
            MUTED
        };
        let w = self.input_box_w;
        let x = field.x + field.w.saturating_sub(w) / 2;
        draw_border(fb, x, y, w, 3, style(border, false));

        let text = if snap.input.is_empty() { "_" } else { snap.input.as_str() };
        let inner = w - 2;
        // Keep the tail of long input visible.
        let skip = text.chars().count().saturating_sub(inner as usize);
        let shown: String = text.chars().skip(skip).collect();
        fb.put_str_centered(x + 1, y + 1, inner, &shown, style(KANA, false));
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, field: FieldLayout) {
        let box_w = 40.min(field.w);
        let box_h = 6;
        let x = field.x + field.w.saturating_sub(box_w) / 2;
        let y = field.y + field.h.saturating_sub(box_h) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', style(KANA, false));
        draw_border(fb, x, y, box_w, box_h, style(WRONG, true));
        fb.put_str_centered(x, y + 1, box_w, "GAME OVER", style(WRONG, true));
        fb.put_str_centered(x, y + 2, box_w, &final_score_line(snap), style(STATS, false));
        fb.put_str_centered(x, y + 4, box_w, "Press any key to exit", style(MUTED, false));
    }

    /// Render the configuration menu.
    pub fn render_menu_into(&self, menu: &MenuState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let w: u16 = 40;
        let h: u16 = 16;
        let x = viewport.width.saturating_sub(w) / 2;
        let mut y = viewport.height.saturating_sub(h) / 2;

        fb.put_str_centered(x, y, w, "KANA DROP", style(TITLE, true));
        y += 2;

        let label = |section: MenuSection| {
            if menu.section() == section {
                style(TITLE, true)
            } else {
                style(STATS, false)
            }
        };
        let value = style(KANA, false);
        let vx = x + 12;

        fb.put_str(x, y, MenuSection::Script.as_str(), label(MenuSection::Script));
        for script in KanaScript::ALL {
            let i = script.index() as u16;
            if menu.section() == MenuSection::Script && menu.script_cursor() == script.index() {
                fb.put_char(vx - 2, y + i, '>', style(TITLE, true));
            }
            fb.put_str(vx, y + i, script.as_str(), value);
            if menu.script() == script {
                fb.put_char(vx + 10, y + i, '●', style(CORRECT, true));
            }
        }
        y += 4;

        fb.put_str(x, y, MenuSection::Voiced.as_str(), label(MenuSection::Voiced));
        fb.put_str(vx, y, if menu.include_voiced() { "On" } else { "Off" }, value);
        y += 2;

        fb.put_str(x, y, MenuSection::Level.as_str(), label(MenuSection::Level));
        fb.put_u32(vx, y, menu.start_level(), value);
        y += 2;

        fb.put_str(x, y, MenuSection::Lives.as_str(), label(MenuSection::Lives));
        fb.put_u32(vx, y, menu.start_lives(), value);
        y += 2;

        fb.put_str_centered(x, y, w, "[ Start ]", label(MenuSection::Start));
        y += 2;

        fb.put_str_centered(
            x,
            y,
            w,
            "Left/Right section  Up/Down change  Enter",
            style(MUTED, false),
        );
    }

    pub fn render_menu(&self, menu: &MenuState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_menu_into(menu, viewport, &mut fb);
        fb
    }
}

/// "Final Score: 1200 points (12 correct)"
pub fn final_score_line(snap: &GameSnapshot) -> String {
    format!("Final Score: {} points ({} correct)", snap.points, snap.correct)
}

fn digits(v: u32) -> u16 {
    let mut n = v;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
