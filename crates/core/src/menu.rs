//! Menu module - pre-session configuration state machine
//!
//! The menu only produces a [`SessionConfig`]; it never touches a running
//! session.

use crate::session::SessionConfig;
use crate::types::{KanaScript, MAX_START_LEVEL, MAX_START_LIVES, MIN_START_LEVEL, MIN_START_LIVES};

/// Menu sections, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSection {
    Script,
    Voiced,
    Level,
    Lives,
    Start,
}

impl MenuSection {
    pub const ALL: [MenuSection; 5] = [
        MenuSection::Script,
        MenuSection::Voiced,
        MenuSection::Level,
        MenuSection::Lives,
        MenuSection::Start,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuSection::Script => "Kana",
            MenuSection::Voiced => "Dakuten",
            MenuSection::Level => "Level",
            MenuSection::Lives => "Lives",
            MenuSection::Start => "Start",
        }
    }
}

/// Navigation input understood by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Left,
    Right,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    section: MenuSection,
    script_cursor: usize,
    script: KanaScript,
    include_voiced: bool,
    start_level: u32,
    start_lives: u32,
    field: (u16, u16),
}

impl MenuState {
    /// Build a menu preselected from `config`, with the cursor on Start.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            section: MenuSection::Start,
            script_cursor: config.script.index(),
            script: config.script,
            include_voiced: config.include_voiced,
            start_level: config.start_level,
            start_lives: config.start_lives,
            field: (config.field_width, config.max_fall_height),
        }
    }

    pub fn section(&self) -> MenuSection {
        self.section
    }

    pub fn script_cursor(&self) -> usize {
        self.script_cursor
    }

    pub fn script(&self) -> KanaScript {
        self.script
    }

    pub fn include_voiced(&self) -> bool {
        self.include_voiced
    }

    pub fn start_level(&self) -> u32 {
        self.start_level
    }

    pub fn start_lives(&self) -> u32 {
        self.start_lives
    }

    /// Configuration as currently selected
    pub fn config(&self) -> SessionConfig {
        SessionConfig::new(self.script, self.include_voiced, self.start_level, self.start_lives)
            .with_field(self.field.0, self.field.1)
    }

    /// Apply one navigation action. Returns the finalized config when Start
    /// is confirmed.
    pub fn apply(&mut self, action: MenuAction) -> Option<SessionConfig> {
        match action {
            MenuAction::Left => self.section = self.section.prev(),
            MenuAction::Right => self.section = self.section.next(),
            MenuAction::Up => self.adjust(true),
            MenuAction::Down => self.adjust(false),
            MenuAction::Confirm => match self.section {
                MenuSection::Script => {
                    self.script = KanaScript::from_index(self.script_cursor);
                    self.section = MenuSection::Voiced;
                }
                MenuSection::Start => return Some(self.config()),
                _ => self.section = self.section.next(),
            },
        }
        None
    }

    fn adjust(&mut self, up: bool) {
        let scripts = KanaScript::ALL.len();
        match self.section {
            MenuSection::Script => {
                self.script_cursor = if up {
                    (self.script_cursor + scripts - 1) % scripts
                } else {
                    (self.script_cursor + 1) % scripts
                };
            }
            MenuSection::Voiced => self.include_voiced = !self.include_voiced,
            MenuSection::Level => {
                self.start_level = step_wrapping(self.start_level, up, MIN_START_LEVEL, MAX_START_LEVEL);
            }
            MenuSection::Lives => {
                self.start_lives = step_wrapping(self.start_lives, up, MIN_START_LIVES, MAX_START_LIVES);
            }
            MenuSection::Start => {}
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn step_wrapping(value: u32, up: bool, min: u32, max: u32) -> u32 {
    if up {
        if value >= max {
            min
        } else {
            value + 1
        }
    } else if value <= min {
        max
    } else {
        value - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let menu = MenuState::default();
        assert_eq!(menu.section(), MenuSection::Start);
        assert_eq!(menu.script_cursor(), 2);
        assert!(menu.include_voiced());
        assert_eq!(menu.start_level(), 1);
        assert_eq!(menu.start_lives(), 4);
    }

    #[test]
    fn test_sections_wrap() {
        let mut menu = MenuState::default();
        menu.apply(MenuAction::Right);
        assert_eq!(menu.section(), MenuSection::Script);
        menu.apply(MenuAction::Left);
        assert_eq!(menu.section(), MenuSection::Start);
    }

    #[test]
    fn test_script_cursor_commits_on_confirm() {
        let mut menu = MenuState::default();
        menu.apply(MenuAction::Right);
        menu.apply(MenuAction::Down);
        assert_eq!(menu.script_cursor(), 0);
        // Moving the cursor alone does not change the selection.
        assert_eq!(menu.script(), KanaScript::Both);

        assert_eq!(menu.apply(MenuAction::Confirm), None);
        assert_eq!(menu.script(), KanaScript::Hiragana);
        assert_eq!(menu.section(), MenuSection::Voiced);

        menu.apply(MenuAction::Up);
        assert!(!menu.include_voiced());
    }

    #[test]
    fn test_level_and_lives_wrap() {
        let mut menu = MenuState::default();
        menu.apply(MenuAction::Left);
        menu.apply(MenuAction::Left);
        assert_eq!(menu.section(), MenuSection::Level);
        menu.apply(MenuAction::Down);
        assert_eq!(menu.start_level(), 10);
        menu.apply(MenuAction::Up);
        assert_eq!(menu.start_level(), 1);

        menu.apply(MenuAction::Right);
        assert_eq!(menu.section(), MenuSection::Lives);
        for _ in 0..7 {
            menu.apply(MenuAction::Up);
        }
        assert_eq!(menu.start_lives(), 1);
    }

    #[test]
    fn test_confirm_start_yields_config() {
        let mut menu = MenuState::new(SessionConfig::new(KanaScript::Katakana, false, 3, 2));
        let cfg = menu.apply(MenuAction::Confirm).unwrap();

        assert_eq!(cfg.script, KanaScript::Katakana);
        assert!(!cfg.include_voiced);
        assert_eq!(cfg.start_level, 3);
        assert_eq!(cfg.start_lives, 2);
    }

    #[test]
    fn test_confirm_elsewhere_advances() {
        let mut menu = MenuState::default();
        menu.apply(MenuAction::Left);
        menu.apply(MenuAction::Left);
        menu.apply(MenuAction::Left);
        assert_eq!(menu.section(), MenuSection::Voiced);
        assert_eq!(menu.apply(MenuAction::Confirm), None);
        assert_eq!(menu.section(), MenuSection::Level);
    }
}
