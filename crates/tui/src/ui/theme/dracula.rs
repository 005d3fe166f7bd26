//! Dracula palette (https://draculatheme.com); panels share the root background.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

pub const BACKGROUND: Color = Color::Rgb(0x28, 0x2A, 0x36);
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A);
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2);
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4);
pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD);
pub const GREEN: Color = Color::Rgb(0x50, 0xFA, 0x7B);
pub const PINK: Color = Color::Rgb(0xFF, 0x79, 0xC6);
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9);
pub const RED: Color = Color::Rgb(0xFF, 0x55, 0x55);

const ROLES: ThemeRoles = ThemeRoles {
    background: BACKGROUND,
    surface: BACKGROUND,
    surface_muted: CURRENT_LINE,
    border: CURRENT_LINE,
    border_focused: CYAN,
    text: FOREGROUND,
    text_secondary: FOREGROUND,
    text_muted: COMMENT,
    token_value: GREEN,
    token_boolean: PINK,
    hint_key: PURPLE,
    error: RED,
    selection_bg: CURRENT_LINE,
    selection_fg: FOREGROUND,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct DraculaTheme;

impl DraculaTheme {
    pub fn new() -> Self {
        Self
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &ROLES
    }
}
