//! Nord palette (https://www.nordtheme.com), the default theme.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

pub const POLAR_NIGHT_0: Color = Color::Rgb(0x2E, 0x34, 0x40);
pub const POLAR_NIGHT_1: Color = Color::Rgb(0x3B, 0x42, 0x52);
pub const POLAR_NIGHT_2: Color = Color::Rgb(0x43, 0x4C, 0x5E);
pub const POLAR_NIGHT_3: Color = Color::Rgb(0x4C, 0x56, 0x6A);
pub const SNOW_STORM_0: Color = Color::Rgb(0xD8, 0xDE, 0xE9);
pub const SNOW_STORM_1: Color = Color::Rgb(0xE5, 0xE9, 0xF0);
pub const SNOW_STORM_2: Color = Color::Rgb(0xEC, 0xEF, 0xF4);
pub const FROST_1: Color = Color::Rgb(0x88, 0xC0, 0xD0);
pub const FROST_2: Color = Color::Rgb(0x81, 0xA1, 0xC1);
pub const AURORA_RED: Color = Color::Rgb(0xBF, 0x61, 0x6A);
pub const AURORA_YELLOW: Color = Color::Rgb(0xEB, 0xCB, 0x8B);
pub const AURORA_PURPLE: Color = Color::Rgb(0xB4, 0x8E, 0xAD);
/// Comment gray used for placeholders.
pub const MUTED: Color = Color::Rgb(0x61, 0x6E, 0x88);

const ROLES: ThemeRoles = ThemeRoles {
    background: POLAR_NIGHT_0,
    surface: POLAR_NIGHT_1,
    surface_muted: POLAR_NIGHT_2,
    border: POLAR_NIGHT_3,
    border_focused: FROST_2,
    text: SNOW_STORM_0,
    text_secondary: SNOW_STORM_1,
    text_muted: MUTED,
    token_value: FROST_1,
    token_boolean: AURORA_PURPLE,
    hint_key: AURORA_YELLOW,
    error: AURORA_RED,
    selection_bg: POLAR_NIGHT_3,
    selection_fg: SNOW_STORM_2,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct NordTheme;

impl NordTheme {
    pub fn new() -> Self {
        Self
    }
}

impl Theme for NordTheme {
    fn roles(&self) -> &ThemeRoles {
        &ROLES
    }
}
