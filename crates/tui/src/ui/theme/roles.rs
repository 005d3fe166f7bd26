use std::fmt::Debug;

use datascrub_types::SuggestionKind;
use ratatui::style::{Color, Modifier, Style};

/// Colors a palette assigns to the parts of the settings screen.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    /// Panels and the enabled input box
    pub surface: Color,
    /// Disabled input box
    pub surface_muted: Color,
    pub border: Color,
    pub border_focused: Color,

    pub text: Color,
    pub text_secondary: Color,
    /// Placeholders, hints and disabled text
    pub text_muted: Color,

    /// Matched value selectors (`$string`, `$user`, ...)
    pub token_value: Color,
    /// Matched boolean operators (`&&`, `||`, `!`)
    pub token_boolean: Color,
    pub hint_key: Color,

    pub error: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

/// A palette plus the styles the components build from it.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }
    fn heading_style(&self) -> Style {
        self.text_secondary_style().add_modifier(Modifier::BOLD)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::default().fg(if focused { roles.border_focused } else { roles.border })
    }

    /// Highlighted suggestion row or focused navigation item.
    fn selection_style(&self) -> Style {
        let roles = self.roles();
        Style::default().fg(roles.selection_fg).bg(roles.selection_bg)
    }

    /// Current page in the navigation while the list is not focused.
    fn nav_current_style(&self) -> Style {
        Style::default().fg(self.roles().border_focused).add_modifier(Modifier::BOLD)
    }

    fn error_style(&self) -> Style {
        Style::default().fg(self.roles().error)
    }

    fn hint_key_style(&self) -> Style {
        Style::default().fg(self.roles().hint_key).add_modifier(Modifier::BOLD)
    }

    /// Style for a resolved token: catalog values, boolean operators, or raw text.
    fn token_style(&self, kind: Option<SuggestionKind>) -> Style {
        let roles = self.roles();
        match kind {
            Some(SuggestionKind::Value) => Style::default().fg(roles.token_value),
            Some(SuggestionKind::Boolean) => Style::default().fg(roles.token_boolean).add_modifier(Modifier::BOLD),
            None => Style::default().fg(roles.text).add_modifier(Modifier::ITALIC),
        }
    }
}
