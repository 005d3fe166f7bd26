use ratatui::{
    style::{Color, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.heading_style()));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Style for the floating suggestion list; slightly recessed from the panel.
pub fn popup_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(darken_rgb(surface, 0.80)).fg(text)
}

/// Style for input fields; caller sets the block border based on focus.
pub fn input_style<T: Theme + ?Sized>(theme: &T, valid: bool, disabled: bool) -> Style {
    let ThemeRoles {
        surface,
        surface_muted,
        text,
        text_muted,
        error,
        ..
    } = *theme.roles();
    if disabled {
        return Style::default().bg(surface_muted).fg(text_muted);
    }
    let style = Style::default().bg(surface).fg(text);
    if valid { style } else { style.fg(error) }
}

/// Build `key label` hint spans for the footer.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), theme.hint_key_style()));
        spans.push(Span::styled(format!(" {label}  "), theme.text_muted_style()));
    }
    spans
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let scale = |channel: u8| (channel as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::NordTheme;

    #[test]
    fn darken_only_touches_rgb() {
        assert_eq!(darken_rgb(Color::Rgb(100, 50, 10), 0.5), Color::Rgb(50, 25, 5));
        assert_eq!(darken_rgb(Color::Red, 0.5), Color::Red);
    }

    #[test]
    fn invalid_input_uses_error_color() {
        let theme = NordTheme::new();
        assert_eq!(input_style(&theme, false, false).fg, Some(theme.roles().error));
        assert_eq!(input_style(&theme, true, true).fg, Some(theme.roles().text_muted));
    }

    #[test]
    fn hint_spans_pair_keys_with_labels() {
        let theme = NordTheme::new();
        let spans = build_hint_spans(&theme, &[("Tab", "next"), ("Esc", "close")]);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, "Tab");
        assert_eq!(spans[3].content, " close  ");
    }
}
