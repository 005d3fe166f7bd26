//! Security & Privacy page: the data-privacy rule form.
//!
//! Hosts the selector field, shows its validation error, and previews how the
//! current value was tokenized.

use crossterm::event::{KeyEvent, MouseEvent};
use datascrub_types::{Effect, ResolvedToken, Route};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::App,
    ui::{
        components::{Component, SelectorFieldComponent},
        theme::{Theme, theme_helpers as th},
    },
};

/// Message shown when the rule is submitted without a selector.
pub const REQUIRED_FIELD_ERROR: &str = "This field is required";

/// Validation run when the selector loses focus.
pub fn required_error(value: &str) -> Option<String> {
    value.trim().is_empty().then(|| REQUIRED_FIELD_ERROR.to_string())
}

#[derive(Debug, Default)]
pub struct DataPrivacyComponent {
    selector: SelectorFieldComponent,
}

impl DataPrivacyComponent {
    fn token_preview<'a>(tokens: &'a [ResolvedToken], theme: &dyn Theme) -> Line<'a> {
        let mut spans = vec![Span::styled("Tokens: ", theme.text_muted_style())];
        for token in tokens.iter().filter(|token| !token.is_empty_raw()) {
            spans.push(Span::styled(token.literal(), theme.token_style(token.kind())));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl Component for DataPrivacyComponent {
    fn mount(&mut self, app: &mut App) {
        app.selector.mount(&app.pointer_listeners);
        app.rebuild_focus();
        if !app.selector.is_disabled() {
            app.focus.focus(&app.selector);
        }
    }

    fn unmount(&mut self, app: &mut App) {
        app.selector.unmount();
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.selector.is_focused() {
            return self.selector.handle_key_events(app, key);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.selector.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let layout = self.get_preferred_layout(app, area);
        {
            let theme = &*app.ctx.theme;
            frame.render_widget(th::block(theme, Some(Route::SecurityAndPrivacy.title()), false), area);

            let intro = Paragraph::new(vec![
                Line::from(Span::styled("Data Privacy Rules", theme.heading_style())),
                Line::from(Span::styled(
                    "Choose which event data is scrubbed before it is stored.",
                    theme.text_muted_style(),
                )),
            ])
            .wrap(Wrap { trim: true });
            frame.render_widget(intro, layout[0]);

            let label_style = if app.selector.is_disabled() {
                theme.text_muted_style()
            } else {
                theme.text_primary_style().add_modifier(Modifier::BOLD)
            };
            frame.render_widget(Paragraph::new(Line::from(Span::styled("Source", label_style))), layout[1]);

            let feedback = match app.selector.error() {
                Some(error) => Line::from(Span::styled(error, theme.error_style())),
                None => Self::token_preview(app.selector.tokens(), theme),
            };
            frame.render_widget(Paragraph::new(feedback), layout[3]);
        }
        // Last so the popup overlays the feedback line.
        self.selector.render(frame, layout[2], app);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        if app.selector.is_focused() {
            return self.selector.get_hint_spans(app);
        }
        Vec::new()
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        Layout::vertical([
            Constraint::Length(3), // intro
            Constraint::Length(1), // label
            Constraint::Length(3), // selector input
            Constraint::Length(1), // error or token preview
            Constraint::Min(0),
        ])
        .split(inner)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::NordTheme;
    use datascrub_types::Suggestion;

    #[test]
    fn blank_values_are_required() {
        assert_eq!(required_error("").as_deref(), Some(REQUIRED_FIELD_ERROR));
        assert_eq!(required_error("   ").as_deref(), Some(REQUIRED_FIELD_ERROR));
        assert_eq!(required_error("$string"), None);
    }

    #[test]
    fn preview_skips_empty_tokens() {
        let theme = NordTheme::new();
        let tokens = vec![
            ResolvedToken::Matched(Suggestion::value("$user", "User context")),
            ResolvedToken::Matched(Suggestion::boolean("&&")),
            ResolvedToken::Raw(String::new()),
        ];
        let line = DataPrivacyComponent::token_preview(&tokens, &theme);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, "Tokens: $user && ");
    }
}
