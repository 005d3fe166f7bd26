//! Selector field component: input box plus the suggestion popup.
//!
//! Key bindings while focused:
//! - printable characters, Backspace, Delete, Left/Right, Home/End: edit;
//! - Up/Down: move the active suggestion;
//! - Enter: accept the active suggestion;
//! - Esc: close the popup.
//!
//! The popup floats below the input box and may overlap whatever was drawn
//! there, so hosts render this component last.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use datascrub_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Borders, Clear, List, ListItem, ListState},
};

use crate::{
    app::App,
    ui::{
        components::{common::render_input_field, component::Component},
        theme::theme_helpers as th,
    },
};

/// Maximum number of suggestion rows visible at once.
const MAX_POPUP_ROWS: usize = 8;

#[derive(Debug, Default)]
pub struct SelectorFieldComponent;

impl SelectorFieldComponent {
    /// First suggestion index shown so the active row stays visible.
    fn scroll_offset(active_index: usize, rows: usize) -> usize {
        active_index.saturating_sub(rows.saturating_sub(1))
    }

    /// Popup placement below `field_area`, clamped to the frame.
    fn popup_area(field_area: Rect, frame_area: Rect, rows: usize) -> Rect {
        let top = field_area.bottom();
        let available = frame_area.bottom().saturating_sub(top);
        let height = (rows as u16 + 1).min(available);
        Rect::new(field_area.x, top, field_area.width, height)
    }

    fn render_popup(&self, frame: &mut Frame, field_area: Rect, app: &App) -> Vec<Rect> {
        let state = &app.selector;
        let suggestions = state.visible_suggestions();
        let Some(active_index) = state.active_index() else {
            return Vec::new();
        };
        if suggestions.is_empty() {
            return Vec::new();
        }

        let theme = &*app.ctx.theme;
        let rows = suggestions.len().min(MAX_POPUP_ROWS);
        let area = Self::popup_area(field_area, frame.area(), rows);
        if area.height < 2 {
            return Vec::new();
        }
        let block = th::block(theme, None, true)
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .style(th::popup_style(theme));
        let inner = block.inner(area);
        let offset = Self::scroll_offset(active_index, inner.height as usize);

        let items: Vec<ListItem> = suggestions
            .iter()
            .map(|suggestion| {
                let mut spans = vec![Span::styled(suggestion.literal.clone(), theme.text_primary_style())];
                if let Some(description) = suggestion.description.as_deref() {
                    spans.push(Span::styled(format!(" ({description})"), theme.text_muted_style()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();
        let list = List::new(items).block(block).highlight_style(theme.selection_style());
        let mut list_state = ListState::default().with_offset(offset).with_selected(Some(active_index));

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut list_state);

        (0..suggestions.len())
            .map(|index| match index.checked_sub(offset) {
                Some(row) if row < inner.height as usize => Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
                _ => Rect::default(),
            })
            .collect()
    }
}

impl Component for SelectorFieldComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.selector;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => state.apply_insert_char(c),
            KeyCode::Backspace => state.reduce_backspace(),
            KeyCode::Delete => state.reduce_delete(),
            KeyCode::Left => {
                state.reduce_move_cursor_left();
                Vec::new()
            }
            KeyCode::Right => {
                state.reduce_move_cursor_right();
                Vec::new()
            }
            KeyCode::Home => {
                state.reduce_move_cursor_home();
                Vec::new()
            }
            KeyCode::End => {
                state.reduce_move_cursor_end();
                Vec::new()
            }
            KeyCode::Down => {
                state.reduce_select_next();
                Vec::new()
            }
            KeyCode::Up => {
                state.reduce_select_previous();
                Vec::new()
            }
            KeyCode::Enter => state.apply_enter(),
            KeyCode::Esc => {
                state.reduce_close();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.selector.is_disabled() {
            return Vec::new();
        }
        if let Some(index) = app.selector.suggestion_index_at(mouse.column, mouse.row) {
            return app.selector.apply_select_suggestion(index);
        }
        if app.selector.last_area.contains(Position::new(mouse.column, mouse.row)) {
            app.focus.focus(&app.selector);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let field_area = Rect { height: rect.height.min(3), ..rect };
        let focused = app.selector.is_focused();
        render_input_field(frame, field_area, app.selector.field(), &*app.ctx.theme, focused);

        let suggestion_areas = self.render_popup(frame, field_area, app);
        app.selector.set_layout(field_area, suggestion_areas);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[("↑/↓", "Cycle"), ("Enter", "Accept"), ("Space", "Next token"), ("Esc", "Close")],
        )
    }
}
