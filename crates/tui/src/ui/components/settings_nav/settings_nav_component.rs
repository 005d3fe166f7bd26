use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use datascrub_types::Effect;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{app::App, ui::components::Component, ui::theme::theme_helpers as th};

/// Settings navigation list with section headers.
///
/// Up/Down move the selection within the visible items without wrapping;
/// Enter or a click opens the selected page via `Effect::SwitchTo`.
#[derive(Debug)]
pub struct SettingsNavComponent {
    pub title: String,
}

impl Default for SettingsNavComponent {
    fn default() -> Self {
        Self {
            title: "Project Settings".to_string(),
        }
    }
}

impl Component for SettingsNavComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let state = &mut app.nav;
        match key.code {
            KeyCode::Down => state.reduce_select_next(),
            KeyCode::Up => state.reduce_select_previous(),
            KeyCode::Enter => {
                if let Some(item) = state.selected_item() {
                    return vec![Effect::SwitchTo(item.route)];
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let Some(index) = app.nav.item_index_at(mouse.column, mouse.row) else {
            return Vec::new();
        };
        app.focus.focus(&app.nav);
        app.nav.apply_select_index(index).map(Effect::SwitchTo).into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &app.nav;
        let focused = state.is_focused();
        let block = th::block(theme, Some(self.title.as_str()), focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        let mut item_rows: Vec<usize> = Vec::new();
        let mut item_index = 0;
        for section in state.sections() {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                section.title.to_uppercase(),
                theme.text_muted_style().add_modifier(Modifier::BOLD),
            )));
            for item in &section.items {
                let style = if item_index == state.selected_index() {
                    if focused {
                        theme.selection_style().add_modifier(Modifier::BOLD)
                    } else {
                        theme.nav_current_style()
                    }
                } else {
                    theme.text_primary_style()
                };
                item_rows.push(lines.len());
                lines.push(Line::from(Span::styled(format!(" {}", item.label), style)));
                item_index += 1;
            }
        }
        frame.render_widget(Paragraph::new(lines), inner);

        let per_item_areas = item_rows
            .into_iter()
            .map(|row| match u16::try_from(row) {
                Ok(row) if row < inner.height => Rect::new(inner.x, inner.y + row, inner.width, 1),
                _ => Rect::default(),
            })
            .collect();
        app.nav.last_area = area;
        app.nav.per_item_areas = per_item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("↑/↓", "Navigate"), ("Enter", "Open page")])
    }
}
