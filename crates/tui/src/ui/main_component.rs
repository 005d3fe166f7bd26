use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use datascrub_types::{Effect, Msg, Route};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use tracing::warn;

use super::components::{Component, DataPrivacyComponent, PlaceholderComponent, SettingsNavComponent};
use super::theme::theme_helpers as th;
use crate::app::App;

/// Root view: settings navigation on the left, the current page on the right
/// and a hint bar along the bottom.
#[derive(Default)]
pub struct MainView {
    /// Page for the current route
    content_view: Option<Box<dyn Component>>,
    /// Settings navigation list
    nav_view: SettingsNavComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the page with the one for `route`.
    ///
    /// The outgoing page is unmounted before the incoming one is mounted, so a
    /// page never observes another page's listeners. Use `Effect::SwitchTo`
    /// rather than calling this directly from components. Routes hidden by
    /// access or feature flags are ignored and the current page stays.
    pub fn set_current_route(&mut self, app: &mut App, route: Route) {
        let Some(route) = app.nav.set_route(route) else {
            warn!(route = %route.title(), "ignoring switch to hidden settings page");
            return;
        };
        if let Some(mut previous) = self.content_view.take() {
            previous.unmount(app);
        }

        let mut view: Box<dyn Component> = match route {
            Route::SecurityAndPrivacy => Box::new(DataPrivacyComponent::default()),
            other => Box::new(PlaceholderComponent::new(other)),
        };
        app.current_route = route;
        app.rebuild_focus();
        view.mount(app);
        self.content_view = Some(view);
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::PointerPressed { .. } => {
                app.selector.reduce_pointer_pressed();
                Vec::new()
            }
            Msg::FocusChanged => app.selector.sync_focus(),
            Msg::Resize(..) => self.content_view.as_mut().map(|c| c.handle_message(app, msg)).unwrap_or_default(),
        }
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![Effect::Quit];
        }

        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus.prev();
                return Vec::new();
            }
            _ => {}
        }

        if app.nav.is_focused() {
            if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                return vec![Effect::Quit];
            }
            return self.nav_view.handle_key_events(app, key);
        }

        self.content_view
            .as_mut()
            .map(|content| content.handle_key_events(app, key))
            .unwrap_or_default()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        // Page first: the suggestion popup floats above everything else.
        let mut effects = self
            .content_view
            .as_mut()
            .map(|content| content.handle_mouse_events(app, mouse))
            .unwrap_or_default();
        if effects.is_empty() {
            effects.extend(self.nav_view.handle_mouse_events(app, mouse));
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        self.nav_view.render(frame, layout[0], app);

        let hint_spans: Vec<Span> = self.get_hint_spans(app);
        let hints_widget = Paragraph::new(Line::from(hint_spans)).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, layout[2]);

        // Last so popups overlay the hint bar.
        if let Some(content) = self.content_view.as_mut() {
            content.render(frame, layout[1], app);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", theme.text_muted_style())];

        if app.nav.is_focused() {
            hint_spans.extend(self.nav_view.get_hint_spans(app));
        } else if let Some(content) = self.content_view.as_ref() {
            hint_spans.extend(content.get_hint_spans(app));
        }

        hint_spans.extend(th::build_hint_spans(theme, &[("Tab", "Switch pane"), ("Ctrl+C", "Quit")]));
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Nav + page
            Constraint::Length(1), // Hints bar
        ])
        .split(area);
        let columns = Layout::horizontal([
            Constraint::Length(28), // Navigation
            Constraint::Min(1),     // Page
        ])
        .split(rows[0]);

        vec![columns[0], columns[1], rows[1]]
    }
}
