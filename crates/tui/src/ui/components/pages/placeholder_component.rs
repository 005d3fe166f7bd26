use datascrub_types::Route;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

/// Page for routes without an interactive form.
#[derive(Debug)]
pub struct PlaceholderComponent {
    route: Route,
}

impl PlaceholderComponent {
    pub fn new(route: Route) -> Self {
        Self { route }
    }
}

impl Component for PlaceholderComponent {
    fn mount(&mut self, app: &mut App) {
        app.rebuild_focus();
        app.focus.focus(&app.nav);
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(self.route.title()), false);
        let body = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                "Nothing to configure here yet. Open Security & Privacy to edit data privacy rules.",
                theme.text_muted_style(),
            )),
        ])
        .block(block);
        frame.render_widget(body, area);
    }
}
