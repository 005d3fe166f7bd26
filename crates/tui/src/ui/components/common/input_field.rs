//! Single-line input field abstraction.
//!
//! Every concrete field names its [`InputKind`] through the required
//! [`InputField::input_kind`]; a field type that forgets it does not compile.
//! [`render_input_field`] draws any implementor with the shared look: a
//! bordered box, the value or a muted placeholder, and the terminal cursor
//! while focused.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::TextInputState;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Kind of value an input field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputKind {
    Text,
}

/// Props shared by every input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFieldProps {
    /// Form name
    pub name: String,
    pub placeholder: String,
    pub error: Option<String>,
    pub disabled: bool,
}

impl InputFieldProps {
    pub fn new(name: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }
}

pub trait InputField {
    /// Kind of value this field edits.
    fn input_kind(&self) -> InputKind;

    fn props(&self) -> &InputFieldProps;

    fn text_input(&self) -> &TextInputState;

    fn display_value(&self) -> &str {
        self.text_input().input()
    }

    fn placeholder(&self) -> &str {
        &self.props().placeholder
    }
}

/// Plain text input.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    props: InputFieldProps,
    input: TextInputState,
}

impl TextField {
    pub fn new(props: InputFieldProps) -> Self {
        Self {
            props,
            input: TextInputState::new(),
        }
    }

    pub fn props_mut(&mut self) -> &mut InputFieldProps {
        &mut self.props
    }

    pub fn input_mut(&mut self) -> &mut TextInputState {
        &mut self.input
    }
}

impl InputField for TextField {
    fn input_kind(&self) -> InputKind {
        InputKind::Text
    }

    fn props(&self) -> &InputFieldProps {
        &self.props
    }

    fn text_input(&self) -> &TextInputState {
        &self.input
    }
}

/// Draws `field` into `area` and places the terminal cursor when `focused`.
pub fn render_input_field<F, T>(frame: &mut Frame, area: Rect, field: &F, theme: &T, focused: bool)
where
    F: InputField + ?Sized,
    T: Theme + ?Sized,
{
    let props = field.props();
    let valid = props.error.is_none();
    let block = th::block(theme, None, focused && !props.disabled).style(th::input_style(theme, valid, props.disabled));
    let inner = block.inner(area);

    let value = field.display_value();
    let line = if value.is_empty() {
        Line::from(Span::styled(field.placeholder().to_string(), theme.text_muted_style()))
    } else {
        Line::from(value.to_string())
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && !props.disabled && inner.width > 0 && inner.height > 0 {
        let offset = field.text_input().text_before_cursor().width() as u16;
        let x = inner.x.saturating_add(offset.min(inner.width.saturating_sub(1)));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::NordTheme;
    use ratatui::{Terminal, backend::TestBackend};

    fn selector_like_field() -> TextField {
        TextField::new(InputFieldProps::new("from", "ex. strings, numbers, custom"))
    }

    #[test]
    fn text_field_reports_kind_and_props() {
        let field = selector_like_field();
        assert_eq!(field.input_kind(), InputKind::Text);
        assert_eq!(field.props().name, "from");
        assert_eq!(field.placeholder(), "ex. strings, numbers, custom");
    }

    #[test]
    fn renders_placeholder_when_empty_and_value_otherwise() {
        let theme = NordTheme::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).expect("terminal");
        let mut field = selector_like_field();

        terminal
            .draw(|frame| render_input_field(frame, frame.area(), &field, &theme, true))
            .expect("draw");
        let row: String = (0..40).map(|x| terminal.backend().buffer()[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("ex. strings, numbers, custom"));

        field.input_mut().set_input("$user");
        field.input_mut().move_to_end();
        terminal
            .draw(|frame| render_input_field(frame, frame.area(), &field, &theme, true))
            .expect("draw");
        let row: String = (0..40).map(|x| terminal.backend().buffer()[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("$user"));
        assert_eq!(terminal.get_cursor_position().expect("cursor"), Position::new(6, 1));
    }
}
