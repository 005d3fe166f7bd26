//! State for the data-privacy selector field.
//!
//! The field is a single-line text input whose value is a space-separated
//! list of selector tokens. Every edit re-resolves the whole value through
//! [`SuggestionEngine`] and recomputes the suggestion list; the popup shows
//! that list while open.
//!
//! Popup transitions:
//! - focus gained: open with the first row active;
//! - Up/Down: move the active row, clamped to the list;
//! - Enter (open, non-empty list) or click on a row: replace the last token and close;
//! - Esc, or a press outside the field and popup: close;
//! - focus lost: clear suggestions and close.
//!
//! A disabled field ignores all of the above.

use datascrub_types::{Effect, ResolvedToken, SelectorCatalog, Suggestion, join_literals};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::SuggestionEngine;
use crate::ui::components::common::{InputField, InputFieldProps, TextField, TextInputState};
use crate::ui::pointer::{PointerListeners, PointerSubscription};

/// Form name of the selector input.
pub const SELECTOR_FIELD_NAME: &str = "from";
/// Hint shown while the selector is empty.
pub const SELECTOR_PLACEHOLDER: &str = "ex. strings, numbers, custom";

/// Visibility of the suggestion popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionPopup {
    #[default]
    Closed,
    Open {
        active_index: usize,
    },
}

#[derive(Debug)]
pub struct SelectorFieldState {
    catalog: &'static SelectorCatalog,
    field: TextField,
    tokens: Vec<ResolvedToken>,
    suggestions: Vec<Suggestion>,
    popup: SuggestionPopup,
    focus: FocusFlag,
    was_focused: bool,
    pointer: Option<PointerSubscription>,
    /// Last rendered area of the input box.
    pub last_area: Rect,
    /// Last rendered rows of the popup, index-aligned with `suggestions`.
    pub suggestion_areas: Vec<Rect>,
}

impl Default for SelectorFieldState {
    fn default() -> Self {
        Self::new(SelectorCatalog::standard())
    }
}

impl SelectorFieldState {
    pub fn new(catalog: &'static SelectorCatalog) -> Self {
        let mut state = Self {
            catalog,
            field: TextField::new(InputFieldProps::new(SELECTOR_FIELD_NAME, SELECTOR_PLACEHOLDER)),
            tokens: Vec::new(),
            suggestions: Vec::new(),
            popup: SuggestionPopup::Closed,
            focus: FocusFlag::named("selector.field"),
            was_focused: false,
            pointer: None,
            last_area: Rect::default(),
            suggestion_areas: Vec::new(),
        };
        state.recompute();
        state
    }

    // ===== SELECTORS =====

    /// Joined external value.
    pub fn value(&self) -> &str {
        self.field.display_value()
    }

    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn tokens(&self) -> &[ResolvedToken] {
        &self.tokens
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn popup(&self) -> SuggestionPopup {
        self.popup
    }

    pub fn active_index(&self) -> Option<usize> {
        match self.popup {
            SuggestionPopup::Open { active_index } => Some(active_index),
            SuggestionPopup::Closed => None,
        }
    }

    /// Rows the popup should draw: empty while closed.
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        match self.popup {
            SuggestionPopup::Open { .. } => &self.suggestions,
            SuggestionPopup::Closed => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.field.props().error.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.field.props().disabled
    }

    pub fn is_focused(&self) -> bool {
        self.focus.get()
    }

    /// Index of the popup row under `(column, row)`, if any.
    pub fn suggestion_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.visible_suggestions()
            .iter()
            .zip(&self.suggestion_areas)
            .position(|(_, area)| area.contains(position))
    }

    // ===== LIFECYCLE =====

    /// Start listening for presses outside the field.
    pub fn mount(&mut self, listeners: &PointerListeners) {
        if self.pointer.is_none() {
            let subscription = listeners.subscribe();
            subscription.set_bounds(self.bounds());
            self.pointer = Some(subscription);
        }
    }

    /// Release the outside-press listener, drop focus and hide the popup.
    ///
    /// The cleared focus flag is reported as a blur on the next `sync_focus`.
    pub fn unmount(&mut self) {
        self.pointer = None;
        self.focus.set(false);
        self.popup = SuggestionPopup::Closed;
        self.suggestion_areas.clear();
    }

    // ===== EXTERNAL PROPS =====

    /// Replace the value from outside; reports no change effect.
    pub fn set_value(&mut self, value: &str) {
        *self.field.input_mut() = TextInputState::with_input(value);
        self.recompute();
        self.reset_active_index();
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.field.props_mut().error = error;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.field.props_mut().disabled = disabled;
        if disabled {
            self.popup = SuggestionPopup::Closed;
        }
    }

    // ===== REDUCERS =====

    /// Insert a character at the cursor.
    ///
    /// A space at the end of the input starts a new empty token and leaves the
    /// popup as it is; any other edit opens the popup on the first row.
    pub fn apply_insert_char(&mut self, c: char) -> Vec<Effect> {
        if self.is_disabled() {
            return Vec::new();
        }
        if c == ' ' && self.field.text_input().is_cursor_at_end() {
            return self.reduce_start_new_token();
        }
        self.field.input_mut().insert_char(c);
        self.popup = SuggestionPopup::Open { active_index: 0 };
        self.value_changed()
    }

    /// Append a space, which resolves to a trailing empty token.
    pub fn reduce_start_new_token(&mut self) -> Vec<Effect> {
        if self.is_disabled() {
            return Vec::new();
        }
        let input = self.field.input_mut();
        input.move_to_end();
        input.insert_char(' ');
        self.reset_active_index();
        self.value_changed()
    }

    pub fn reduce_backspace(&mut self) -> Vec<Effect> {
        if self.is_disabled() || !self.field.input_mut().backspace() {
            return Vec::new();
        }
        self.popup = SuggestionPopup::Open { active_index: 0 };
        self.value_changed()
    }

    pub fn reduce_delete(&mut self) -> Vec<Effect> {
        if self.is_disabled() || !self.field.input_mut().delete() {
            return Vec::new();
        }
        self.popup = SuggestionPopup::Open { active_index: 0 };
        self.value_changed()
    }

    pub fn reduce_move_cursor_left(&mut self) {
        if !self.is_disabled() {
            self.field.input_mut().move_left();
        }
    }

    pub fn reduce_move_cursor_right(&mut self) {
        if !self.is_disabled() {
            self.field.input_mut().move_right();
        }
    }

    pub fn reduce_move_cursor_home(&mut self) {
        if !self.is_disabled() {
            self.field.input_mut().move_to_start();
        }
    }

    pub fn reduce_move_cursor_end(&mut self) {
        if !self.is_disabled() {
            self.field.input_mut().move_to_end();
        }
    }

    /// Move the active row down; opens a closed popup on the first row.
    pub fn reduce_select_next(&mut self) {
        if self.is_disabled() || self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.popup = match self.popup {
            SuggestionPopup::Open { active_index } => SuggestionPopup::Open {
                active_index: (active_index + 1).min(last),
            },
            SuggestionPopup::Closed => SuggestionPopup::Open { active_index: 0 },
        };
    }

    pub fn reduce_select_previous(&mut self) {
        if self.is_disabled() {
            return;
        }
        if let SuggestionPopup::Open { active_index } = self.popup {
            self.popup = SuggestionPopup::Open {
                active_index: active_index.saturating_sub(1),
            };
        }
    }

    /// Accept the active row. No-op while closed or with nothing to suggest.
    pub fn apply_enter(&mut self) -> Vec<Effect> {
        match self.popup {
            SuggestionPopup::Open { active_index } if !self.suggestions.is_empty() => self.apply_select_suggestion(active_index),
            _ => Vec::new(),
        }
    }

    /// Replace the last token with the suggestion at `index` and close the popup.
    pub fn apply_select_suggestion(&mut self, index: usize) -> Vec<Effect> {
        if self.is_disabled() {
            return Vec::new();
        }
        let Some(suggestion) = self.suggestions.get(index).cloned() else {
            return Vec::new();
        };
        let last_index = self.tokens.len().saturating_sub(1);
        self.tokens = SuggestionEngine::apply_suggestion_selection(&self.tokens, &suggestion, last_index);
        let value = join_literals(&self.tokens);
        debug!(literal = %suggestion.literal, value = %value, "selector suggestion applied");

        let input = self.field.input_mut();
        input.set_input(value.clone());
        input.move_to_end();
        self.suggestions = SuggestionEngine::compute_suggestions(self.catalog, &self.tokens);
        self.popup = SuggestionPopup::Closed;
        vec![Effect::SelectorValueChanged(value)]
    }

    /// Esc: hide the popup without touching the value.
    pub fn reduce_close(&mut self) {
        self.popup = SuggestionPopup::Closed;
    }

    pub fn reduce_focus_gained(&mut self) {
        if self.is_disabled() {
            return;
        }
        self.recompute();
        self.popup = SuggestionPopup::Open { active_index: 0 };
    }

    pub fn apply_focus_lost(&mut self) -> Vec<Effect> {
        if self.is_disabled() {
            return Vec::new();
        }
        self.suggestions.clear();
        self.popup = SuggestionPopup::Closed;
        vec![Effect::SelectorBlurred {
            value: self.value().to_string(),
        }]
    }

    /// Compare the focus flag with the last observed focus and run the
    /// matching transition.
    pub fn sync_focus(&mut self) -> Vec<Effect> {
        let focused = self.focus.get();
        if focused == self.was_focused {
            return Vec::new();
        }
        self.was_focused = focused;
        if focused {
            self.reduce_focus_gained();
            Vec::new()
        } else {
            self.apply_focus_lost()
        }
    }

    /// Close the popup when a press landed outside the field since the last check.
    pub fn reduce_pointer_pressed(&mut self) {
        let pressed_outside = self.pointer.as_ref().is_some_and(PointerSubscription::take_outside_press);
        if pressed_outside && !self.is_disabled() {
            self.popup = SuggestionPopup::Closed;
        }
    }

    /// Record the rendered geometry used for hit testing.
    pub fn set_layout(&mut self, field_area: Rect, suggestion_areas: Vec<Rect>) {
        self.last_area = field_area;
        self.suggestion_areas = suggestion_areas;
        if let Some(pointer) = self.pointer.as_ref() {
            pointer.set_bounds(self.bounds());
        }
    }

    // ===== PRIVATE =====

    /// Field plus on-screen popup rows. Scrolled-out rows are empty rects and
    /// must not widen the area toward the origin.
    fn bounds(&self) -> Rect {
        self.suggestion_areas
            .iter()
            .filter(|area| !area.is_empty())
            .fold(self.last_area, |acc, area| acc.union(*area))
    }

    fn recompute(&mut self) {
        self.tokens = SuggestionEngine::resolve_tokens(self.catalog, self.field.display_value());
        self.suggestions = SuggestionEngine::compute_suggestions(self.catalog, &self.tokens);
    }

    fn reset_active_index(&mut self) {
        if let SuggestionPopup::Open { .. } = self.popup {
            self.popup = SuggestionPopup::Open { active_index: 0 };
        }
    }

    fn value_changed(&mut self) -> Vec<Effect> {
        self.recompute();
        let value = self.value().to_string();
        debug!(value = %value, suggestions = self.suggestions.len(), "selector value changed");
        vec![Effect::SelectorValueChanged(value)]
    }
}

impl HasFocus for SelectorFieldState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
