//! Application state for the settings screen.
//!
//! `App` owns every piece of state components read and mutate: the settings
//! navigation, the selector field, the pointer listeners and the focus tree.
//! Components never talk to each other directly; they return `Effect`s that
//! the runtime applies through the reducers here.

use std::{rc::Rc, sync::Arc};

use datascrub_types::{Route, SelectorCatalog};
use datascrub_util::UserPreferences;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::{
    TuiOptions,
    ui::{
        components::{SelectorFieldState, SettingsNavigationState, default_project_sections, pages::required_error},
        pointer::PointerListeners,
        theme::{self, Theme},
    },
};

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct SharedCtx {
    /// Active UI theme
    pub theme: Box<dyn Theme>,
    pub preferences: Arc<UserPreferences>,
    pub catalog: &'static SelectorCatalog,
}

impl SharedCtx {
    pub fn new(preferences: Arc<UserPreferences>) -> Self {
        let loaded = theme::load(preferences.preferred_theme().as_deref());
        debug!(theme = loaded.definition.id, "theme selected");
        Self {
            theme: loaded.theme,
            preferences,
            catalog: SelectorCatalog::standard(),
        }
    }
}

pub struct App {
    pub ctx: SharedCtx,
    /// Focus tree; rebuilt whenever the visible widgets change.
    pub focus: Rc<Focus>,
    pub nav: SettingsNavigationState,
    pub selector: SelectorFieldState,
    pub pointer_listeners: PointerListeners,
    pub current_route: Route,
    /// Selector value owned by the rule form; updated from the field's change effects.
    pub rule_from: String,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(options: TuiOptions) -> Self {
        let TuiOptions {
            initial_value,
            access,
            features,
            read_only,
            preferences,
        } = options;
        let ctx = SharedCtx::new(preferences);

        let nav = SettingsNavigationState::new(default_project_sections()).with_access(&access, &features);
        let current_route = if nav.contains_route(Route::SecurityAndPrivacy) {
            Route::SecurityAndPrivacy
        } else {
            nav.selected_item().map(|item| item.route).unwrap_or(Route::General)
        };

        let rule_from = initial_value.or_else(|| ctx.preferences.last_selector_value()).unwrap_or_default();
        let mut selector = SelectorFieldState::new(ctx.catalog);
        selector.set_value(&rule_from);
        selector.set_disabled(read_only);

        let mut app = Self {
            ctx,
            focus: Rc::default(),
            nav,
            selector,
            pointer_listeners: PointerListeners::new(),
            current_route,
            rule_from,
            container_focus: FocusFlag::named("app"),
        };
        app.nav.set_route(current_route);
        app.rebuild_focus();
        app
    }

    /// Rebuild the focus tree, keeping the current focus where possible.
    pub fn rebuild_focus(&mut self) {
        let old_focus = std::mem::take(&mut self.focus);
        self.focus = Rc::new(FocusBuilder::rebuild_for(self, Some(Rc::unwrap_or_clone(old_focus))));
        if self.focus.focused().is_none() {
            self.focus.first();
        }
    }

    // ===== REDUCERS =====

    /// Value reported by the selector field.
    pub fn apply_selector_changed(&mut self, value: String) {
        debug!(value = %value, "rule selector updated");
        self.selector.set_error(None);
        self.rule_from = value;
    }

    /// The selector lost focus: validate the rule form.
    pub fn apply_selector_blurred(&mut self, value: &str) {
        self.selector.set_error(required_error(value));
    }

    /// Persist the selector value so the next session starts from it.
    pub fn save_preferences(&self) {
        if let Err(error) = self.ctx.preferences.set_last_selector_value(&self.rule_from) {
            warn!(error = %error, "Failed to persist selector value");
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.nav);
        if self.current_route == Route::SecurityAndPrivacy && !self.selector.is_disabled() {
            builder.widget(&self.selector);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::pages::REQUIRED_FIELD_ERROR;

    fn options(initial_value: Option<&str>) -> TuiOptions {
        TuiOptions {
            initial_value: initial_value.map(str::to_string),
            access: vec!["project:read".into()],
            features: Vec::new(),
            read_only: false,
            preferences: Arc::new(UserPreferences::ephemeral()),
        }
    }

    #[test]
    fn starts_on_privacy_page_with_seeded_value() {
        let app = App::new(options(Some("$string && ")));
        assert_eq!(app.current_route, Route::SecurityAndPrivacy);
        assert_eq!(app.selector.value(), "$string && ");
        assert_eq!(app.rule_from, "$string && ");
        assert_eq!(app.nav.selected_item().map(|item| item.route), Some(Route::SecurityAndPrivacy));
    }

    #[test]
    fn falls_back_to_saved_preference() {
        let preferences = Arc::new(UserPreferences::ephemeral());
        preferences.set_last_selector_value("$user").expect("ephemeral save");
        let app = App::new(TuiOptions {
            preferences,
            ..options(None)
        });
        assert_eq!(app.selector.value(), "$user");
    }

    #[test]
    fn blur_validation_sets_and_clears_required_error() {
        let mut app = App::new(options(None));
        app.apply_selector_blurred("  ");
        assert_eq!(app.selector.error(), Some(REQUIRED_FIELD_ERROR));
        app.apply_selector_changed("$http".into());
        assert_eq!(app.selector.error(), None);
        app.apply_selector_blurred("$http");
        assert_eq!(app.selector.error(), None);
        assert_eq!(app.rule_from, "$http");
    }

    #[test]
    fn read_only_disables_selector() {
        let app = App::new(TuiOptions {
            read_only: true,
            ..options(Some("$sdk"))
        });
        assert!(app.selector.is_disabled());
    }

    #[test]
    fn save_writes_rule_value_to_preferences() {
        let mut app = App::new(options(None));
        app.apply_selector_changed("$span".into());
        app.save_preferences();
        assert_eq!(app.ctx.preferences.last_selector_value().as_deref(), Some("$span"));
    }
}
