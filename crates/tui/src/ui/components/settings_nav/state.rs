use datascrub_types::Route;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};

/// A single entry in the settings navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Text shown in the list.
    pub label: String,
    /// Page opened when the item is activated.
    pub route: Route,
    /// Access scope the user must hold to see the item.
    pub required_access: Option<String>,
    /// Feature flag that must be enabled to see the item.
    pub required_feature: Option<String>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
            required_access: None,
            required_feature: None,
        }
    }

    pub fn requires_access(mut self, scope: impl Into<String>) -> Self {
        self.required_access = Some(scope.into());
        self
    }

    pub fn requires_feature(mut self, feature: impl Into<String>) -> Self {
        self.required_feature = Some(feature.into());
        self
    }

    /// Whether the item is visible for the given access scopes and features.
    pub fn is_visible(&self, access: &[String], features: &[String]) -> bool {
        let allowed = |required: &Option<String>, granted: &[String]| required.as_ref().is_none_or(|needed| granted.contains(needed));
        allowed(&self.required_access, access) && allowed(&self.required_feature, features)
    }
}

/// A titled group of navigation items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: String,
    pub items: Vec<NavItem>,
}

impl NavSection {
    pub fn new(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Project settings layout shipped with the binary.
pub fn default_project_sections() -> Vec<NavSection> {
    vec![
        NavSection::new(
            "Project",
            vec![
                NavItem::new("General Settings", Route::General),
                NavItem::new("Project Teams", Route::Teams).requires_access("project:write"),
                NavItem::new("Alerts", Route::Alerts),
                NavItem::new("Tags", Route::Tags),
                NavItem::new("Environments", Route::Environments),
                NavItem::new("Security & Privacy", Route::SecurityAndPrivacy),
            ],
        ),
        NavSection::new("SDK Setup", vec![NavItem::new("Client Keys (DSN)", Route::ClientKeys)]),
        NavSection::new(
            "Processing",
            vec![NavItem::new("Debug Files", Route::DebugFiles).requires_feature("debug-files")],
        ),
    ]
}

/// State for the settings navigation list.
///
/// Holds only the sections visible to the current user; selection is an index
/// into the flattened item list. The whole list is one focus leaf.
#[derive(Debug, Clone)]
pub struct SettingsNavigationState {
    sections: Vec<NavSection>,
    selected_index: usize,
    focus: FocusFlag,
    /// Last rendered area of the list; used for mouse focus.
    pub last_area: Rect,
    /// Last rendered item rows, index-aligned with the flattened items.
    pub per_item_areas: Vec<Rect>,
}

impl Default for SettingsNavigationState {
    fn default() -> Self {
        Self::new(default_project_sections())
    }
}

impl SettingsNavigationState {
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self {
            sections,
            selected_index: 0,
            focus: FocusFlag::named("settings.nav"),
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
        }
    }

    /// Drop items the user may not see, then sections left empty.
    pub fn with_access(mut self, access: &[String], features: &[String]) -> Self {
        for section in &mut self.sections {
            section.items.retain(|item| item.is_visible(access, features));
        }
        self.sections.retain(|section| !section.items.is_empty());
        self.selected_index = self.selected_index.min(self.item_count().saturating_sub(1));
        self
    }

    // ===== SELECTORS =====

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    pub fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&NavItem> {
        self.items().nth(self.selected_index)
    }

    pub fn is_focused(&self) -> bool {
        self.focus.get()
    }

    pub fn contains_route(&self, route: Route) -> bool {
        self.items().any(|item| item.route == route)
    }

    /// Item row under `(column, row)`, if any.
    pub fn item_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.per_item_areas.iter().position(|area| area.contains(position))
    }

    // ===== REDUCERS =====

    pub fn reduce_select_next(&mut self) {
        let last = self.item_count().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(last);
    }

    pub fn reduce_select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Select `index` when it names a visible item; returns that item's route.
    pub fn apply_select_index(&mut self, index: usize) -> Option<Route> {
        let route = self.items().nth(index)?.route;
        self.selected_index = index;
        Some(route)
    }

    /// Move the selection to `route`. Returns `None` and leaves the selection
    /// unchanged when access or feature flags hide the route.
    pub fn set_route(&mut self, route: Route) -> Option<Route> {
        let index = self.items().position(|item| item.route == route)?;
        self.selected_index = index;
        Some(route)
    }
}

impl HasFocus for SettingsNavigationState {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn scopes(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn access_and_features_filter_items() {
        let full = SettingsNavigationState::default().with_access(&scopes(&["project:write"]), &scopes(&["debug-files"]));
        assert_eq!(full.item_count(), 8);

        let limited = SettingsNavigationState::default().with_access(&scopes(&["project:read"]), &[]);
        assert!(!limited.contains_route(Route::Teams));
        assert!(!limited.contains_route(Route::DebugFiles));
        assert!(limited.contains_route(Route::SecurityAndPrivacy));
        let titles: Vec<&str> = limited.sections().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Project", "SDK Setup"]);
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut nav = SettingsNavigationState::default().with_access(&[], &[]);
        nav.reduce_select_previous();
        assert_eq!(nav.selected_index(), 0);
        for _ in 0..20 {
            nav.reduce_select_next();
        }
        assert_eq!(nav.selected_index(), nav.item_count() - 1);
        assert_eq!(nav.selected_item().map(|item| item.route), Some(Route::ClientKeys));
    }

    #[test]
    fn set_route_and_index_selection() {
        let mut nav = SettingsNavigationState::default();
        assert_eq!(nav.set_route(Route::SecurityAndPrivacy), Some(Route::SecurityAndPrivacy));
        assert_eq!(nav.selected_item().map(|item| item.label.as_str()), Some("Security & Privacy"));
        assert_eq!(nav.apply_select_index(0), Some(Route::General));
        assert_eq!(nav.apply_select_index(99), None);
        assert_eq!(nav.selected_index(), 0);
    }

    #[test]
    fn hidden_route_keeps_selection() {
        let mut nav = SettingsNavigationState::default().with_access(&scopes(&["project:read"]), &[]);
        assert_eq!(nav.set_route(Route::SecurityAndPrivacy), Some(Route::SecurityAndPrivacy));
        let selected = nav.selected_index();
        assert_eq!(nav.set_route(Route::Teams), None);
        assert_eq!(nav.set_route(Route::DebugFiles), None);
        assert_eq!(nav.selected_index(), selected);
    }

    #[test]
    fn item_hit_testing_uses_rendered_rows() {
        let mut nav = SettingsNavigationState::default();
        nav.per_item_areas = vec![Rect::new(1, 2, 20, 1), Rect::new(1, 3, 20, 1)];
        assert_eq!(nav.item_index_at(4, 3), Some(1));
        assert_eq!(nav.item_index_at(30, 3), None);
    }
}
