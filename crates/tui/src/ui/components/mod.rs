//! UI components: settings navigation, pages, selector field, shared inputs.

pub mod common;
pub mod component;
pub mod pages;
pub mod selector_field;
pub mod settings_nav;

pub(crate) use component::Component;
pub use pages::{DataPrivacyComponent, PlaceholderComponent};
pub use selector_field::{SelectorFieldComponent, SelectorFieldState, SuggestionEngine, SuggestionPopup};
pub use settings_nav::{NavItem, NavSection, SettingsNavComponent, SettingsNavigationState, default_project_sections};
