mod settings_nav_component;
mod state;

pub use settings_nav_component::SettingsNavComponent;
pub use state::{NavItem, NavSection, SettingsNavigationState, default_project_sections};
