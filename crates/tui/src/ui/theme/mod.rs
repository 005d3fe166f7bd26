//! Theme styling for the TUI.
//!
//! Two truecolor palettes (Nord, Dracula) mapped onto semantic roles, plus
//! helper builders for Ratatui widgets and styles. Prefer these helpers over
//! hard-coding colors so every page stays consistent.

use std::env;

use tracing::{debug, warn};

pub mod catalog;
pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::{Theme, ThemeRoles};

/// Environment variable that overrides the persisted theme preference.
pub const THEME_ENV: &str = "DATASCRUB_THEME";

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

/// Selects a theme: `DATASCRUB_THEME` first, then the persisted preference, then Nord.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if let Ok(theme_name) = env::var(THEME_ENV) {
        match catalog::resolve(theme_name.trim()) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => warn!(theme = %theme_name, "Unknown theme in {THEME_ENV}; ignoring"),
        }
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = catalog::resolve(name.trim())
    {
        debug!(theme = definition.id, "Using persisted theme preference");
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(catalog::default_definition())
}
