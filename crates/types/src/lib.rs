pub mod selector;

pub use selector::{ResolvedToken, SelectorCatalog, Suggestion, SuggestionKind, join_literals};

use serde::{Deserialize, Serialize};

/// Settings pages reachable from the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    General,
    Teams,
    Alerts,
    Tags,
    Environments,
    SecurityAndPrivacy,
    ClientKeys,
    DebugFiles,
}

impl Route {
    /// Page heading shown above the route's content.
    pub fn title(&self) -> &'static str {
        match self {
            Route::General => "General Settings",
            Route::Teams => "Project Teams",
            Route::Alerts => "Alerts",
            Route::Tags => "Tags",
            Route::Environments => "Environments",
            Route::SecurityAndPrivacy => "Security & Privacy",
            Route::ClientKeys => "Client Keys (DSN)",
            Route::DebugFiles => "Debug Files",
        }
    }
}

/// Messages that can be sent to update the application state.
///
/// This enum defines all the possible user actions and system events
/// that can trigger state changes in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Terminal resized
    Resize(u16, u16),
    /// A left mouse button went down somewhere on screen.
    PointerPressed { column: u16, row: u16 },
    /// Keyboard focus moved; components compare against their own flags.
    FocusChanged,
}

/// Side effects that can be triggered by state changes.
///
/// Components report effects rather than touching application-wide state;
/// the runtime applies them after the handler returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The selector field's joined value changed (typing or selection).
    SelectorValueChanged(String),
    /// The selector field lost focus.
    SelectorBlurred { value: String },
    /// Change the settings page
    SwitchTo(Route),
    /// Leave the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_serializes_kebab_case() {
        let json = serde_json::to_string(&Route::SecurityAndPrivacy).expect("serialize route");
        assert_eq!(json, "\"security-and-privacy\"");
        let back: Route = serde_json::from_str("\"client-keys\"").expect("deserialize route");
        assert_eq!(back, Route::ClientKeys);
    }

    #[test]
    fn route_titles_are_distinct() {
        let routes = [
            Route::General,
            Route::Teams,
            Route::Alerts,
            Route::Tags,
            Route::Environments,
            Route::SecurityAndPrivacy,
            Route::ClientKeys,
            Route::DebugFiles,
        ];
        let mut titles: Vec<&str> = routes.iter().map(Route::title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), routes.len());
    }
}
