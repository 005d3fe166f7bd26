//! # Datascrub settings TUI
//!
//! A terminal settings screen for editing data-privacy rules. The left column
//! lists the project settings pages; the Security & Privacy page hosts the
//! selector field, a text input that autocompletes selector tokens such as
//! `$string` or `&&` from a fixed catalog.
//!
//! ## Architecture
//!
//! - [`SuggestionEngine`] is pure: it tokenizes a value and computes the
//!   suggestions for the token being edited.
//! - Component state (`SelectorFieldState`, `SettingsNavigationState`) lives
//!   on `App` and changes only through reducer methods.
//! - Components translate input into reducer calls and report `Effect`s the
//!   runtime applies after each event.

mod app;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use datascrub_util::UserPreferences;

pub use ui::components::SuggestionEngine;
pub use ui::theme::THEME_ENV;

/// Canonical id of the theme named `name` (id or alias, any case).
pub fn resolve_theme_id(name: &str) -> Option<&'static str> {
    ui::theme::catalog::resolve(name.trim()).map(|definition| definition.id)
}

/// Startup options for [`run`].
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Selector value to start from; falls back to the last saved value.
    pub initial_value: Option<String>,
    /// Access scopes granted to the user; gate navigation items.
    pub access: Vec<String>,
    /// Enabled feature flags; gate navigation items.
    pub features: Vec<String>,
    /// Render the selector disabled.
    pub read_only: bool,
    pub preferences: Arc<UserPreferences>,
}

/// Runs the settings screen until the user quits.
///
/// The terminal is restored before returning, also when the event loop fails.
/// The final selector value is saved to the preferences on exit.
pub async fn run(options: TuiOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
