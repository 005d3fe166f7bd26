//! Component system for the settings screen.
//!
//! Components are self-contained UI elements: they read and mutate the state
//! they are responsible for on [`App`], render themselves into a `Rect`, and
//! report application-wide side effects as [`Effect`]s instead of applying
//! them directly.

use crossterm::event::{KeyEvent, MouseEvent};
use datascrub_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A UI component with its own event handling and rendering.
///
/// Lifecycle:
/// 1. `mount()` when the component becomes part of the visible tree (acquire
///    listeners, seed state);
/// 2. `handle_message()`, `handle_key_events()`, `handle_mouse_events()` while
///    mounted;
/// 3. `render()` each frame;
/// 4. `unmount()` before it is replaced (release whatever `mount` acquired).
pub(crate) trait Component {
    /// Called when the component enters the visible tree.
    fn mount(&mut self, _app: &mut App) {}

    /// Called before the component leaves the visible tree.
    fn unmount(&mut self, _app: &mut App) {}

    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events; components hit-test against their last rendered area.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Rendering may record layout (areas used for hit testing) on the state
    /// it draws, but must not change anything observable through effects.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the footer while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Areas this component splits `area` into.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
