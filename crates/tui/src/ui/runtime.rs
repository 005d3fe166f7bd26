//! Runtime: event loop and input routing for the settings screen.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode,
//!   mouse capture).
//! - Forward terminal input from a dedicated blocking reader to the loop.
//! - Route input to the root view and apply the returned `Effect`s.
//!
//! Every left press is first reported to the pointer listeners so that
//! click-outside subscribers see it before the press reaches any component.
//! After each event the focus tree is compared against the selector's last
//! known focus so blur validation runs no matter what moved focus.
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use datascrub_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};
use tracing::{debug, warn};

use crate::TuiOptions;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

type Backend = CrosstermBackend<std::io::Stdout>;

/// Upper bound on effect rounds per input event; a component that keeps
/// producing effects in response to its own effects is cut off here.
const MAX_EFFECT_ROUNDS: usize = 16;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel. The thread exits once the
/// receiver is dropped.
fn spawn_input_thread() -> Result<mpsc::Receiver<Event>> {
    let (sender, receiver) = mpsc::channel(256);
    std::thread::Builder::new().name("datascrub-input".into()).spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    })?;
    Ok(receiver)
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    // Structure may have changed since the last frame (route switch, disabled selector).
    app.rebuild_focus();
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Route one terminal event through the root view.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    let mut effects = match input_event {
        Event::Key(key_event) if key_event.is_press() => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => {
            let mut effects = Vec::new();
            if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) {
                app.pointer_listeners.dispatch_press(mouse_event.column, mouse_event.row);
                effects.extend(main_view.handle_message(
                    app,
                    Msg::PointerPressed {
                        column: mouse_event.column,
                        row: mouse_event.row,
                    },
                ));
            }
            effects.extend(main_view.handle_mouse_events(app, mouse_event));
            effects
        }
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    };
    effects.extend(main_view.handle_message(app, Msg::FocusChanged));
    effects
}

/// Apply effects until none remain. Returns `true` when the user asked to quit.
fn process_effects(app: &mut App, main_view: &mut MainView, mut effects: Vec<Effect>) -> bool {
    for _ in 0..MAX_EFFECT_ROUNDS {
        if effects.is_empty() {
            return false;
        }
        let mut follow_ups = Vec::new();
        for effect in effects.drain(..) {
            match effect {
                Effect::SelectorValueChanged(value) => app.apply_selector_changed(value),
                Effect::SelectorBlurred { value } => app.apply_selector_blurred(&value),
                Effect::SwitchTo(route) => {
                    debug!(route = %route.title(), "switching settings page");
                    main_view.set_current_route(app, route);
                    // The outgoing page may have held focus.
                    follow_ups.extend(main_view.handle_message(app, Msg::FocusChanged));
                }
                Effect::Quit => return true,
            }
        }
        effects = follow_ups;
    }
    if !effects.is_empty() {
        warn!(pending = effects.len(), "dropping effects after too many rounds");
    }
    false
}

async fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread()?;
    render(terminal, app, main_view)?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input reader stopped; shut down cleanly.
                    break;
                };
                let effects = handle_input_event(app, main_view, event);
                if process_effects(app, main_view, effects) {
                    break;
                }
            }
            _ = signal::ctrl_c() => { break; }
        }

        render(terminal, app, main_view)?;
    }
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop and restores the terminal on exit, also when the loop fails.
pub async fn run_app(options: TuiOptions) -> Result<()> {
    let mut app = App::new(options);
    let mut main_view = MainView::new();
    let initial_route = app.current_route;
    main_view.set_current_route(&mut app, initial_route);
    let effects = main_view.handle_message(&mut app, Msg::FocusChanged);
    process_effects(&mut app, &mut main_view, effects);

    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    let cleanup = cleanup_terminal(&mut terminal);

    app.save_preferences();
    outcome?;
    cleanup
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use datascrub_types::Route;
    use datascrub_util::UserPreferences;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::ui::components::{SuggestionPopup, pages::REQUIRED_FIELD_ERROR};

    fn setup() -> (App, MainView) {
        let mut app = App::new(TuiOptions {
            initial_value: None,
            access: vec!["project:read".into()],
            features: Vec::new(),
            read_only: false,
            preferences: Arc::new(UserPreferences::ephemeral()),
        });
        let mut main_view = MainView::new();
        let route = app.current_route;
        main_view.set_current_route(&mut app, route);
        let effects = main_view.handle_message(&mut app, Msg::FocusChanged);
        assert!(!process_effects(&mut app, &mut main_view, effects));
        (app, main_view)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn run(app: &mut App, main_view: &mut MainView, event: Event) -> bool {
        let effects = handle_input_event(app, main_view, event);
        process_effects(app, main_view, effects)
    }

    #[test]
    fn accepted_suggestion_updates_rule_value() {
        let (mut app, mut main_view) = setup();
        for c in "$ht".chars() {
            assert!(!run(&mut app, &mut main_view, press(KeyCode::Char(c))));
        }
        assert_eq!(app.rule_from, "$ht");
        assert!(!run(&mut app, &mut main_view, press(KeyCode::Enter)));
        assert_eq!(app.rule_from, "$http");
        assert_eq!(app.selector.value(), "$http");
    }

    #[test]
    fn tabbing_away_from_empty_selector_shows_required_error() {
        let (mut app, mut main_view) = setup();
        assert!(app.selector.is_focused());
        assert!(!run(&mut app, &mut main_view, press(KeyCode::Tab)));
        assert!(app.nav.is_focused());
        assert_eq!(app.selector.error(), Some(REQUIRED_FIELD_ERROR));
    }

    #[test]
    fn switching_page_blurs_selector() {
        let (mut app, mut main_view) = setup();
        assert!(!process_effects(&mut app, &mut main_view, vec![Effect::SwitchTo(Route::Tags)]));
        assert_eq!(app.current_route, Route::Tags);
        assert!(app.pointer_listeners.is_empty());
        assert_eq!(app.selector.error(), Some(REQUIRED_FIELD_ERROR));
    }

    #[test]
    fn press_outside_closes_popup() {
        let (mut app, mut main_view) = setup();
        assert_ne!(app.selector.popup(), SuggestionPopup::Closed);
        app.selector.set_layout(ratatui::layout::Rect::new(30, 4, 40, 3), Vec::new());
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        run(&mut app, &mut main_view, Event::Mouse(click));
        assert_eq!(app.selector.popup(), SuggestionPopup::Closed);
    }

    #[test]
    fn press_above_scrolled_popup_closes_it() {
        let (mut app, mut main_view) = setup();
        assert!(app.selector.suggestions().len() > 8);
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal.draw(|frame| main_view.render(frame, frame.area(), &mut app)).expect("draw");
        assert_ne!(app.selector.popup(), SuggestionPopup::Closed);

        // Page intro: left of and above the popup's bottom-right corner, outside field and rows.
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert!(!run(&mut app, &mut main_view, Event::Mouse(click)));
        assert_eq!(app.selector.popup(), SuggestionPopup::Closed);
    }

    #[test]
    fn quit_effect_stops_processing() {
        let (mut app, mut main_view) = setup();
        assert!(process_effects(
            &mut app,
            &mut main_view,
            vec![Effect::Quit, Effect::SwitchTo(Route::Tags)]
        ));
        assert_eq!(app.current_route, Route::SecurityAndPrivacy);
    }
}
