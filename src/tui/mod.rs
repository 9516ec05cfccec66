//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (request spinner, a toast or banner waiting to expire):
//!   draws every ~80ms.
//! - **Idle**: sleeps up to 500ms in the event poll and only redraws on
//!   input, background actions, or terminal resize.
//!
//! The cursor uses a `SteadyBlock` style rather than a blinking one:
//! `set_cursor_position` resets the terminal's blink timer on every `draw()`,
//! which makes a blinking cursor look erratic under continuous redraws.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::api::{ApiClient, ApiGateway, NewPost};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Page, UsersPhase};
use crate::tui::component::EventHandler;
use crate::tui::components::{ContactEvent, ContactPanel, PageViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
///
/// Rebuilt pieces of this are what give navigation its "fresh page" feel:
/// every dispatch resets the scroll offset and the contact panel's cursors
/// while the core state keeps whatever the reducer decided.
pub struct TuiState {
    pub page_view: PageViewState,
    pub contact: ContactPanel,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            page_view: PageViewState::new(),
            contact: ContactPanel::new(),
        }
    }

    /// Scroll home and drop per-field cursors after a dispatch.
    fn reset_for_navigation(&mut self) {
        self.page_view.reset();
        self.contact = ContactPanel::new();
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable the Kitty keyboard protocol unconditionally (cleaner
        // Ctrl/Alt chord reporting). Detection via
        // supports_keyboard_enhancement() fails in WSL, but the protocol is
        // harmlessly ignored by terminals that don't support it.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Cursor visible for form editing
            SetCursorStyle::SteadyBlock, // Non-blinking under continuous redraws
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Show // Leave the shell with a visible cursor
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = ApiClient::new(Some(config.base_url.clone()));
    let loading = client.gate();
    let gateway: Arc<dyn ApiGateway> = Arc::new(client);

    let mut app = App::new(gateway, loading, &config.initial_route);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions coming back from background requests
    let (tx, rx) = mpsc::channel();

    // Land on the requested fragment before the first frame, so deep links
    // and reloads start on their page rather than flashing home.
    let effect = update(&mut app, Action::Dispatch);
    run_effect(&app, effect, &tx);
    let mut seen_generation = app.generation;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.expire_transients(std::time::Instant::now()) {
            needs_redraw = true;
        }

        let animating = app.animating();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            if let Some(action) = route_event(&mut app, &mut tui, frame_area, event) {
                should_quit |= step(&mut app, &tx, action);
            }
        }

        // Handle background task actions (request completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= step(&mut app, &tx, action);
        }

        // A dispatch ran somewhere above: fresh page, fresh presentation.
        if app.generation != seen_generation {
            seen_generation = app.generation;
            tui.reset_for_navigation();
            needs_redraw = true;
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs one action through the reducer and executes whatever effect falls
/// out. Returns true when the app should exit.
fn step(app: &mut App, tx: &mpsc::Sender<Action>, action: Action) -> bool {
    let effect = update(app, action);
    if effect == Effect::Quit {
        return true;
    }
    run_effect(app, effect, tx);
    false
}

fn run_effect(app: &App, effect: Effect, tx: &mpsc::Sender<Action>) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::FetchUsers { generation } => {
            spawn_users_fetch(Arc::clone(&app.gateway), generation, tx.clone());
        }
        Effect::SubmitContact { generation, post } => {
            spawn_contact_submission(Arc::clone(&app.gateway), generation, post, tx.clone());
        }
    }
}

/// Translates a terminal event into an action. Presentation-only events
/// (scrolling, focus moves, text editing) are handled here and produce no
/// action at all.
fn route_event(
    app: &mut App,
    tui: &mut TuiState,
    frame_area: Rect,
    event: TuiEvent,
) -> Option<Action> {
    match event {
        // Resize just needs the redraw that's already been flagged
        TuiEvent::Resize => None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::NavShortcut(route) => Some(Action::Navigate(route.path().to_string())),
        TuiEvent::Back => Some(Action::GoBack),
        TuiEvent::Forward => Some(Action::GoForward),
        TuiEvent::Escape => {
            if app.notification.is_some() {
                Some(Action::DismissNotification)
            } else {
                None
            }
        }
        TuiEvent::MouseClick(column, row) => ui::nav_hit_test(column, row, frame_area)
            .map(|route| Action::Navigate(route.path().to_string())),
        // Everything else is page-local
        event => match &mut app.page {
            Page::Contact(form) => match tui.contact.handle_event(form, &event) {
                Some(ContactEvent::Submit) => Some(Action::SubmitContact),
                None => None,
            },
            Page::Users(phase) => match event {
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::InputChar('r') => Some(Action::RefreshUsers),
                TuiEvent::Submit if matches!(phase, UsersPhase::Failed(_)) => {
                    Some(Action::RefreshUsers)
                }
                TuiEvent::Backspace => Some(Action::GoBack),
                ref other => {
                    tui.page_view.handle_event(other);
                    None
                }
            },
            _ => match event {
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::Backspace => Some(Action::GoBack),
                ref other => {
                    tui.page_view.handle_event(other);
                    None
                }
            },
        },
    }
}

fn spawn_users_fetch(gateway: Arc<dyn ApiGateway>, generation: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning users fetch (generation {generation})");
    tokio::spawn(async move {
        let result = gateway.users().await;
        if let Err(e) = &result {
            info!("Users fetch failed: {e}");
        }
        if tx.send(Action::UsersLoaded { generation, result }).is_err() {
            warn!("Failed to deliver users result: receiver dropped");
        }
    });
}

fn spawn_contact_submission(
    gateway: Arc<dyn ApiGateway>,
    generation: u64,
    post: NewPost,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning contact submission (generation {generation})");
    tokio::spawn(async move {
        let result = gateway.create_post(&post).await;
        if let Err(e) = &result {
            info!("Contact submission failed: {e}");
        }
        if tx
            .send(Action::ContactSubmitted { generation, result })
            .is_err()
        {
            warn!("Failed to deliver submission result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_app_at};

    const FRAME: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn dispatched(fragment: &str) -> App {
        let mut app = test_app_at(fragment);
        update(&mut app, Action::Dispatch);
        app
    }

    #[test]
    fn test_q_quits_outside_text_input() {
        let mut app = dispatched("");
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(&mut app, &mut tui, FRAME, TuiEvent::InputChar('q')),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_q_types_into_the_contact_form() {
        let mut app = dispatched("/contact");
        let mut tui = TuiState::new();
        let action = route_event(&mut app, &mut tui, FRAME, TuiEvent::InputChar('q'));
        assert!(action.is_none());
        match &app.page {
            Page::Contact(form) => assert_eq!(form.name, "q"),
            other => panic!("expected contact page, got {other:?}"),
        }
    }

    #[test]
    fn test_r_refreshes_the_users_page() {
        let mut app = dispatched("/users");
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(&mut app, &mut tui, FRAME, TuiEvent::InputChar('r')),
            Some(Action::RefreshUsers)
        ));

        // elsewhere 'r' is just a key with no binding
        let mut home = dispatched("");
        assert!(route_event(&mut home, &mut tui, FRAME, TuiEvent::InputChar('r')).is_none());
    }

    #[test]
    fn test_enter_retries_only_after_a_failure() {
        let mut app = dispatched("/users");
        let mut tui = TuiState::new();
        assert!(route_event(&mut app, &mut tui, FRAME, TuiEvent::Submit).is_none());

        app.page = Page::Users(UsersPhase::Failed("HTTP error! status: 500".into()));
        assert!(matches!(
            route_event(&mut app, &mut tui, FRAME, TuiEvent::Submit),
            Some(Action::RefreshUsers)
        ));
    }

    #[test]
    fn test_escape_dismisses_a_toast_only_when_one_is_up() {
        let mut app = dispatched("");
        let mut tui = TuiState::new();
        assert!(route_event(&mut app, &mut tui, FRAME, TuiEvent::Escape).is_none());

        app.notify(crate::core::state::NoticeKind::Info, "hi");
        assert!(matches!(
            route_event(&mut app, &mut tui, FRAME, TuiEvent::Escape),
            Some(Action::DismissNotification)
        ));
    }

    #[test]
    fn test_nav_clicks_navigate_and_container_clicks_do_not() {
        let mut app = dispatched("");
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(&mut app, &mut tui, FRAME, TuiEvent::MouseClick(12, 1)),
            Some(Action::Navigate(path)) if path == "/"
        ));
        assert!(
            route_event(&mut app, &mut tui, FRAME, TuiEvent::MouseClick(12, 5)).is_none()
        );
    }

    #[test]
    fn test_backspace_goes_back_except_while_editing() {
        let mut app = dispatched("");
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(&mut app, &mut tui, FRAME, TuiEvent::Backspace),
            Some(Action::GoBack)
        ));

        let mut contact = dispatched("/contact");
        assert!(route_event(&mut contact, &mut tui, FRAME, TuiEvent::Backspace).is_none());
    }

    #[test]
    fn test_shortcut_events_become_navigations() {
        let mut app = dispatched("");
        let mut tui = TuiState::new();
        assert!(matches!(
            route_event(
                &mut app,
                &mut tui,
                FRAME,
                TuiEvent::NavShortcut(crate::core::route::Route::Users)
            ),
            Some(Action::Navigate(path)) if path == "/users"
        ));
    }

    #[test]
    fn test_resize_produces_no_action() {
        let mut app = dispatched("");
        let mut tui = TuiState::new();
        assert!(route_event(&mut app, &mut tui, FRAME, TuiEvent::Resize).is_none());
    }

    #[test]
    fn test_scroll_events_stay_in_the_presentation_layer() {
        let mut app = dispatched("/about");
        let mut tui = TuiState::new();
        assert!(route_event(&mut app, &mut tui, FRAME, TuiEvent::ScrollDown).is_none());
        assert!(tui.page_view.scrolled());
    }
}
