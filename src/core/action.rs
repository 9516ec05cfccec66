//! # Actions
//!
//! Everything that can happen in Placard becomes an `Action`.
//! User presses Ctrl+3? That's `Action::Navigate("/users")`.
//! A fetch completes? That's `Action::UsersLoaded { generation, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the [`Effect`] the caller must execute. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and
//! effects. And debuggable: log every action, replay the exact session.

use log::{debug, info, warn};

use crate::api::{FetchError, NewPost, Post, User};
use crate::core::route::Route;
use crate::core::state::{App, FormFeedback, NoticeKind, Page, UsersPhase};

#[derive(Debug)]
pub enum Action {
    /// Run one dispatch cycle on the current fragment without navigating.
    /// Sent once at startup, so deep links land on their page.
    Dispatch,
    /// Set the fragment and dispatch (nav click, shortcut, link).
    Navigate(String),
    /// History moves. No-ops at the ends of the stacks.
    GoBack,
    GoForward,
    /// Users page: fetch again on demand (refresh key, retry affordance).
    RefreshUsers,
    /// Completion of a users fetch spawned under `generation`.
    UsersLoaded {
        generation: u64,
        result: Result<Vec<User>, FetchError>,
    },
    /// Submit the contact form as-is. Validation happens here; an
    /// incomplete form produces no effect at all.
    SubmitContact,
    /// Completion of a contact submission spawned under `generation`.
    ContactSubmitted {
        generation: u64,
        result: Result<Post, FetchError>,
    },
    /// Clear the toast before its deadline.
    DismissNotification,
    Quit,
}

/// I/O the caller performs after `update` returns. Exactly one per action;
/// fetch effects re-enter as completion actions tagged with the generation
/// they were spawned under.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    FetchUsers { generation: u64 },
    SubmitContact { generation: u64, post: NewPost },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Dispatch => dispatch(app),

        Action::Navigate(path) => {
            debug!("navigate: {path}");
            app.router.navigate(&path);
            dispatch(app)
        }

        Action::GoBack => {
            if app.router.go_back() {
                debug!("history: back to {}", app.router.current_path());
                dispatch(app)
            } else {
                Effect::None
            }
        }

        Action::GoForward => {
            if app.router.go_forward() {
                debug!("history: forward to {}", app.router.current_path());
                dispatch(app)
            } else {
                Effect::None
            }
        }

        Action::RefreshUsers => match &mut app.page {
            Page::Users(phase) => {
                debug!("users: refresh requested");
                *phase = UsersPhase::Loading;
                Effect::FetchUsers {
                    generation: app.generation,
                }
            }
            _ => Effect::None,
        },

        Action::UsersLoaded { generation, result } => {
            if generation != app.generation {
                debug!(
                    "users: discarding stale result (generation {generation}, now {})",
                    app.generation
                );
                return Effect::None;
            }
            let phase = match result {
                Ok(users) => {
                    info!("users: loaded {}", users.len());
                    UsersPhase::Loaded(users)
                }
                Err(e) => {
                    warn!("users: fetch failed: {e}");
                    app.notify(NoticeKind::Error, "Failed to load the user list");
                    UsersPhase::Failed(e.to_string())
                }
            };
            if let Page::Users(existing) = &mut app.page {
                *existing = phase;
            }
            Effect::None
        }

        Action::SubmitContact => match &mut app.page {
            Page::Contact(form) => {
                if !form.is_complete() {
                    debug!("contact: submission blocked, required field missing");
                    form.feedback = Some(FormFeedback::failure("Please fill in all fields."));
                    return Effect::None;
                }
                form.feedback = None;
                let post = form.to_post();
                info!("contact: submitting \"{}\"", post.title);
                Effect::SubmitContact {
                    generation: app.generation,
                    post,
                }
            }
            _ => Effect::None,
        },

        Action::ContactSubmitted { generation, result } => {
            if generation != app.generation {
                debug!(
                    "contact: discarding stale result (generation {generation}, now {})",
                    app.generation
                );
                return Effect::None;
            }
            let mut sent = false;
            if let Page::Contact(form) = &mut app.page {
                match result {
                    Ok(post) => {
                        info!("contact: accepted as post {}", post.id);
                        form.reset_fields();
                        form.feedback = Some(FormFeedback::success("Message sent successfully!"));
                        sent = true;
                    }
                    Err(e) => {
                        warn!("contact: submission failed: {e}");
                        form.feedback =
                            Some(FormFeedback::failure(format!("Failed to send message: {e}")));
                    }
                }
            }
            if sent {
                app.notify(NoticeKind::Success, "Message sent successfully!");
            }
            Effect::None
        }

        Action::DismissNotification => {
            app.notification = None;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// One dispatch cycle: advance the generation, resolve the current path,
/// mark the active affordance, and replace the container content. A miss
/// is a display state (not-found), never an error.
fn dispatch(app: &mut App) -> Effect {
    app.generation = app.generation.wrapping_add(1);
    let path = app.router.current_path().to_string();

    match app.router.resolve() {
        Some(route) => {
            debug!("dispatch: {path} -> {route:?} (generation {})", app.generation);
            app.active = Some(route);
            app.page = Page::initial(route);
            match route {
                Route::Users => Effect::FetchUsers {
                    generation: app.generation,
                },
                _ => Effect::None,
            }
        }
        None => {
            info!("dispatch: no route registered for {path}");
            app.active = None;
            app.page = Page::NotFound { path };
            Effect::None
        }
    }
}
