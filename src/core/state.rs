//! # Application State
//!
//! Core business state for Placard. This module contains domain logic only -
//! no TUI-specific types. Presentation state (scroll offsets, cursors, list
//! selection) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── gateway: Arc<dyn ApiGateway>   // REST transport
//! ├── router: Router                 // path table + fragment + history
//! ├── page: Page                     // container content, replaced per dispatch
//! ├── active: Option<Route>          // nav affordance marked active
//! ├── generation: u64                // dispatch counter for stale-result discard
//! ├── loading: LoadingGate           // HTTP loading indicator mirror
//! └── notification: Option<Notification>  // transient toast
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! except for in-place text editing on the contact form, which the form
//! widget performs directly between submissions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{ApiGateway, LoadingGate, NewPost, User};
use crate::core::route::Route;
use crate::core::router::Router;

/// How long toasts and the form's success banner stay up.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

pub struct App {
    pub gateway: Arc<dyn ApiGateway>,
    pub router: Router,
    /// Container content. Fully replaced on every dispatch.
    pub page: Page,
    /// Nav affordance currently marked active. `None` when the current
    /// path resolved to nothing.
    pub active: Option<Route>,
    /// Dispatch generation. Bumped once per dispatch cycle; async
    /// completions carry the generation they were spawned under and stale
    /// ones are discarded instead of mutating the container.
    pub generation: u64,
    pub loading: LoadingGate,
    pub notification: Option<Notification>,
}

impl App {
    /// A fresh application positioned at `initial_fragment` (empty = `/`).
    ///
    /// No dispatch has run yet; the bootstrap sends `Action::Dispatch`
    /// before the first draw so deep links and reloads land on their page.
    pub fn new(gateway: Arc<dyn ApiGateway>, loading: LoadingGate, initial_fragment: &str) -> Self {
        Self {
            gateway,
            router: Router::with_default_routes(initial_fragment),
            page: Page::Home,
            active: None,
            generation: 0,
            loading,
            notification: None,
        }
    }

    /// Raises a toast, replacing any existing one.
    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notification = Some(Notification {
            kind,
            text: text.into(),
            deadline: Instant::now() + NOTICE_TTL,
        });
    }

    /// Drops expired transients (toast, form success banner). Returns true
    /// if anything changed so the caller knows to redraw.
    pub fn expire_transients(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.notification.as_ref().is_some_and(|n| now >= n.deadline) {
            self.notification = None;
            changed = true;
        }

        if let Page::Contact(form) = &mut self.page
            && form
                .feedback
                .as_ref()
                .is_some_and(|fb| fb.deadline.is_some_and(|d| now >= d))
        {
            form.feedback = None;
            changed = true;
        }

        changed
    }

    /// True while something on screen is time-driven (spinner, a toast or
    /// banner waiting to expire) and the event loop should poll short.
    pub fn animating(&self) -> bool {
        if self.loading.is_loading() || self.notification.is_some() {
            return true;
        }
        matches!(
            &self.page,
            Page::Contact(form) if form.feedback.as_ref().is_some_and(|fb| fb.deadline.is_some())
        )
    }
}

// ============================================================================
// Container content
// ============================================================================

/// What the container region shows. One variant per view; constructing a
/// variant from scratch is what makes re-rendering a route idempotent.
#[derive(Debug, PartialEq)]
pub enum Page {
    Home,
    About,
    Users(UsersPhase),
    Contact(ContactForm),
    NotFound { path: String },
}

impl Page {
    /// Fresh content for a matched route, before any data has arrived.
    pub fn initial(route: Route) -> Page {
        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Users => Page::Users(UsersPhase::Loading),
            Route::Contact => Page::Contact(ContactForm::default()),
        }
    }
}

/// Lifecycle of the users page's data sub-region.
#[derive(Debug, PartialEq)]
pub enum UsersPhase {
    Loading,
    Loaded(Vec<User>),
    Failed(String),
}

// ============================================================================
// Contact form
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn next(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }
}

/// Contact form fields plus submission feedback. All four fields are
/// required; "present" means non-empty, nothing stricter.
#[derive(Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub feedback: Option<FormFeedback>,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// All required fields present.
    pub fn is_complete(&self) -> bool {
        ContactField::ALL.iter().all(|f| !self.value(*f).is_empty())
    }

    /// The submission body: subject as title, contact details folded into
    /// the post body.
    pub fn to_post(&self) -> NewPost {
        NewPost {
            title: self.subject.clone(),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                self.name, self.email, self.message
            ),
            user_id: 1,
        }
    }

    /// Clears the fields, keeping any feedback (the success banner shows
    /// over a reset form).
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

#[derive(Debug, PartialEq)]
pub struct FormFeedback {
    pub ok: bool,
    pub text: String,
    /// Success banners auto-hide; validation and failure text stays until
    /// the next submit.
    pub deadline: Option<Instant>,
}

impl FormFeedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            text: text.into(),
            deadline: Some(Instant::now() + NOTICE_TTL),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            ok: false,
            text: text.into(),
            deadline: None,
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, PartialEq)]
pub struct Notification {
    pub kind: NoticeKind,
    pub text: String,
    pub deadline: Instant,
}
