//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `NavBar`: Top navigation with brand, links, and active marker
//! - `StatusBar`: Bottom strip with fragment path, spinner, key hints
//! - `Toast`: Transient notification overlay
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local presentation state and emit events:
//! - `PageViewState`: Scroll offset for the shared page container
//! - `ContactPanel`: Field focus and per-field cursors for the form
//!
//! ## Design Notes
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, and tests.
//!
//! Components receive app data as "props" (function parameters), never by
//! reaching into global state, so dependencies stay explicit:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! StatusBar { path, loading, spinner_frame }.render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! status_bar.render(frame, area); // reads from a global App
//! ```
//!
//! Page *content* state (fetched users, form values, feedback) lives in
//! [`crate::core::state`]; only presentation state (scroll, cursor, focus)
//! lives here. Navigation rebuilds the presentation state from scratch,
//! which is what keeps revisiting a route idempotent.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── nav_bar.rs       (top navigation + click hit-testing)
//! ├── status_bar.rs    (fragment path, spinner, key hints)
//! ├── toast.rs         (notification overlay)
//! ├── page_view.rs     (scrollable page container)
//! ├── static_pages.rs  (home / about / not-found templates)
//! ├── users.rs         (user cards and fetch lifecycle views)
//! ├── contact.rs       (form panel: focus, validation feedback)
//! └── text_field.rs    (cursor + viewport math for form inputs)
//! ```

pub mod contact;
pub mod nav_bar;
pub mod page_view;
pub mod static_pages;
pub mod status_bar;
pub mod text_field;
pub mod toast;
pub mod users;

pub use contact::{ContactEvent, ContactPanel};
pub use nav_bar::NavBar;
pub use page_view::{PageView, PageViewState};
pub use status_bar::StatusBar;
pub use toast::Toast;
