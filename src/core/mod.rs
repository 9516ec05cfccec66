//! # Core Application Logic
//!
//! This module contains Placard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Router (fragments)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │   Config   │
//!     │  Adapter   │      │  Gateway   │      │  Loading   │
//!     │ (ratatui)  │      │ (reqwest)  │      │   (toml)   │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`route`]: The closed set of destinations and their fragment paths
//! - [`router`]: Fragment → route resolution plus back/forward history
//! - [`config`]: Layered settings (defaults → file → env → CLI)

pub mod action;
pub mod config;
pub mod route;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
// pub use action::Action;
// pub use state::App;
