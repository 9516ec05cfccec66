//! Fragment router: a validated path table, the current fragment, and
//! browser-style back/forward history.
//!
//! The router only maps paths to routes and tracks where the application
//! is; the dispatch cycle itself (marking the active affordance, replacing
//! the page, kicking off fetches) lives in the reducer. Every navigation —
//! programmatic, shortcut, or history move — funnels into that one cycle.

use std::collections::HashMap;
use std::fmt;

use crate::core::route::Route;

/// Rejection reasons for [`Router::register`].
#[derive(Debug, PartialEq, Eq)]
pub enum RouteError {
    /// Registered paths are absolute; `""` and `"about"` are rejected.
    MissingLeadingSlash(String),
    /// A segment was empty or carried a character outside `[A-Za-z0-9_-]`.
    InvalidSegment(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MissingLeadingSlash(path) => {
                write!(f, "route path {path:?} must start with '/'")
            }
            RouteError::InvalidSegment(path) => {
                write!(f, "route path {path:?} has an empty or non [A-Za-z0-9_-] segment")
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Checks a path against the registration syntax: `/` alone, or
/// `/seg(/seg)*` with segments of `[A-Za-z0-9_-]+`.
///
/// Only registration is gated. Arbitrary strings can still be navigated to;
/// they simply resolve to nothing.
pub fn validate_path(path: &str) -> Result<(), RouteError> {
    if !path.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash(path.to_string()));
    }
    if path == "/" {
        return Ok(());
    }
    for segment in path[1..].split('/') {
        let well_formed = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !well_formed {
            return Err(RouteError::InvalidSegment(path.to_string()));
        }
    }
    Ok(())
}

pub struct Router {
    routes: HashMap<String, Route>,
    /// The fragment as written: may be empty (fresh start, no hash).
    fragment: String,
    back: Vec<String>,
    forward: Vec<String>,
}

impl Router {
    /// An empty router positioned at the empty fragment.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            fragment: String::new(),
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// A router with the full static route set registered under canonical
    /// paths, positioned at `initial` (empty = fresh start at `/`).
    pub fn with_default_routes(initial: &str) -> Self {
        let mut router = Router::new();
        for route in Route::ALL {
            router
                .register(route.path(), route)
                .expect("static route paths satisfy the registration syntax");
        }
        router.fragment = initial.to_string();
        router
    }

    /// Registers or overwrites the route for `path`. Last registration wins.
    pub fn register(&mut self, path: &str, route: Route) -> Result<(), RouteError> {
        validate_path(path)?;
        self.routes.insert(path.to_string(), route);
        Ok(())
    }

    /// The path derived from the fragment: `/` when the fragment is empty,
    /// otherwise the fragment unmodified.
    pub fn current_path(&self) -> &str {
        if self.fragment.is_empty() {
            "/"
        } else {
            &self.fragment
        }
    }

    /// Exact-match lookup of the current path. `None` is the not-found
    /// case, not an error; the table is never touched by a miss.
    pub fn resolve(&self) -> Option<Route> {
        self.routes.get(self.current_path()).copied()
    }

    /// Sets the fragment. The previous fragment is pushed onto the back
    /// history only when the value actually changes (re-navigating to the
    /// current fragment re-dispatches without growing history), and any
    /// forward history is dropped. The caller dispatches after every call.
    pub fn navigate(&mut self, path: &str) {
        if path != self.fragment {
            let previous = std::mem::replace(&mut self.fragment, path.to_string());
            self.back.push(previous);
            self.forward.clear();
        }
    }

    /// History back. Returns whether a move happened; the caller dispatches
    /// after a successful move.
    pub fn go_back(&mut self) -> bool {
        match self.back.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.fragment, previous);
                self.forward.push(current);
                true
            }
            None => false,
        }
    }

    /// History forward, the mirror of [`Router::go_back`].
    pub fn go_forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.fragment, next);
                self.back.push(current);
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Number of registered paths.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
