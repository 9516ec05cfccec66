//! The closed set of statically routed pages.
//!
//! Each route carries its canonical fragment path, its nav-bar label, and
//! the digit of its keyboard shortcut. Dispatch still goes through the
//! string table in [`crate::core::router`], so re-registration and unknown
//! paths behave like any dynamic route would.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Users,
    Contact,
}

impl Route {
    /// All routes in nav-bar order. Shortcut digits map by position.
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Users, Route::Contact];

    /// Canonical fragment path.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Users => "/users",
            Route::Contact => "/contact",
        }
    }

    /// Nav-bar label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Users => "Users",
            Route::Contact => "Contact",
        }
    }

    /// The digit bound to this route (Ctrl+1 through Ctrl+4).
    pub fn shortcut(self) -> char {
        match self {
            Route::Home => '1',
            Route::About => '2',
            Route::Users => '3',
            Route::Contact => '4',
        }
    }

    pub fn from_shortcut(digit: char) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.shortcut() == digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_stable() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::About.path(), "/about");
        assert_eq!(Route::Users.path(), "/users");
        assert_eq!(Route::Contact.path(), "/contact");
    }

    #[test]
    fn test_shortcut_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_shortcut(route.shortcut()), Some(route));
        }
        assert_eq!(Route::from_shortcut('5'), None);
        assert_eq!(Route::from_shortcut('a'), None);
    }
}
