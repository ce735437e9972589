//! Screen routes and history.
//!
//! Every screen is reachable by a stable route name; back returns to the
//! previous route. No screen takes parameters.

/// Navigable screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Tours,
    Safety,
    Profile,
    Contacts,
    Documents,
    Locations,
    Settings,
    Login,
    ProfileSetup,
    AddDependent,
}

impl Route {
    /// Stable route name used for navigation.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Tours => "/tours",
            Route::Safety => "/safety",
            Route::Profile => "/profile",
            Route::Contacts => "/contacts",
            Route::Documents => "/documents",
            Route::Locations => "/locations",
            Route::Settings => "/settings",
            Route::Login => "/login",
            Route::ProfileSetup => "/profile-setup",
            Route::AddDependent => "/add-dependent",
        }
    }

    /// Title shown in the screen header.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Tourist Safety",
            Route::Tours => "Northeast Tours",
            Route::Safety => "Safety & Security",
            Route::Profile => "Profile",
            Route::Contacts => "Emergency Contacts",
            Route::Documents => "Travel Documents",
            Route::Locations => "Location Services",
            Route::Settings => "Settings",
            Route::Login => "Welcome Back",
            Route::ProfileSetup => "Profile Setup",
            Route::AddDependent => "Add Dependent",
        }
    }

    /// The four tab-bar screens, in tab order.
    pub fn tabs() -> [Route; 4] {
        [Route::Home, Route::Tours, Route::Safety, Route::Profile]
    }
}

/// Navigation history with push/back/replace semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    history: Vec<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            history: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        // history always holds at least the initial route
        *self.history.last().unwrap_or(&Route::Home)
    }

    /// Navigate to a screen, keeping the current one on the back stack.
    pub fn push(&mut self, route: Route) {
        self.history.push(route);
    }

    /// Replace the current screen without growing the back stack.
    pub fn replace(&mut self, route: Route) {
        self.history.pop();
        self.history.push(route);
    }

    /// Return to the previous screen. At the root this is a no-op and
    /// returns None.
    pub fn back(&mut self) -> Option<Route> {
        if self.history.len() > 1 {
            self.history.pop();
            Some(self.current())
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_names_are_stable() {
        assert_eq!(Route::Home.name(), "/");
        assert_eq!(Route::ProfileSetup.name(), "/profile-setup");
        assert_eq!(Route::AddDependent.name(), "/add-dependent");
    }

    #[test]
    fn test_push_and_back() {
        let mut router = Router::new(Route::Home);
        router.push(Route::Profile);
        router.push(Route::ProfileSetup);
        assert_eq!(router.current(), Route::ProfileSetup);

        assert_eq!(router.back(), Some(Route::Profile));
        assert_eq!(router.back(), Some(Route::Home));
        // back at the root is a no-op
        assert_eq!(router.back(), None);
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut router = Router::new(Route::Login);
        router.replace(Route::ProfileSetup);
        assert_eq!(router.current(), Route::ProfileSetup);
        assert_eq!(router.depth(), 1);
        assert_eq!(router.back(), None);
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(
            Route::tabs(),
            [Route::Home, Route::Tours, Route::Safety, Route::Profile]
        );
    }
}
