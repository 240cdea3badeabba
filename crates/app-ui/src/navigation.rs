//! Tab navigation for Campus Buzz
//!
//! The app shell is a flat bottom tab bar with one screen per tab. This
//! module provides:
//! - Route definitions and path matching
//! - Tab metadata (label, icon, root route)
//! - Navigation state with pending-transition tracking

use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All routes in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Home screen
    #[default]
    Home,
    /// Experientia placeholder
    Experientia,
    /// Swipeable event feed
    CampusBuzz,
    /// Networking placeholder
    Networking,
    /// Profile placeholder
    Profile,
    /// Unknown path
    NotFound,
}

impl Route {
    /// URL path for this route
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Experientia => "/experientia",
            Route::CampusBuzz => "/campus-buzz",
            Route::Networking => "/networking",
            Route::Profile => "/profile",
            Route::NotFound => "/not-found",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Experientia => "Experientia",
            Route::CampusBuzz => "Campus Buzz",
            Route::Networking => "Networking",
            Route::Profile => "Profile",
            Route::NotFound => "Not Found",
        }
    }
}

/// Path matcher for deep links
#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    /// Create a router
    pub fn new() -> Self {
        Self
    }

    /// Match a path to a route, ignoring query strings and trailing slashes
    pub fn match_path(&self, path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        // Expo Router registers tab screens as "<name>/index"
        let normalized = match normalized.strip_suffix("/index") {
            Some("") => "/",
            Some(stripped) => stripped,
            None => normalized,
        };

        NavigationTab::all()
            .into_iter()
            .map(|tab| tab.root_route())
            .find(|route| route.to_path() == normalized)
            .unwrap_or(Route::NotFound)
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Bottom navigation tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationTab {
    /// Home tab
    #[default]
    Home,
    /// Experientia tab
    Experientia,
    /// Campus Buzz feed tab
    CampusBuzz,
    /// Networking tab
    Networking,
    /// Profile tab
    Profile,
}

impl NavigationTab {
    /// Root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Home => Route::Home,
            NavigationTab::Experientia => Route::Experientia,
            NavigationTab::CampusBuzz => Route::CampusBuzz,
            NavigationTab::Networking => Route::Networking,
            NavigationTab::Profile => Route::Profile,
        }
    }

    /// Icon symbol name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "house.fill",
            NavigationTab::Experientia => "paperplane.fill",
            NavigationTab::CampusBuzz => "megaphone.fill",
            NavigationTab::Networking => "person.2.fill",
            NavigationTab::Profile => "person.fill",
        }
    }

    /// Label for this tab
    pub fn label(&self) -> &'static str {
        self.root_route().title()
    }

    /// Tab whose root is `route`
    pub fn for_route(route: Route) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.root_route() == route)
    }

    /// All tabs in order
    pub fn all() -> [NavigationTab; 5] {
        [
            NavigationTab::Home,
            NavigationTab::Experientia,
            NavigationTab::CampusBuzz,
            NavigationTab::Networking,
            NavigationTab::Profile,
        ]
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Pending tab switch (cleared once the host finishes its transition)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNavigation {
    /// Tab being left
    pub from: NavigationTab,
    /// Tab being shown
    pub to: NavigationTab,
}

/// Tab shell navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Pending navigation (for host transitions)
    #[serde(skip)]
    pub pending: Option<PendingNavigation>,
}

impl NavigationState {
    /// Create a navigation state on the home tab
    pub fn new() -> Self {
        Self::default()
    }

    /// Current route
    pub fn current_route(&self) -> Route {
        self.active_tab.root_route()
    }

    /// Switch to a tab; returns false if it was already active
    pub fn switch_tab(&mut self, tab: NavigationTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.pending = Some(PendingNavigation {
            from: self.active_tab,
            to: tab,
        });
        tracing::debug!(from = ?self.active_tab, to = ?tab, "Switching tab");
        self.active_tab = tab;
        true
    }

    /// Follow a deep link; returns false for unknown paths
    pub fn navigate_to_path(&mut self, router: &Router, path: &str) -> bool {
        match NavigationTab::for_route(router.match_path(path)) {
            Some(tab) => {
                self.switch_tab(tab);
                true
            }
            None => false,
        }
    }

    /// Complete the pending navigation
    pub fn complete_navigation(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::CampusBuzz.to_path(), "/campus-buzz");
        assert_eq!(Route::Networking.title(), "Networking");
    }

    #[test]
    fn test_router_match() {
        let router = Router::new();
        assert_eq!(router.match_path("/"), Route::Home);
        assert_eq!(router.match_path(""), Route::Home);
        assert_eq!(router.match_path("/campus-buzz/"), Route::CampusBuzz);
        assert_eq!(router.match_path("/campus-buzz/index"), Route::CampusBuzz);
        assert_eq!(router.match_path("/index"), Route::Home);
        assert_eq!(router.match_path("/index/"), Route::Home);
        assert_eq!(router.match_path("/profile?tab=me"), Route::Profile);
        assert_eq!(router.match_path("/nonexistent"), Route::NotFound);
    }

    #[test]
    fn test_tab_metadata() {
        assert_eq!(NavigationTab::all().len(), 5);
        assert_eq!(NavigationTab::CampusBuzz.icon(), "megaphone.fill");
        assert_eq!(NavigationTab::CampusBuzz.label(), "Campus Buzz");
        assert_eq!(
            NavigationTab::for_route(Route::Networking),
            Some(NavigationTab::Networking)
        );
        assert_eq!(NavigationTab::for_route(Route::NotFound), None);
    }

    #[test]
    fn test_switch_tab() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.active_tab, NavigationTab::Home);
        assert!(!nav.switch_tab(NavigationTab::Home));
        assert!(nav.pending.is_none());

        assert!(nav.switch_tab(NavigationTab::CampusBuzz));
        assert_eq!(nav.current_route(), Route::CampusBuzz);
        assert_eq!(
            nav.pending,
            Some(PendingNavigation {
                from: NavigationTab::Home,
                to: NavigationTab::CampusBuzz
            })
        );

        nav.complete_navigation();
        assert!(nav.pending.is_none());
    }

    #[test]
    fn test_navigate_to_path() {
        let router = Router::new();
        let mut nav = NavigationState::new();
        assert!(nav.navigate_to_path(&router, "/profile"));
        assert_eq!(nav.active_tab, NavigationTab::Profile);
        assert!(!nav.navigate_to_path(&router, "/settings"));
        assert_eq!(nav.active_tab, NavigationTab::Profile);
    }
}
