use crate::ports::outbound::{Navigator, Route};
use std::sync::{Mutex, PoisonError};

/// ConsoleNavigator adapter for the terminal front end
///
/// The terminal has a single view, so navigation only records the route
/// and tells the user where the notification points.
#[derive(Default)]
pub struct ConsoleNavigator {
    current: Mutex<Option<Route>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> Option<Route> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        eprintln!("➡️  Opening {}", route.path());
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }

    // The terminal already has focus
    fn focus_window(&self) {}
}
