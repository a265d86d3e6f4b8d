use depdesk::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Navigator that records routes and focus requests
#[derive(Clone, Default)]
pub struct MockNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
    focus_requests: Arc<Mutex<usize>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    pub fn focus_requests(&self) -> usize {
        *self.focus_requests.lock().unwrap()
    }
}

impl Navigator for MockNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }

    fn focus_window(&self) {
        *self.focus_requests.lock().unwrap() += 1;
    }
}
