/// Views the application can be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dependencies,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dependencies => "/dependencies",
        }
    }
}

/// Navigator port owned by the host application
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    /// Brings the application window to the foreground
    fn focus_window(&self);
}
