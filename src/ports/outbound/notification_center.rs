use crate::shared::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Three-valued notification permission. `Default` means the user was never
/// asked; only a permission request moves it to `Granted` or `Denied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPermission {
    #[default]
    Default,
    Granted,
    Denied,
}

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub issued_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            issued_at: Utc::now(),
        }
    }

    /// The notice raised after an outdated check
    pub fn outdated_dependencies(count: usize) -> Self {
        Self::new(format!("You have {} outdated dependencies!", count))
    }
}

/// NotificationCenter port for the process-wide notification capability
///
/// The permission state is shared by the whole process; the store is the
/// only component that reads or changes it.
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    fn permission(&self) -> NotificationPermission;

    /// Asks the user for permission and returns the resulting state
    async fn request_permission(&self) -> NotificationPermission;

    fn show(&self, notification: &Notification) -> Result<()>;

    /// Dismisses a notification previously shown
    fn close(&self, id: Uuid);
}
