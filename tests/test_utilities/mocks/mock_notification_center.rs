use async_trait::async_trait;
use depdesk::prelude::*;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Mock NotificationCenter that records what was shown and closed
#[derive(Clone)]
pub struct MockNotificationCenter {
    permission: Arc<Mutex<NotificationPermission>>,
    shown: Arc<Mutex<Vec<Notification>>>,
    closed: Arc<Mutex<Vec<Uuid>>>,
}

impl MockNotificationCenter {
    pub fn new(permission: NotificationPermission) -> Self {
        Self {
            permission: Arc::new(Mutex::new(permission)),
            shown: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }

    pub fn closed(&self) -> Vec<Uuid> {
        self.closed.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationCenter for MockNotificationCenter {
    fn permission(&self) -> NotificationPermission {
        *self.permission.lock().unwrap()
    }

    /// The user always agrees
    async fn request_permission(&self) -> NotificationPermission {
        *self.permission.lock().unwrap() = NotificationPermission::Granted;
        NotificationPermission::Granted
    }

    fn show(&self, notification: &Notification) -> Result<()> {
        self.shown.lock().unwrap().push(notification.clone());
        Ok(())
    }

    fn close(&self, id: Uuid) {
        self.closed.lock().unwrap().push(id);
    }
}
