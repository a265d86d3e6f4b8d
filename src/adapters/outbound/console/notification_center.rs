use crate::ports::outbound::{Notification, NotificationCenter, NotificationPermission};
use crate::shared::Result;
use async_trait::async_trait;
use owo_colors::OwoColorize;
use std::collections::HashSet;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// ConsoleNotificationCenter adapter that shows notifications on stderr
///
/// Permission starts from configuration. When it is still unset, a request
/// asks on the terminal; without a terminal there is nobody to ask and the
/// permission stays unset.
pub struct ConsoleNotificationCenter {
    permission: Mutex<NotificationPermission>,
    interactive: bool,
    open: Mutex<HashSet<Uuid>>,
}

impl ConsoleNotificationCenter {
    pub fn new(permission: NotificationPermission) -> Self {
        Self {
            permission: Mutex::new(permission),
            interactive: io::stdin().is_terminal(),
            open: Mutex::new(HashSet::new()),
        }
    }

    /// Notifications shown and not yet closed
    pub fn open_count(&self) -> usize {
        self.open.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn set_permission(&self, permission: NotificationPermission) {
        *self.permission.lock().unwrap_or_else(PoisonError::into_inner) = permission;
    }
}

fn parse_answer(answer: &str) -> NotificationPermission {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => NotificationPermission::Granted,
        _ => NotificationPermission::Denied,
    }
}

fn prompt_permission() -> io::Result<String> {
    eprint!("🔔 Allow depdesk to show notifications? [y/N] ");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer)
}

#[async_trait]
impl NotificationCenter for ConsoleNotificationCenter {
    fn permission(&self) -> NotificationPermission {
        *self.permission.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn request_permission(&self) -> NotificationPermission {
        let current = self.permission();
        if current != NotificationPermission::Default || !self.interactive {
            return current;
        }

        let permission = match tokio::task::spawn_blocking(prompt_permission).await {
            Ok(Ok(answer)) => parse_answer(&answer),
            _ => NotificationPermission::Default,
        };
        self.set_permission(permission);
        permission
    }

    fn show(&self, notification: &Notification) -> Result<()> {
        eprintln!(
            "\n🔔 {} {}\n",
            notification.title.bold().yellow(),
            format!("({})", notification.issued_at.format("%H:%M:%S")).dimmed()
        );
        self.open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(notification.id);
        Ok(())
    }

    fn close(&self, id: Uuid) {
        self.open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }
}
