/// Console adapters for terminal interaction
mod navigator;
mod notification_center;
mod progress_reporter;

pub use navigator::ConsoleNavigator;
pub use notification_center::ConsoleNotificationCenter;
pub use progress_reporter::StderrProgressReporter;
