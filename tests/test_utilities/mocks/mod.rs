/// Mock implementations for testing
mod mock_manifest_channel;
mod mock_navigator;
mod mock_notification_center;
mod mock_outdated_channel;
mod mock_progress_reporter;

pub use mock_manifest_channel::MockManifestChannel;
pub use mock_navigator::MockNavigator;
pub use mock_notification_center::MockNotificationCenter;
pub use mock_outdated_channel::MockOutdatedChannel;
pub use mock_progress_reporter::MockProgressReporter;
