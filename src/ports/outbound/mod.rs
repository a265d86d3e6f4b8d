/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the dependency store needs from the outside:
/// the manifest/mutation channel, the outdated query, notifications,
/// navigation and progress output.
pub mod formatter;
pub mod mutation_channel;
pub mod navigator;
pub mod notification_center;
pub mod outdated_channel;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::DependencyFormatter;
pub use mutation_channel::{ManifestSection, MutationChannel, MutationRequest, MutationResponse};
pub use navigator::{Navigator, Route};
pub use notification_center::{Notification, NotificationCenter, NotificationPermission};
pub use outdated_channel::OutdatedChannel;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
