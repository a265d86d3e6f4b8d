//! depdesk - dependency dashboard for npm projects
//!
//! This library lists the dependencies declared in a project's
//! `package.json`, flags the outdated ones, and forwards add/remove
//! requests to npm. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_management`): Dependency model and sorting
//! - **Application Layer** (`application`): The dependency store and the list controller
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): npm channel, console and output implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depdesk::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let channel = TimeoutChannel::new(NpmChannel::new("."), DEFAULT_REQUEST_TIMEOUT);
//!
//! let store = Arc::new(DependencyStore::new(
//!     channel.clone(),
//!     channel,
//!     ConsoleNotificationCenter::new(NotificationPermission::Denied),
//!     ConsoleNavigator::new(),
//!     StderrProgressReporter::new(),
//!     StoreSettings::default(),
//! ));
//! store.fetch_dependencies().await?;
//!
//! let controller = DependencyListController::new(Arc::clone(&store));
//! controller.set_sort(SortKey::Type);
//! let output = TableFormatter::new().format(&controller.sorted_dependencies(), controller.sort())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_management;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ConsoleNavigator, ConsoleNotificationCenter, StderrProgressReporter,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::npm::{NpmChannel, TimeoutChannel, DEFAULT_REQUEST_TIMEOUT};
    pub use crate::application::controllers::{
        DeleteOutcome, DeletionState, DependencyListController,
    };
    pub use crate::application::dto::StoreSettings;
    pub use crate::application::use_cases::DependencyStore;
    pub use crate::dependency_management::domain::{
        Dependency, DependencyName, DependencyType, OutdatedPackage, OutdatedSet, SortDescriptor,
        SortKey, SortOrder,
    };
    pub use crate::dependency_management::services::DependencySorter;
    pub use crate::ports::inbound::{DependencyStorePort, UpdateOutcome};
    pub use crate::ports::outbound::{
        DependencyFormatter, ManifestSection, MutationChannel, MutationRequest, MutationResponse,
        Navigator, Notification, NotificationCenter, NotificationPermission, OutdatedChannel,
        OutputPresenter, ProgressReporter, Route,
    };
    pub use crate::shared::error::{DependencyError, ExitCode};
    pub use crate::shared::Result;
}
