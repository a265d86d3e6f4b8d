use crate::dependency_management::domain::{Dependency, DependencyType};
use crate::shared::Result;
use async_trait::async_trait;

/// Result of an update request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Updating a dependency in place is not supported yet; nothing happened
    NotSupported,
}

/// DependencyStorePort - Inbound port over the dependency store
///
/// The store is the only writer of the dependency list and the outdated set.
/// Consumers read the derived view and invoke operations, nothing else.
#[async_trait]
pub trait DependencyStorePort: Send + Sync {
    /// Current view: `outdated` recomputed on every call, and filtered down
    /// to outdated entries when that setting is on
    fn dependencies(&self) -> Vec<Dependency>;

    /// Replaces the list with a fresh read of every manifest section, then
    /// runs the outdated check
    async fn fetch_dependencies(&self) -> Result<()>;

    /// Adds a dependency and returns the refreshed view.
    ///
    /// # Errors
    /// Fails without touching the list when the mutator rejects the request
    async fn add_dependency(
        &self,
        name: &str,
        dependency_type: DependencyType,
    ) -> Result<Vec<Dependency>>;

    /// Removes a dependency and returns the entry as it was stored before
    /// removal.
    ///
    /// # Errors
    /// Fails without touching the list when the mutator rejects the request
    async fn delete_dependency(&self, dependency: &Dependency) -> Result<Dependency>;

    /// Declared for completeness; always answers `NotSupported`
    async fn update_dependency(&self, dependency: &Dependency) -> UpdateOutcome;
}
