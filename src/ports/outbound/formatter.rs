use crate::dependency_management::domain::{Dependency, SortDescriptor};
use crate::shared::Result;

/// DependencyFormatter port for rendering an already-sorted dependency list
pub trait DependencyFormatter {
    /// Renders `dependencies` in the order given; `sort` is only used to
    /// mark the active column
    fn format(&self, dependencies: &[Dependency], sort: SortDescriptor) -> Result<String>;
}
