use crate::dependency_management::domain::{Dependency, SortDescriptor, SortKey, SortOrder};
use std::cmp::Ordering;

/// DependencySorter orders a dependency list for display.
///
/// - `name`: by name.
/// - `type`: by manifest section key, then by name.
///
/// Both comparisons follow the descriptor's order, and the sort is stable, so
/// entries that compare equal keep their incoming order.
pub struct DependencySorter;

impl DependencySorter {
    pub fn sort(dependencies: &[Dependency], descriptor: SortDescriptor) -> Vec<Dependency> {
        let mut sorted = dependencies.to_vec();
        sorted.sort_by(|a, b| Self::compare(a, b, descriptor));
        sorted
    }

    pub fn compare(a: &Dependency, b: &Dependency, descriptor: SortDescriptor) -> Ordering {
        let ordering = match descriptor.key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Type => a
                .dependency_type
                .as_str()
                .cmp(b.dependency_type.as_str())
                .then_with(|| a.name.cmp(&b.name)),
        };

        match descriptor.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}
