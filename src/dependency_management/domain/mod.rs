pub mod dependency;
pub mod dependency_type;
pub mod outdated_set;
pub mod sort_descriptor;

pub use dependency::{Dependency, DependencyName};
pub use dependency_type::DependencyType;
pub use outdated_set::{OutdatedPackage, OutdatedSet};
pub use sort_descriptor::{SortDescriptor, SortKey, SortOrder};
