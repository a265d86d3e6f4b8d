mod dependency_sorter;

pub use dependency_sorter::DependencySorter;
