/// Use cases module containing application business logic orchestration
mod dependency_store;

pub use dependency_store::DependencyStore;
