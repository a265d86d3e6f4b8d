/// Presentation controllers layered over the inbound ports
mod dependency_list_controller;

pub use dependency_list_controller::{DeleteOutcome, DeletionState, DependencyListController};
