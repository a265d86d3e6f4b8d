use crate::dependency_management::domain::{Dependency, SortDescriptor, SortKey};
use crate::dependency_management::services::DependencySorter;
use crate::ports::inbound::{DependencyStorePort, UpdateOutcome};
use crate::shared::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Where the delete-confirmation workflow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionState {
    Idle,
    /// Confirmation modal is open
    ConfirmPending,
    /// Confirmed; the removal request is in flight
    Deleting,
}

/// Outcome of confirming a deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The dependency was removed; carries the store's snapshot of it
    Deleted(Dependency),
    /// The confirmation was ignored: nothing expanded, modal closed, or a
    /// removal already in flight
    Ignored,
}

#[derive(Debug, Default)]
struct ListState {
    sort: SortDescriptor,
    expanded_item: bool,
    expanded_dependency: Option<Dependency>,
    modal_open: bool,
    deleting_dependency: bool,
}

impl ListState {
    /// The stored reference only counts while `expanded_item` is set
    fn expanded(&self) -> Option<&Dependency> {
        if self.expanded_item {
            self.expanded_dependency.as_ref()
        } else {
            None
        }
    }

    fn deletion_state(&self) -> DeletionState {
        match (self.modal_open, self.deleting_dependency) {
            (_, true) => DeletionState::Deleting,
            (true, false) => DeletionState::ConfirmPending,
            (false, false) => DeletionState::Idle,
        }
    }
}

/// DependencyListController - presentation state for one dependency list
///
/// Owns the sort order, the single expanded row and the delete-confirmation
/// workflow. It reads the store's derived view and calls store operations,
/// but never touches the dependency list itself.
///
/// All methods take `&self` so a confirmation can be issued while an earlier
/// one is still awaiting the store.
pub struct DependencyListController<S: DependencyStorePort> {
    store: Arc<S>,
    state: Mutex<ListState>,
}

impl<S: DependencyStorePort> DependencyListController<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: Mutex::new(ListState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn sort(&self) -> SortDescriptor {
        self.state().sort
    }

    /// Header click on `key`: flips the order if `key` is already active,
    /// otherwise switches to `key` ascending
    pub fn set_sort(&self, key: SortKey) -> SortDescriptor {
        let mut state = self.state();
        state.sort = state.sort.select(key);
        state.sort
    }

    pub fn sort_dependencies(&self, dependencies: &[Dependency]) -> Vec<Dependency> {
        DependencySorter::sort(dependencies, self.sort())
    }

    /// The store's current view in this list's sort order
    pub fn sorted_dependencies(&self) -> Vec<Dependency> {
        self.sort_dependencies(&self.store.dependencies())
    }

    /// Row click: expands `dependency`, or collapses it if it is the one
    /// already expanded. At most one row is ever expanded.
    pub fn toggle_panel(&self, dependency: &Dependency) {
        let mut state = self.state();
        let already_expanded = state
            .expanded()
            .is_some_and(|expanded| expanded.is_named(&dependency.name));

        if already_expanded {
            state.expanded_item = false;
        } else {
            state.expanded_item = true;
            state.expanded_dependency = Some(dependency.clone());
        }
    }

    pub fn expanded_dependency(&self) -> Option<Dependency> {
        self.state().expanded().cloned()
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.state()
            .expanded()
            .is_some_and(|expanded| expanded.is_named(name))
    }

    pub fn deletion_state(&self) -> DeletionState {
        self.state().deletion_state()
    }

    pub fn is_modal_open(&self) -> bool {
        self.state().modal_open
    }

    /// Opens the confirmation modal for the expanded dependency.
    ///
    /// Returns `false` and does nothing when no row is expanded or the
    /// workflow is not idle.
    pub fn request_delete(&self) -> bool {
        let mut state = self.state();
        if state.expanded().is_none() || state.deletion_state() != DeletionState::Idle {
            return false;
        }
        state.modal_open = true;
        true
    }

    /// Dismisses the confirmation modal and collapses the expanded row.
    ///
    /// Refused while a removal is in flight, since the modal is what shows
    /// its progress.
    pub fn close_modal(&self) -> bool {
        let mut state = self.state();
        if state.deleting_dependency {
            return false;
        }
        state.modal_open = false;
        state.expanded_item = false;
        state.expanded_dependency = None;
        true
    }

    /// Confirms the pending deletion of the expanded dependency.
    ///
    /// Only the first confirmation reaches the store; any confirmation made
    /// while it is in flight is `Ignored`. On success the modal closes and
    /// the selection is cleared.
    ///
    /// # Errors
    /// Returns the store's error. The workflow goes back to
    /// `ConfirmPending`, so the user can retry or cancel.
    pub async fn confirm_delete(&self) -> Result<DeleteOutcome> {
        let target = {
            let mut state = self.state();
            if state.deletion_state() != DeletionState::ConfirmPending {
                return Ok(DeleteOutcome::Ignored);
            }
            let Some(target) = state.expanded().cloned() else {
                return Ok(DeleteOutcome::Ignored);
            };
            state.deleting_dependency = true;
            target
        };

        match self.store.delete_dependency(&target).await {
            Ok(removed) => {
                let mut state = self.state();
                state.deleting_dependency = false;
                state.modal_open = false;
                state.expanded_item = false;
                state.expanded_dependency = None;
                Ok(DeleteOutcome::Deleted(removed))
            }
            Err(e) => {
                self.state().deleting_dependency = false;
                Err(e)
            }
        }
    }

    pub async fn request_update(&self, dependency: &Dependency) -> UpdateOutcome {
        self.store.update_dependency(dependency).await
    }
}
