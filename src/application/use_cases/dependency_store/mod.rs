use crate::application::dto::StoreSettings;
use crate::dependency_management::domain::{
    Dependency, DependencyName, DependencyType, OutdatedSet,
};
use crate::ports::inbound::{DependencyStorePort, UpdateOutcome};
use crate::ports::outbound::{
    MutationChannel, MutationRequest, Navigator, Notification, NotificationCenter,
    NotificationPermission, OutdatedChannel, ProgressReporter, Route,
};
use crate::shared::error::DependencyError;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Everything the store owns. Only the store writes to it.
#[derive(Debug, Default)]
struct StoreState {
    dependencies: Vec<Dependency>,
    outdated: OutdatedSet,
}

/// DependencyStore - single source of truth for the project's dependencies
///
/// The store reads the manifest through the mutation channel, forwards
/// add/remove intents, runs the outdated check at most once per instance and
/// exposes a derived view with `outdated` annotations.
///
/// The two mutations reconcile differently on purpose: an add re-reads the
/// whole manifest, a delete removes the entry locally.
///
/// # Type Parameters
/// * `MC` - MutationChannel implementation (manifest queries, add/remove)
/// * `OC` - OutdatedChannel implementation
/// * `NC` - NotificationCenter implementation
/// * `NAV` - Navigator implementation
/// * `PR` - ProgressReporter implementation
pub struct DependencyStore<MC, OC, NC, NAV, PR> {
    mutation_channel: MC,
    outdated_channel: OC,
    notification_center: NC,
    navigator: NAV,
    progress_reporter: PR,
    check_outdated_on_startup: bool,
    filter_outdated: AtomicBool,
    outdated_check_started: AtomicBool,
    state: Mutex<StoreState>,
}

impl<MC, OC, NC, NAV, PR> DependencyStore<MC, OC, NC, NAV, PR>
where
    MC: MutationChannel,
    OC: OutdatedChannel,
    NC: NotificationCenter,
    NAV: Navigator,
    PR: ProgressReporter,
{
    /// Creates an empty store wired to the given channels
    pub fn new(
        mutation_channel: MC,
        outdated_channel: OC,
        notification_center: NC,
        navigator: NAV,
        progress_reporter: PR,
        settings: StoreSettings,
    ) -> Self {
        Self {
            mutation_channel,
            outdated_channel,
            notification_center,
            navigator,
            progress_reporter,
            check_outdated_on_startup: settings.check_outdated_on_startup,
            filter_outdated: AtomicBool::new(settings.filter_outdated_dependencies),
            outdated_check_started: AtomicBool::new(false),
            state: Mutex::new(StoreState::default()),
        }
    }

    // The lock is never held across an await, so a poisoned state is still consistent
    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Startup hook: runs the outdated check when configured.
    ///
    /// Notification permission is not asked for here. It is requested the
    /// first time there is an outdated notice to show.
    pub async fn initialize(&self) {
        if self.check_outdated_on_startup {
            self.get_outdated_dependencies().await;
        }
    }

    /// Derived view of the stored list.
    ///
    /// `outdated` is recomputed against the outdated set on every call. With
    /// the outdated filter on, up-to-date entries are left out.
    pub fn dependencies(&self) -> Vec<Dependency> {
        let filter_outdated = self.filter_outdated.load(Ordering::Relaxed);
        let state = self.state();

        state
            .dependencies
            .iter()
            .filter(|dependency| !filter_outdated || state.outdated.contains(&dependency.name))
            .map(|dependency| annotate(dependency, &state.outdated))
            .collect()
    }

    /// Copy of the outdated report; empty until the check has completed
    pub fn outdated_report(&self) -> OutdatedSet {
        self.state().outdated.clone()
    }

    pub fn set_filter_outdated(&self, enabled: bool) {
        self.filter_outdated.store(enabled, Ordering::Relaxed);
    }

    pub fn is_filtering_outdated(&self) -> bool {
        self.filter_outdated.load(Ordering::Relaxed)
    }

    /// Replaces the stored list with a fresh read of every manifest section,
    /// then runs the outdated check.
    ///
    /// # Errors
    /// Returns the channel error of the first failing section query; the
    /// stored list is left as it was.
    pub async fn fetch_dependencies(&self) -> Result<()> {
        let dependencies = self.load_all_dependencies().await?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} dependenc{}",
            dependencies.len(),
            if dependencies.len() == 1 { "y" } else { "ies" }
        ));
        self.state().dependencies = dependencies;

        self.get_outdated_dependencies().await;
        Ok(())
    }

    /// Runs the outdated check, at most once per store.
    ///
    /// Does nothing when the outdated channel is unavailable or a check has
    /// already been started. A failed check is reported as a warning and
    /// discarded; it does not re-arm the guard.
    pub async fn get_outdated_dependencies(&self) {
        if !self.outdated_channel.is_available() {
            return;
        }

        if self
            .outdated_check_started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        self.progress_reporter
            .start_activity("🔍 Checking for outdated dependencies...");

        let outdated = match self.query_outdated_set().await {
            Ok(outdated) => outdated,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Outdated check failed, continuing without it.\n{}",
                    e
                ));
                return;
            }
        };

        let count = outdated.len();
        self.state().outdated = outdated;
        self.progress_reporter
            .report(&format!("📊 {} outdated dependenc{}", count, if count == 1 { "y" } else { "ies" }));

        if count > 0 {
            self.trigger_notification(count).await;
        }
    }

    /// Forwards an add intent, then re-reads the whole manifest.
    ///
    /// # Returns
    /// The refreshed view, committed before this returns
    ///
    /// # Errors
    /// - `InvalidDependencyName` if the name could be mistaken for a flag
    /// - `ChannelUnavailable` if no transport is present
    /// - `MutationRejected` if the mutator answered with an `error` field
    ///
    /// In all of these cases the stored list is unchanged.
    pub async fn add_dependency(
        &self,
        name: &str,
        dependency_type: DependencyType,
    ) -> Result<Vec<Dependency>> {
        let name = DependencyName::new(name)?;
        let request = MutationRequest::add(name.as_str(), dependency_type);
        self.ensure_available(request.resource())?;

        self.progress_reporter.start_activity(&format!(
            "📦 Adding {} to {}...",
            name, dependency_type
        ));

        let response = self.mutation_channel.mutate(request.clone()).await?;
        if let Some(details) = response.error_details() {
            return Err(DependencyError::MutationRejected {
                operation: request.resource().to_string(),
                dependency: name.to_string(),
                details,
            }
            .into());
        }

        let dependencies = self.load_all_dependencies().await?;
        self.state().dependencies = dependencies;

        self.progress_reporter
            .report_completion(&format!("✅ Added {} to {}", name, dependency_type));
        Ok(self.dependencies())
    }

    /// Forwards a remove intent, then drops the entry from the stored list.
    ///
    /// The list is not re-read. When several entries share the name, the one
    /// with the same type goes first.
    ///
    /// # Returns
    /// The entry as it was stored before removal (the given dependency if the
    /// store never held it)
    ///
    /// # Errors
    /// - `ChannelUnavailable` if no transport is present
    /// - `MutationRejected` if the mutator answered with an `error` field
    /// - `NoResponse` if the reply was absent or falsy
    ///
    /// In all of these cases the stored list is unchanged.
    pub async fn delete_dependency(&self, dependency: &Dependency) -> Result<Dependency> {
        let snapshot = {
            let state = self.state();
            find_entry(&state.dependencies, dependency)
                .map(|index| annotate(&state.dependencies[index], &state.outdated))
                .unwrap_or_else(|| dependency.clone())
        };

        let name = DependencyName::new(dependency.name.as_str())?;
        let request = MutationRequest::remove(name.as_str(), dependency.dependency_type);
        self.ensure_available(request.resource())?;

        self.progress_reporter
            .start_activity(&format!("🗑️  Removing {}...", name));

        let response = self.mutation_channel.mutate(request.clone()).await?;
        if let Some(details) = response.error_details() {
            return Err(DependencyError::MutationRejected {
                operation: request.resource().to_string(),
                dependency: name.to_string(),
                details,
            }
            .into());
        }
        if !response.is_acknowledged() {
            return Err(DependencyError::NoResponse {
                operation: request.resource().to_string(),
                dependency: name.to_string(),
            }
            .into());
        }

        {
            let mut state = self.state();
            if let Some(index) = find_entry(&state.dependencies, dependency) {
                state.dependencies.remove(index);
            }
        }

        self.progress_reporter
            .report_completion(&format!("✅ Removed {}", name));
        Ok(snapshot)
    }

    /// In-place updates are not supported yet. Nothing is sent and nothing
    /// changes.
    pub async fn update_dependency(&self, dependency: &Dependency) -> UpdateOutcome {
        self.progress_reporter.report(&format!(
            "ℹ️  Updating {} is not supported yet",
            dependency.name
        ));
        UpdateOutcome::NotSupported
    }

    /// Click behaviour of the outdated notification: go to the dependency
    /// view, focus the window, dismiss the notification.
    ///
    /// Front ends whose notifications can be clicked call this from their
    /// click handler. The console front end prints a notice instead, so it
    /// has no caller there.
    pub fn open_notification(&self, notification: &Notification) {
        self.navigator.navigate(Route::Dependencies);
        self.navigator.focus_window();
        self.notification_center.close(notification.id);
    }

    /// Reads every known manifest section, one after another, in
    /// `DependencyType::ALL` order. Missing sections contribute nothing.
    async fn load_all_dependencies(&self) -> Result<Vec<Dependency>> {
        self.ensure_available("package")?;

        let mut dependencies = Vec::new();
        for dependency_type in DependencyType::ALL {
            let Some(section) = self
                .mutation_channel
                .query_manifest_section(dependency_type)
                .await?
            else {
                continue;
            };

            dependencies.extend(
                section
                    .into_iter()
                    .map(|(name, version)| Dependency::new(name, version, dependency_type)),
            );
        }

        Ok(dependencies)
    }

    async fn query_outdated_set(&self) -> Result<OutdatedSet> {
        let report = self.outdated_channel.query_outdated().await?;
        OutdatedSet::from_json(&report)
    }

    /// Shows the outdated notice if permission is, or becomes, granted
    async fn trigger_notification(&self, count: usize) {
        let permitted = match self.notification_center.permission() {
            NotificationPermission::Granted => true,
            NotificationPermission::Denied => false,
            NotificationPermission::Default => {
                self.notification_center.request_permission().await
                    == NotificationPermission::Granted
            }
        };

        if !permitted {
            return;
        }

        let notification = Notification::outdated_dependencies(count);
        if let Err(e) = self.notification_center.show(&notification) {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: Could not show notification: {}", e));
        }
    }

    fn ensure_available(&self, operation: &str) -> Result<()> {
        if self.mutation_channel.is_available() {
            Ok(())
        } else {
            Err(DependencyError::ChannelUnavailable {
                operation: operation.to_string(),
            }
            .into())
        }
    }
}

#[async_trait]
impl<MC, OC, NC, NAV, PR> DependencyStorePort for DependencyStore<MC, OC, NC, NAV, PR>
where
    MC: MutationChannel,
    OC: OutdatedChannel,
    NC: NotificationCenter,
    NAV: Navigator,
    PR: ProgressReporter,
{
    fn dependencies(&self) -> Vec<Dependency> {
        DependencyStore::dependencies(self)
    }

    async fn fetch_dependencies(&self) -> Result<()> {
        DependencyStore::fetch_dependencies(self).await
    }

    async fn add_dependency(
        &self,
        name: &str,
        dependency_type: DependencyType,
    ) -> Result<Vec<Dependency>> {
        DependencyStore::add_dependency(self, name, dependency_type).await
    }

    async fn delete_dependency(&self, dependency: &Dependency) -> Result<Dependency> {
        DependencyStore::delete_dependency(self, dependency).await
    }

    async fn update_dependency(&self, dependency: &Dependency) -> UpdateOutcome {
        DependencyStore::update_dependency(self, dependency).await
    }
}

fn annotate(dependency: &Dependency, outdated: &OutdatedSet) -> Dependency {
    let mut annotated = dependency.clone();
    annotated.outdated = outdated.contains(&dependency.name);
    if annotated.installed_version.is_none() {
        annotated.installed_version = outdated
            .installed_version(&dependency.name)
            .map(str::to_string);
    }
    annotated
}

/// Position of the stored entry for `dependency`: same name and type if
/// present, otherwise the first entry with that name
fn find_entry(dependencies: &[Dependency], dependency: &Dependency) -> Option<usize> {
    dependencies
        .iter()
        .position(|d| d.is_named(&dependency.name) && d.dependency_type == dependency.dependency_type)
        .or_else(|| dependencies.iter().position(|d| d.is_named(&dependency.name)))
}
