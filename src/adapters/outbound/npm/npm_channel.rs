use crate::dependency_management::domain::DependencyType;
use crate::ports::outbound::{
    ManifestSection, MutationChannel, MutationRequest, MutationResponse, OutdatedChannel,
};
use crate::shared::error::DependencyError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;

const MANIFEST_FILENAME: &str = "package.json";

/// NpmChannel adapter backed by a project's `package.json` and the npm CLI
///
/// Manifest sections are read straight from `package.json`; the outdated
/// report and every mutation go through `npm` running in the project
/// directory. It implements both channel ports, so one value (cloned) can
/// serve as both.
#[derive(Debug, Clone)]
pub struct NpmChannel {
    project_dir: PathBuf,
    npm_command: String,
}

impl NpmChannel {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            npm_command: "npm".to_string(),
        }
    }

    /// Uses another executable in place of `npm` (e.g. a wrapper or a full path)
    pub fn with_npm_command(mut self, npm_command: impl Into<String>) -> Self {
        self.npm_command = npm_command.into();
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(MANIFEST_FILENAME)
    }

    async fn read_manifest(&self) -> Result<Value> {
        let path = self.manifest_path();
        let manifest_error = |details: String| DependencyError::ManifestRead {
            path: path.clone(),
            details,
        };

        validate_regular_file(&path, MANIFEST_FILENAME)
            .map_err(|e| manifest_error(e.to_string()))?;

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| manifest_error(e.to_string()))?;

        let manifest = serde_json::from_str(&content).map_err(|e| manifest_error(e.to_string()))?;
        Ok(manifest)
    }

    async fn run_npm(&self, args: &[&str]) -> Result<Output> {
        Command::new(&self.npm_command)
            .args(args)
            .current_dir(&self.project_dir)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                DependencyError::CommandFailed {
                    command: self.describe(args),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.npm_command, args.join(" "))
    }

    fn mutation_args(request: &MutationRequest) -> Vec<&str> {
        match request {
            MutationRequest::AddDependency {
                dependency_name,
                dependency_type,
            } => vec![
                "install",
                dependency_type.save_flag(),
                "--",
                dependency_name.as_str(),
            ],
            MutationRequest::RemoveDependency {
                dependency_name, ..
            } => vec!["uninstall", "--", dependency_name.as_str()],
        }
    }
}

/// Reads one section out of a parsed manifest. Anything that is not an
/// object counts as a missing section; non-string versions are skipped.
fn manifest_section(manifest: &Value, dependency_type: DependencyType) -> Option<ManifestSection> {
    let entries = manifest.get(dependency_type.as_str())?.as_object()?;
    Some(
        entries
            .iter()
            .filter_map(|(name, version)| Some((name.clone(), version.as_str()?.to_string())))
            .collect(),
    )
}

#[async_trait]
impl MutationChannel for NpmChannel {
    fn is_available(&self) -> bool {
        self.manifest_path().is_file()
    }

    async fn query_manifest_section(
        &self,
        dependency_type: DependencyType,
    ) -> Result<Option<ManifestSection>> {
        let manifest = self.read_manifest().await?;
        Ok(manifest_section(&manifest, dependency_type))
    }

    async fn mutate(&self, request: MutationRequest) -> Result<MutationResponse> {
        let args = Self::mutation_args(&request);
        let output = self.run_npm(&args).await?;

        if output.status.success() {
            Ok(MutationResponse::ok(json!({
                "resource": request.resource(),
                "dependencyName": request.dependency_name(),
            })))
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Ok(MutationResponse::error(stderr.trim()))
        }
    }
}

#[async_trait]
impl OutdatedChannel for NpmChannel {
    fn is_available(&self) -> bool {
        self.manifest_path().is_file()
    }

    /// `npm outdated` exits with 1 whenever something is outdated, so the
    /// exit status alone says nothing; a run counts as failed only when it
    /// printed no report.
    async fn query_outdated(&self) -> Result<String> {
        let args = ["outdated", "--json"];
        let output = self.run_npm(&args).await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() && stdout.trim().is_empty() {
            return Err(DependencyError::CommandFailed {
                command: self.describe(&args),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_manifest(manifest: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), manifest).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_query_manifest_section_reads_package_json() {
        let dir = project_with_manifest(
            r#"{
                "name": "demo",
                "dependencies": {"lodash": "^4.17.21", "axios": "^1.6.0"},
                "devDependencies": {"jest": "^29.0.0"}
            }"#,
        );
        let channel = NpmChannel::new(dir.path());

        let production = channel
            .query_manifest_section(DependencyType::Production)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(production.len(), 2);
        assert_eq!(production["lodash"], "^4.17.21");

        let development = channel
            .query_manifest_section(DependencyType::Development)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(development["jest"], "^29.0.0");
    }

    #[tokio::test]
    async fn test_query_manifest_section_missing_is_none() {
        let dir = project_with_manifest(r#"{"name": "demo", "peerDependencies": false}"#);
        let channel = NpmChannel::new(dir.path());

        assert!(channel
            .query_manifest_section(DependencyType::Optional)
            .await
            .unwrap()
            .is_none());
        assert!(channel
            .query_manifest_section(DependencyType::Peer)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_query_manifest_section_invalid_json() {
        let dir = project_with_manifest("{ not json");
        let channel = NpmChannel::new(dir.path());

        let err = channel
            .query_manifest_section(DependencyType::Production)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DependencyError>(),
            Some(DependencyError::ManifestRead { .. })
        ));
    }

    #[test]
    fn test_is_available_requires_manifest() {
        let dir = TempDir::new().unwrap();
        let channel = NpmChannel::new(dir.path());
        assert!(!MutationChannel::is_available(&channel));

        fs::write(dir.path().join(MANIFEST_FILENAME), "{}").unwrap();
        assert!(MutationChannel::is_available(&channel));
        assert!(OutdatedChannel::is_available(&channel));
    }

    #[test]
    fn test_mutation_args() {
        let add = MutationRequest::add("jest", DependencyType::Development);
        assert_eq!(
            NpmChannel::mutation_args(&add),
            vec!["install", "--save-dev", "--", "jest"]
        );

        let remove = MutationRequest::remove("lodash", DependencyType::Production);
        assert_eq!(
            NpmChannel::mutation_args(&remove),
            vec!["uninstall", "--", "lodash"]
        );
    }

    #[tokio::test]
    async fn test_missing_npm_binary_is_a_command_failure() {
        let dir = project_with_manifest("{}");
        let channel =
            NpmChannel::new(dir.path()).with_npm_command("depdesk-test-no-such-binary");

        let err = channel.query_outdated().await.unwrap_err();
        match err.downcast_ref::<DependencyError>() {
            Some(DependencyError::CommandFailed { command, .. }) => {
                assert_eq!(command, "depdesk-test-no-such-binary outdated --json")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
