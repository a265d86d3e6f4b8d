use async_trait::async_trait;
use depdesk::prelude::*;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock MutationChannel backed by an in-memory package.json
///
/// Add and remove requests are applied to the manifest the way npm would,
/// so a re-read after a mutation sees the change.
#[derive(Clone, Default)]
pub struct MockManifestChannel {
    sections: Arc<Mutex<HashMap<DependencyType, ManifestSection>>>,
    requests: Arc<Mutex<Vec<MutationRequest>>>,
    rejection: Arc<Mutex<Option<String>>>,
}

impl MockManifestChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependency(self, name: &str, version: &str, dependency_type: DependencyType) -> Self {
        self.sections
            .lock()
            .unwrap()
            .entry(dependency_type)
            .or_insert_with(BTreeMap::new)
            .insert(name.to_string(), version.to_string());
        self
    }

    /// Every following mutation answers with this error
    pub fn reject_with(&self, details: &str) {
        *self.rejection.lock().unwrap() = Some(details.to_string());
    }

    pub fn requests(&self) -> Vec<MutationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn declares(&self, name: &str) -> bool {
        self.sections
            .lock()
            .unwrap()
            .values()
            .any(|section| section.contains_key(name))
    }
}

#[async_trait]
impl MutationChannel for MockManifestChannel {
    async fn query_manifest_section(
        &self,
        dependency_type: DependencyType,
    ) -> Result<Option<ManifestSection>> {
        Ok(self.sections.lock().unwrap().get(&dependency_type).cloned())
    }

    async fn mutate(&self, request: MutationRequest) -> Result<MutationResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(details) = self.rejection.lock().unwrap().clone() {
            return Ok(MutationResponse::error(details));
        }

        let mut sections = self.sections.lock().unwrap();
        match request {
            MutationRequest::AddDependency {
                dependency_name,
                dependency_type,
            } => {
                sections
                    .entry(dependency_type)
                    .or_insert_with(BTreeMap::new)
                    .insert(dependency_name, "^1.0.0".to_string());
            }
            MutationRequest::RemoveDependency {
                dependency_name, ..
            } => {
                for section in sections.values_mut() {
                    section.remove(&dependency_name);
                }
            }
        }

        Ok(MutationResponse::ok(json!({ "ok": true })))
    }
}
