use crate::dependency_management::domain::DependencyType;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Dependencies declared in one manifest section: name -> version range
pub type ManifestSection = BTreeMap<String, String>;

/// A single add/remove intent forwarded to the mutator.
///
/// Serialises to the wire shape the mutator expects, e.g.
/// `{"resource":"add-dependency","dependencyName":"lodash","dependencyType":"dependencies"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "resource", rename_all = "kebab-case")]
pub enum MutationRequest {
    #[serde(rename_all = "camelCase")]
    AddDependency {
        dependency_name: String,
        dependency_type: DependencyType,
    },
    #[serde(rename_all = "camelCase")]
    RemoveDependency {
        dependency_name: String,
        dependency_type: DependencyType,
    },
}

impl MutationRequest {
    pub fn add(dependency_name: impl Into<String>, dependency_type: DependencyType) -> Self {
        MutationRequest::AddDependency {
            dependency_name: dependency_name.into(),
            dependency_type,
        }
    }

    pub fn remove(dependency_name: impl Into<String>, dependency_type: DependencyType) -> Self {
        MutationRequest::RemoveDependency {
            dependency_name: dependency_name.into(),
            dependency_type,
        }
    }

    /// Resource name as it appears on the wire
    pub fn resource(&self) -> &'static str {
        match self {
            MutationRequest::AddDependency { .. } => "add-dependency",
            MutationRequest::RemoveDependency { .. } => "remove-dependency",
        }
    }

    pub fn dependency_name(&self) -> &str {
        match self {
            MutationRequest::AddDependency {
                dependency_name, ..
            }
            | MutationRequest::RemoveDependency {
                dependency_name, ..
            } => dependency_name,
        }
    }
}

/// Raw reply of the mutator. `None` means nothing came back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationResponse(Option<Value>);

impl MutationResponse {
    pub fn new(value: Option<Value>) -> Self {
        Self(value)
    }

    /// Reply without an `error` field
    pub fn ok(value: Value) -> Self {
        Self(Some(value))
    }

    pub fn error(details: impl Into<String>) -> Self {
        Self(Some(serde_json::json!({ "error": details.into() })))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<&Value> {
        self.0.as_ref()
    }

    /// Contents of a present, non-null `error` field
    pub fn error_details(&self) -> Option<String> {
        match self.0.as_ref()?.get("error")? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Whether a reply arrived at all and is not falsy (`null`, `false`, `0`, `""`)
    pub fn is_acknowledged(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

/// MutationChannel port for reading and changing the project manifest
///
/// Each `mutate` call is one atomic external side effect; the store never
/// batches or merges them.
#[async_trait]
pub trait MutationChannel: Send + Sync {
    /// Whether a transport is present at all. An unavailable channel makes
    /// every store operation that needs it fail fast.
    fn is_available(&self) -> bool {
        true
    }

    /// Lists the dependencies of one manifest section.
    ///
    /// # Returns
    /// `None` when the manifest has no such section
    async fn query_manifest_section(
        &self,
        dependency_type: DependencyType,
    ) -> Result<Option<ManifestSection>>;

    /// Forwards an add/remove intent and returns the raw reply
    async fn mutate(&self, request: MutationRequest) -> Result<MutationResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_request_wire_shape() {
        let request = MutationRequest::add("lodash", DependencyType::Production);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "resource": "add-dependency",
                "dependencyName": "lodash",
                "dependencyType": "dependencies"
            })
        );
        assert_eq!(request.resource(), "add-dependency");
    }

    #[test]
    fn test_remove_request_wire_shape() {
        let request = MutationRequest::remove("jest", DependencyType::Development);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "resource": "remove-dependency",
                "dependencyName": "jest",
                "dependencyType": "devDependencies"
            })
        );
        assert_eq!(request.dependency_name(), "jest");
    }

    #[test]
    fn test_error_details() {
        assert_eq!(
            MutationResponse::error("E404").error_details().as_deref(),
            Some("E404")
        );
        assert_eq!(
            MutationResponse::ok(json!({"error": {"code": 1}}))
                .error_details()
                .as_deref(),
            Some("{\"code\":1}")
        );
        assert!(MutationResponse::ok(json!({"error": null}))
            .error_details()
            .is_none());
        assert!(MutationResponse::ok(json!({})).error_details().is_none());
        assert!(MutationResponse::empty().error_details().is_none());
    }

    #[test]
    fn test_is_acknowledged() {
        assert!(!MutationResponse::empty().is_acknowledged());
        assert!(!MutationResponse::ok(Value::Null).is_acknowledged());
        assert!(!MutationResponse::ok(json!(false)).is_acknowledged());
        assert!(!MutationResponse::ok(json!(0)).is_acknowledged());
        assert!(!MutationResponse::ok(json!("")).is_acknowledged());
        assert!(MutationResponse::ok(json!(true)).is_acknowledged());
        assert!(MutationResponse::ok(json!({})).is_acknowledged());
    }
}
