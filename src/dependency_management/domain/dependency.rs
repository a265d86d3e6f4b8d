use super::DependencyType;
use crate::shared::error::DependencyError;
use crate::shared::Result;
use serde::Serialize;

/// npm refuses package names longer than this
const MAX_DEPENDENCY_NAME_LENGTH: usize = 214;

/// NewType wrapper for a dependency name with validation
///
/// The name is handed to the mutator as a command argument, so anything that
/// could be read as a flag is rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DependencyName(String);

impl DependencyName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| DependencyError::InvalidDependencyName {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty").into());
        }

        if name.len() > MAX_DEPENDENCY_NAME_LENGTH {
            return Err(invalid(&format!(
                "name is too long ({} bytes, maximum {})",
                name.len(),
                MAX_DEPENDENCY_NAME_LENGTH
            ))
            .into());
        }

        if name.starts_with('-') || name.starts_with('.') {
            return Err(invalid("name cannot start with '-' or '.'").into());
        }

        // URL-safe characters npm accepts, legacy names included
        if !name.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '@' | '/' | '.' | '_' | '-' | '~' | '!' | '*' | '\'' | '(' | ')')
        }) {
            return Err(invalid(
                "only ASCII letters, digits and the characters @ / . _ - ~ ! * ' ( ) are allowed",
            )
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DependencyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A dependency declared in the project manifest.
///
/// Identity is the name alone: two entries with the same name in different
/// sections are not told apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub dependency_type: DependencyType,
    pub outdated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed_version: Option<String>,
}

impl Dependency {
    /// Creates an entry as read from the manifest, not yet checked for updates
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        dependency_type: DependencyType,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependency_type,
            outdated: false,
            installed_version: None,
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
