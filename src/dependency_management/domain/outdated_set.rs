use crate::shared::error::DependencyError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Version details reported for one outdated package.
///
/// Every field is optional: only the key of the outdated report is
/// significant, the metadata is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutdatedPackage {
    pub current: Option<String>,
    pub wanted: Option<String>,
    pub latest: Option<String>,
}

/// Names of the dependencies reported as outdated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutdatedSet {
    packages: BTreeMap<String, OutdatedPackage>,
}

impl OutdatedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an outdated report: a JSON object keyed by package name.
    ///
    /// Values that don't look like version metadata still mark the key as
    /// outdated. A blank report means nothing is outdated.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }

        let raw: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| DependencyError::MalformedOutdatedResponse {
                details: e.to_string(),
            })?;

        let packages = raw
            .into_iter()
            .map(|(name, value)| {
                let info = serde_json::from_value(value).unwrap_or_default();
                (name, info)
            })
            .collect();

        Ok(Self { packages })
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            packages: names
                .into_iter()
                .map(|name| (name.into(), OutdatedPackage::default()))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Version currently installed in `node_modules`, if the report had one
    pub fn installed_version(&self, name: &str) -> Option<&str> {
        self.packages.get(name)?.current.as_deref()
    }

    pub fn latest_version(&self, name: &str) -> Option<&str> {
        self.packages.get(name)?.latest.as_deref()
    }
}
