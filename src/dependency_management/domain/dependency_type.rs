use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Manifest section a dependency is declared in.
///
/// The set is closed: every section the store knows about is listed in
/// [`DependencyType::ALL`], which is also the order sections are queried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyType {
    #[serde(rename = "dependencies")]
    Production,
    #[serde(rename = "devDependencies")]
    Development,
    #[serde(rename = "optionalDependencies")]
    Optional,
    #[serde(rename = "peerDependencies")]
    Peer,
}

impl DependencyType {
    pub const ALL: [DependencyType; 4] = [
        DependencyType::Production,
        DependencyType::Development,
        DependencyType::Optional,
        DependencyType::Peer,
    ];

    /// Manifest section key, e.g. `devDependencies`.
    ///
    /// Sorting by type compares these strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Production => "dependencies",
            DependencyType::Development => "devDependencies",
            DependencyType::Optional => "optionalDependencies",
            DependencyType::Peer => "peerDependencies",
        }
    }

    /// npm flag that records a freshly installed package in this section
    pub fn save_flag(&self) -> &'static str {
        match self {
            DependencyType::Production => "--save-prod",
            DependencyType::Development => "--save-dev",
            DependencyType::Optional => "--save-optional",
            DependencyType::Peer => "--save-peer",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dependencies" | "prod" | "production" => Ok(DependencyType::Production),
            "devDependencies" | "dev" | "development" => Ok(DependencyType::Development),
            "optionalDependencies" | "optional" => Ok(DependencyType::Optional),
            "peerDependencies" | "peer" => Ok(DependencyType::Peer),
            _ => Err(format!(
                "Invalid dependency type: {}. Please specify 'prod', 'dev', 'optional' or 'peer'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_manifest_order() {
        let keys: Vec<&str> = DependencyType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "dependencies",
                "devDependencies",
                "optionalDependencies",
                "peerDependencies"
            ]
        );
    }

    #[test]
    fn test_from_str_accepts_section_keys_and_aliases() {
        assert_eq!(
            DependencyType::from_str("devDependencies").unwrap(),
            DependencyType::Development
        );
        assert_eq!(
            DependencyType::from_str("dev").unwrap(),
            DependencyType::Development
        );
        assert_eq!(
            DependencyType::from_str("prod").unwrap(),
            DependencyType::Production
        );
        assert_eq!(
            DependencyType::from_str("peer").unwrap(),
            DependencyType::Peer
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let err = DependencyType::from_str("bundled").unwrap_err();
        assert!(err.contains("Invalid dependency type"));
    }

    #[test]
    fn test_serializes_as_section_key() {
        let json = serde_json::to_string(&DependencyType::Optional).unwrap();
        assert_eq!(json, "\"optionalDependencies\"");
    }
}
