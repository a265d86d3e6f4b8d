use crate::dependency_management::domain::{Dependency, SortDescriptor};
use crate::ports::outbound::DependencyFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter that renders the list as a JSON array
///
/// Entries keep the manifest's field names (`type`, `installedVersion`) so
/// the output can be fed to other npm tooling.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyFormatter for JsonFormatter {
    fn format(&self, dependencies: &[Dependency], _sort: SortDescriptor) -> Result<String> {
        let mut output = serde_json::to_string_pretty(dependencies)
            .context("Failed to serialize dependencies to JSON")?;
        output.push('\n');
        Ok(output)
    }
}
