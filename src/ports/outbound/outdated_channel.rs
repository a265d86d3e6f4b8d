use crate::shared::Result;
use async_trait::async_trait;

/// OutdatedChannel port for asking the environment which installed
/// packages are outdated
#[async_trait]
pub trait OutdatedChannel: Send + Sync {
    /// Whether a transport is present. The store skips the check entirely
    /// when it is not.
    fn is_available(&self) -> bool {
        true
    }

    /// Runs the outdated query.
    ///
    /// # Returns
    /// The raw report: a JSON object keyed by package name
    async fn query_outdated(&self) -> Result<String>;
}
