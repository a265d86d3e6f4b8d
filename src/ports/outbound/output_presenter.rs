use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts where the rendered dependency list ends up (stdout, a file).
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
