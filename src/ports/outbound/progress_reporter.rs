/// ProgressReporter port for reporting progress during operations
///
/// This is the crate's logging surface: the store and the CLI report what
/// they are doing here instead of printing directly.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Shows an indeterminate activity indicator until the next report
    fn start_activity(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
