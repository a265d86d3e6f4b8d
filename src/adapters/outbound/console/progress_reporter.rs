use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it doesn't interfere with the dependency table on
/// stdout. Long-running npm calls get an indicatif spinner that is cleared
/// by the next report.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            quiet: false,
        }
    }

    /// Only errors are written
    pub fn quiet() -> Self {
        Self {
            spinner: Mutex::new(None),
            quiet: true,
        }
    }

    fn clear_spinner(&self) {
        let mut spinner = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_spinner();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn start_activity(&self, message: &str) {
        self.clear_spinner();
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.start_activity("Checking...");
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.report("Done checking");
        assert!(reporter.spinner.lock().unwrap().is_none());

        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_quiet_reporter_never_spins() {
        let reporter = StderrProgressReporter::quiet();
        reporter.start_activity("Checking...");
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
