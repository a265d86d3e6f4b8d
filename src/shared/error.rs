use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI jobs to tell an outdated project apart
/// from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - command completed, nothing to flag
    Success = 0,
    /// Outdated dependencies were found and `--fail-on-outdated` was given
    OutdatedDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (npm failure, manifest read error, timeout, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OutdatedDetected => write!(f, "Outdated Dependencies Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while talking to the dependency channels.
///
/// Operations return `anyhow::Error`; callers that need to branch on the
/// failure kind use `downcast_ref::<DependencyError>()`.
#[derive(Debug, Error)]
pub enum DependencyError {
    #[error("No dependency channel is available for '{operation}'\n\n💡 Hint: Run depdesk inside a directory that contains a package.json")]
    ChannelUnavailable { operation: String },

    #[error("'{operation}' was rejected for {dependency}\nDetails: {details}")]
    MutationRejected {
        operation: String,
        dependency: String,
        details: String,
    },

    #[error("Did not receive a response for '{operation}' on {dependency}")]
    NoResponse {
        operation: String,
        dependency: String,
    },

    #[error("Outdated check returned a malformed response\nDetails: {details}")]
    MalformedOutdatedResponse { details: String },

    #[error("'{operation}' timed out after {seconds}s\n\n💡 Hint: Raise request_timeout_secs in depdesk.config.yml or pass --timeout")]
    Timeout { operation: String, seconds: u64 },

    #[error("Failed to read manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that package.json exists and contains valid JSON")]
    ManifestRead { path: PathBuf, details: String },

    #[error("Command failed: {command}\nDetails: {details}\n\n💡 Hint: Please verify that npm is installed and on your PATH")]
    CommandFailed { command: String, details: String },

    #[error("Invalid dependency name '{name}': {reason}")]
    InvalidDependencyName { name: String, reason: String },

    #[error("Dependency '{name}' is not declared in package.json\n\n💡 Hint: Run `depdesk list` to see the declared dependencies")]
    DependencyNotFound { name: String },

    #[error("Invalid project path: {path}\nReason: {reason}")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to write file: {path}\nDetails: {details}")]
    FileWrite { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::OutdatedDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::OutdatedDetected),
            "Outdated Dependencies Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_channel_unavailable_display() {
        let error = DependencyError::ChannelUnavailable {
            operation: "add-dependency".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("add-dependency"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_mutation_rejected_display() {
        let error = DependencyError::MutationRejected {
            operation: "add-dependency".to_string(),
            dependency: "lodash".to_string(),
            details: "E404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("rejected"));
        assert!(display.contains("lodash"));
        assert!(display.contains("E404"));
    }

    #[test]
    fn test_timeout_display() {
        let error = DependencyError::Timeout {
            operation: "outdated".to_string(),
            seconds: 30,
        };
        let display = format!("{}", error);
        assert!(display.contains("timed out after 30s"));
        assert!(display.contains("request_timeout_secs"));
    }

    #[test]
    fn test_manifest_read_display() {
        let error = DependencyError::ManifestRead {
            path: PathBuf::from("/project/package.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/project/package.json"));
        assert!(display.contains("expected value"));
    }

    #[test]
    fn test_error_downcasts_through_anyhow() {
        let error: anyhow::Error = DependencyError::NoResponse {
            operation: "remove-dependency".to_string(),
            dependency: "jest".to_string(),
        }
        .into();
        assert!(matches!(
            error.downcast_ref::<DependencyError>(),
            Some(DependencyError::NoResponse { .. })
        ));
    }
}
