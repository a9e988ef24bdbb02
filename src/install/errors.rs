//! Error types for installation operations.
//!
//! This module defines the error types that can occur while resolving or
//! installing termpicker. Each variant carries enough context to build an
//! actionable fix suggestion for the user.

use std::path::PathBuf;
use thiserror::Error;

/// The install step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum InstallStep {
    /// `go install`.
    PackageManager,
    /// Creating the local install directory.
    CreateDirectory,
    /// Fetching the release archive.
    Download,
    /// Unpacking the release archive.
    Extract,
}

/// Errors that can occur during termpicker installation.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::InstallError;
///
/// fn handle_error(error: InstallError) {
///     eprintln!("Installation failed: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// No live executable was found in any search location.
    #[error("{binary} not found in any search location")]
    NotFound {
        /// Executable name that was searched for.
        binary: String,
    },

    /// The host OS/arch pair has no release artifact.
    #[error("Unsupported platform: {os}/{arch}")]
    UnsupportedPlatform {
        /// Raw OS string as reported by the host.
        os: String,
        /// Raw architecture string as reported by the host.
        arch: String,
    },

    /// A process could not be spawned or exited non-zero.
    #[error("{step} failed: {message}")]
    ProcessFailure {
        /// Which step ran the process.
        step: InstallStep,
        /// Short description of the failure.
        message: String,
        /// Exit code, if the process ran at all.
        exit_code: Option<i32>,
        /// Captured stdout+stderr, if the process ran at all.
        output: Option<String>,
    },

    /// A filesystem operation outside a child process failed.
    #[error("{step} failed: {message}")]
    Filesystem {
        /// Which step touched the filesystem.
        step: InstallStep,
        /// The underlying I/O error message.
        message: String,
    },

    /// Extraction finished but the binary is not a live executable.
    #[error("Installation completed but {} is not executable", .path.display())]
    PostInstallVerificationFailure {
        /// Where the binary was expected.
        path: PathBuf,
    },
}

impl InstallError {
    /// Get an actionable suggestion for fixing this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nvim_termpicker::InstallError;
    ///
    /// let error = InstallError::UnsupportedPlatform {
    ///     os: "FreeBSD".to_string(),
    ///     arch: "amd64".to_string(),
    /// };
    /// assert!(error.fix_suggestion().contains("go install"));
    /// ```
    pub fn fix_suggestion(&self) -> String {
        match self {
            Self::NotFound { binary } => {
                format!("Install {binary} and make sure it is on your PATH")
            }
            Self::UnsupportedPlatform { .. } => {
                "No prebuilt release exists for this platform; build it with `go install`"
                    .to_string()
            }
            Self::ProcessFailure { step, .. } => match step {
                InstallStep::PackageManager => "Check your Go toolchain and GOPATH".to_string(),
                InstallStep::Download => {
                    "Check your internet connection and that curl is installed".to_string()
                }
                InstallStep::Extract => "Check that tar is installed".to_string(),
                InstallStep::CreateDirectory => {
                    "Check permissions on the Neovim data directory".to_string()
                }
            },
            Self::Filesystem { .. } => {
                "Check permissions on the Neovim data directory".to_string()
            }
            Self::PostInstallVerificationFailure { path } => format!(
                "Remove {} and try again, or install termpicker manually",
                path.display()
            ),
        }
    }

    /// Captured process output, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::ProcessFailure { output, .. } => output.as_deref(),
            _ => None,
        }
    }

    /// The message shown to the user, including captured output when present.
    pub fn user_message(&self) -> String {
        match self.output().map(str::trim).filter(|o| !o.is_empty()) {
            Some(output) => format!("{self}\n{output}"),
            None => self.to_string(),
        }
    }
}
