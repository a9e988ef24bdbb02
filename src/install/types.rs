//! Type definitions for installer process invocations.
//!
//! This module defines the data structures passed to and returned from a
//! [`CommandRunner`](super::CommandRunner): the command to execute and its
//! captured result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured command for programmatic execution.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::StructuredCommand;
///
/// let cmd = StructuredCommand::new("tar", ["-xzf", "archive.tar.gz"]);
/// assert_eq!(cmd.program, "tar");
/// assert_eq!(cmd.to_string(), "tar -xzf archive.tar.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredCommand {
    /// The program to execute (e.g., "go", "curl", "tar").
    pub program: String,

    /// Arguments to pass to the program.
    pub args: Vec<String>,
}

impl StructuredCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for StructuredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,

    /// Standard output followed by standard error.
    pub output: String,
}

impl CommandOutput {
    /// A zero exit with the given output.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            output: output.into(),
        }
    }

    /// A non-zero exit with the given output.
    pub fn failure(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
