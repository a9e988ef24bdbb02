//! Process execution port for the installer.

use super::{CommandOutput, StructuredCommand};
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use tokio::process::Command;

/// Runs external commands on behalf of the installer.
///
/// [`SystemRunner`] spawns real processes. Tests substitute a recorder so
/// no shell, toolchain, or network is touched.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion and capture its output.
    ///
    /// `Err` means the process could not be spawned at all; a non-zero exit
    /// is reported through [`CommandOutput::exit_code`].
    async fn run(&self, command: &StructuredCommand) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &StructuredCommand) -> io::Result<CommandOutput> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            exit_code: output.status.code(),
            output: combined,
        })
    }
}
