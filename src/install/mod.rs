//! Installation support for termpicker.
//!
//! This module provides the [`Installer`] along with the pieces it is built
//! from:
//!
//! - `CommandRunner`: the process execution port, with `SystemRunner` as the
//!   real implementation
//! - `StructuredCommand` / `CommandOutput`: what is run and what came back
//! - `InstallError`: every way an install attempt can end early
//! - `Notification`: user-facing messages delivered through a callback

mod errors;
mod executor;
mod progress;
mod runner;
mod types;

pub use errors::{InstallError, InstallStep};
pub use executor::Installer;
pub use progress::{Level, Notification};
pub use runner::{CommandRunner, SystemRunner};
pub use types::{CommandOutput, StructuredCommand};
