//! # nvim-termpicker
//!
//! Binary management and color parsing for the termpicker Neovim plugin.
//!
//! The plugin drives the external `termpicker` color picker. This crate
//! finds a usable copy of that executable, installs one when it is missing,
//! and locates color literals in editor text so the picked color can be
//! written back in place.
//!
//! ## Features
//!
//! - `Resolver`: finds a live executable (PATH, `$GOPATH/bin`, `~/go/bin`,
//!   `~/.local/bin`, the plugin's own data directory) and caches the result
//! - `Installer`: `go install` first, prebuilt release download second
//! - `PlatformIdentifier`: normalized `os-arch` for release selection
//! - `color`: hex / `rgb()` / `hsl()` literal matching
//!
//! ## Example
//!
//! ```rust,no_run
//! use nvim_termpicker::{Installer, Level};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut installer = Installer::from_env();
//!
//!     if !installer.resolver_mut().exists() {
//!         let ok = installer
//!             .install(|n| {
//!                 if n.level == Level::Error {
//!                     eprintln!("{}", n.message);
//!                 }
//!             })
//!             .await;
//!         if !ok {
//!             return;
//!         }
//!     }
//!
//!     println!("termpicker at {:?}", installer.resolver_mut().path());
//! }
//! ```

pub mod color;
mod install;
mod options;
mod platform;
mod resolution;
mod resolver;
mod source;

#[cfg(test)]
mod testing;

pub use install::{
    CommandOutput, CommandRunner, InstallError, InstallStep, Installer, Level, Notification,
    StructuredCommand, SystemRunner,
};
pub use options::Environment;
pub use platform::{Arch, Os, PlatformIdentifier, RawPlatform};
pub use resolution::{FileProbe, SearchStep, SystemProbe, DEFAULT_SEARCH_ORDER};
pub use resolver::{FoundBy, Located, Resolver};
pub use source::BinarySource;
