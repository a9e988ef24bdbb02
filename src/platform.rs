//! Platform identification for release artifact selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// Operating systems that termpicker publishes release archives for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Os {
    Linux,
    Darwin,
    Windows,
}

impl Os {
    /// Normalize a raw OS string as reported by `uname -s`, Neovim's
    /// `vim.loop.os_uname().sysname` or `std::env::consts::OS`.
    ///
    /// Returns `None` for anything outside the supported table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nvim_termpicker::Os;
    ///
    /// assert_eq!(Os::from_raw("Darwin"), Some(Os::Darwin));
    /// assert_eq!(Os::from_raw("macos"), Some(Os::Darwin));
    /// assert_eq!(Os::from_raw("FreeBSD"), None);
    /// ```
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "linux" => Some(Self::Linux),
            "darwin" | "macos" => Some(Self::Darwin),
            "windows" | "windows_nt" => Some(Self::Windows),
            _ => None,
        }
    }
}

/// CPU architectures that termpicker publishes release archives for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Arch {
    Amd64,
    Arm64,
    Arm,
}

impl Arch {
    /// Normalize a raw machine string (`uname -m`, `std::env::consts::ARCH`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use nvim_termpicker::Arch;
    ///
    /// assert_eq!(Arch::from_raw("x86_64"), Some(Arch::Amd64));
    /// assert_eq!(Arch::from_raw("aarch64"), Some(Arch::Arm64));
    /// assert_eq!(Arch::from_raw("riscv64"), None);
    /// ```
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" | "x64" => Some(Self::Amd64),
            "aarch64" | "arm64" => Some(Self::Arm64),
            "arm" | "armv6l" | "armv7l" | "armv7" => Some(Self::Arm),
            _ => None,
        }
    }
}

/// Raw, un-normalized platform strings as reported by the host.
///
/// Kept separate from [`PlatformIdentifier`] so the host editor can pass
/// whatever its own `uname` reports and tests can pin arbitrary values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPlatform {
    /// Raw operating system name (e.g. `"Linux"`, `"Darwin"`).
    pub os: String,
    /// Raw machine name (e.g. `"x86_64"`, `"arm64"`).
    pub arch: String,
}

impl RawPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this process was compiled for.
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }
}

/// A normalized `(os, arch)` pair selecting one release artifact.
///
/// Renders as `os-arch`, which is the suffix used in release archive names.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::{PlatformIdentifier, RawPlatform};
///
/// let id = PlatformIdentifier::from_raw(&RawPlatform::new("Darwin", "arm64")).unwrap();
/// assert_eq!(id.to_string(), "darwin-arm64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformIdentifier {
    pub os: Os,
    pub arch: Arch,
}

impl PlatformIdentifier {
    /// Normalize raw host strings. `None` if either value is unrecognized.
    pub fn from_raw(raw: &RawPlatform) -> Option<Self> {
        Some(Self {
            os: Os::from_raw(&raw.os)?,
            arch: Arch::from_raw(&raw.arch)?,
        })
    }

    /// Every supported platform.
    pub fn all() -> impl Iterator<Item = Self> {
        Os::iter().flat_map(|os| Arch::iter().map(move |arch| Self { os, arch }))
    }
}

impl fmt::Display for PlatformIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
