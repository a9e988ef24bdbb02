//! Host environment configuration.
//!
//! This module provides the [`Environment`] struct, which captures every
//! environment-dependent location the resolver and installer consult. It is
//! read once from the process environment with [`Environment::from_env`], or
//! built explicitly so tests can point everything at a scratch directory.

use std::path::{Path, PathBuf};

/// Default data home relative to `$HOME` when `XDG_DATA_HOME` is unset.
const DEFAULT_DATA_HOME: &str = ".local/share";

/// Environment-derived locations.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::Environment;
/// use std::path::PathBuf;
///
/// let env = Environment {
///     home: Some(PathBuf::from("/home/user")),
///     ..Default::default()
/// };
/// assert_eq!(
///     env.data_home(),
///     Some(PathBuf::from("/home/user/.local/share"))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `$HOME`.
    pub home: Option<PathBuf>,

    /// `$XDG_DATA_HOME`, if set to a non-empty value.
    pub xdg_data_home: Option<PathBuf>,

    /// `$GOPATH`, the Go toolchain's install root.
    pub gopath: Option<PathBuf>,

    /// Directory for the downloaded archive before extraction.
    ///
    /// Falls back to [`std::env::temp_dir`] when `None`.
    pub temp_dir: Option<PathBuf>,
}

impl Environment {
    /// Read the locations from the current process environment.
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Self {
        Self {
            home: var_path("HOME"),
            xdg_data_home: var_path("XDG_DATA_HOME"),
            gopath: var_path("GOPATH"),
            temp_dir: Some(std::env::temp_dir()),
        }
    }

    /// The XDG data home: `$XDG_DATA_HOME`, else `$HOME/.local/share`.
    pub fn data_home(&self) -> Option<PathBuf> {
        self.xdg_data_home
            .clone()
            .or_else(|| self.home.as_ref().map(|h| h.join(DEFAULT_DATA_HOME)))
    }

    /// The per-plugin install directory: `<data-home>/nvim/<plugin>`.
    pub fn install_dir(&self, plugin: &str) -> Option<PathBuf> {
        self.data_home().map(|d| d.join("nvim").join(plugin))
    }

    /// Resolve a path relative to `$HOME`.
    pub fn home_join(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        self.home.as_ref().map(|h| h.join(relative))
    }

    /// Directory for temporary downloads.
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

fn var_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_home() -> Environment {
        Environment {
            home: Some(PathBuf::from("/home/user")),
            ..Default::default()
        }
    }

    #[test]
    fn test_data_home_default() {
        let env = env_with_home();
        assert_eq!(
            env.data_home(),
            Some(PathBuf::from("/home/user/.local/share"))
        );
    }

    #[test]
    fn test_data_home_xdg_override() {
        let env = Environment {
            xdg_data_home: Some(PathBuf::from("/data")),
            ..env_with_home()
        };
        assert_eq!(env.data_home(), Some(PathBuf::from("/data")));
    }

    #[test]
    fn test_install_dir() {
        let env = env_with_home();
        assert_eq!(
            env.install_dir("termpicker"),
            Some(PathBuf::from("/home/user/.local/share/nvim/termpicker"))
        );
    }

    #[test]
    fn test_no_home_no_data_home() {
        let env = Environment::default();
        assert!(env.data_home().is_none());
        assert!(env.install_dir("termpicker").is_none());
        assert!(env.home_join("go/bin").is_none());
    }

    #[test]
    fn test_temp_dir_fallback() {
        let env = Environment::default();
        assert_eq!(env.temp_dir(), std::env::temp_dir());

        let env = Environment {
            temp_dir: Some(PathBuf::from("/scratch")),
            ..Default::default()
        };
        assert_eq!(env.temp_dir(), PathBuf::from("/scratch"));
    }
}
