//! Filesystem capability used by the resolver and installer.

use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operations the resolver and installer depend on.
///
/// [`SystemProbe`] talks to the real filesystem. Tests substitute an
/// in-memory implementation to control exactly which paths are live.
pub trait FileProbe: Send + Sync {
    /// Look `name` up on the command search path (`which <name>`).
    fn search_path(&self, name: &str) -> Option<PathBuf>;

    /// Liveness check: the path exists, is a regular file, and is executable.
    fn is_live(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Mark `path` executable (`chmod +x`).
    fn set_executable(&self, path: &Path) -> io::Result<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`FileProbe`] backed by `std::fs` and the `which` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl FileProbe for SystemProbe {
    fn search_path(&self, name: &str) -> Option<PathBuf> {
        // which handles PATHEXT and symlinks
        which::which(name).ok()
    }

    fn is_live(&self, path: &Path) -> bool {
        let Ok(meta) = std::fs::metadata(path) else {
            return false;
        };
        meta.is_file() && has_exec_bit(&meta)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | 0o111);
        std::fs::set_permissions(path, perms)
    }

    #[cfg(not(unix))]
    fn set_executable(&self, path: &Path) -> io::Result<()> {
        std::fs::metadata(path).map(|_| ())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

#[cfg(unix)]
fn has_exec_bit(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bit(_meta: &std::fs::Metadata) -> bool {
    true
}
