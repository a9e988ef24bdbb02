//! Upstream coordinates of the termpicker binary.

use crate::install::StructuredCommand;
use crate::PlatformIdentifier;

/// Where termpicker comes from and where it lands.
///
/// [`BinarySource::default`] describes the upstream project. The fields are
/// public so a fork can be pointed at, but nothing in the plugin exposes them
/// as user configuration.
///
/// # Example
///
/// ```rust
/// use nvim_termpicker::{BinarySource, PlatformIdentifier, RawPlatform};
///
/// let source = BinarySource::default();
/// let platform = PlatformIdentifier::from_raw(&RawPlatform::new("Linux", "x86_64")).unwrap();
/// assert!(source
///     .download_url(platform)
///     .ends_with("/releases/latest/download/termpicker-linux-amd64.tar.gz"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySource {
    /// Executable name, also the name inside the release archive.
    pub binary_name: String,

    /// Directory name under `<data-home>/nvim/`.
    pub plugin_name: String,

    /// Go module path passed to `go install`.
    pub go_module: String,

    /// Repository URL, without trailing slash.
    pub repository_url: String,
}

impl Default for BinarySource {
    fn default() -> Self {
        Self {
            binary_name: "termpicker".to_string(),
            plugin_name: "termpicker".to_string(),
            go_module: "github.com/ChausseBenjamin/termpicker".to_string(),
            repository_url: "https://github.com/ChausseBenjamin/termpicker".to_string(),
        }
    }
}

impl BinarySource {
    /// Last path segment of the repository, used as the archive prefix.
    pub fn project_name(&self) -> &str {
        self.repository_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.binary_name)
    }

    /// `<repo>/releases/latest/download/<project>-<os>-<arch>.tar.gz`
    pub fn download_url(&self, platform: PlatformIdentifier) -> String {
        format!(
            "{}/releases/latest/download/{}-{}.tar.gz",
            self.repository_url,
            self.project_name(),
            platform
        )
    }

    /// `go install <module>@latest`
    pub fn go_install_command(&self) -> StructuredCommand {
        StructuredCommand::new(
            "go",
            ["install".to_string(), format!("{}@latest", self.go_module)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arch, Os};

    #[test]
    fn test_download_url_linux_amd64() {
        let url = BinarySource::default().download_url(PlatformIdentifier {
            os: Os::Linux,
            arch: Arch::Amd64,
        });
        assert_eq!(
            url,
            "https://github.com/ChausseBenjamin/termpicker/releases/latest/download/termpicker-linux-amd64.tar.gz"
        );
    }

    #[test]
    fn test_download_url_every_platform() {
        let source = BinarySource::default();
        for platform in PlatformIdentifier::all() {
            let url = source.download_url(platform);
            assert!(url.ends_with(&format!("termpicker-{platform}.tar.gz")));
        }
    }

    #[test]
    fn test_go_install_command() {
        let cmd = BinarySource::default().go_install_command();
        assert_eq!(cmd.program, "go");
        assert_eq!(
            cmd.args,
            vec!["install", "github.com/ChausseBenjamin/termpicker@latest"]
        );
        assert_eq!(
            cmd.to_string(),
            "go install github.com/ChausseBenjamin/termpicker@latest"
        );
    }

    #[test]
    fn test_project_name() {
        let source = BinarySource {
            repository_url: "https://example.com/fork/picker".to_string(),
            ..Default::default()
        };
        assert_eq!(source.project_name(), "picker");
    }
}
