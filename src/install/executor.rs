//! Installation execution for termpicker.
//!
//! This module provides the [`Installer`], which obtains the termpicker
//! executable when the [`Resolver`] cannot find one: first through
//! `go install`, then by downloading and unpacking a prebuilt release.

use super::progress::emit;
use super::{
    CommandOutput, CommandRunner, InstallError, InstallStep, Notification, StructuredCommand,
    SystemRunner,
};
use crate::resolution::{FileProbe, SystemProbe};
use crate::{PlatformIdentifier, RawPlatform, Resolver};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Program probed on the search path to decide whether `go install` is an option.
const PACKAGE_MANAGER: &str = "go";

/// Obtains the termpicker executable and keeps the resolver cache current.
///
/// # Consent Model
///
/// Calling [`install`](Self::install) IS consent to install. The caller's
/// UI is responsible for confirming with the user first.
///
/// # Example
///
/// ```rust,no_run
/// use nvim_termpicker::Installer;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let mut installer = Installer::from_env();
///     let ok = installer
///         .install(|n| println!("[{}] {}", n.level, n.message))
///         .await;
///     if ok {
///         println!("termpicker at {:?}", installer.resolver_mut().path());
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Installer<R, P> {
    resolver: Resolver<P>,
    runner: R,
    platform: RawPlatform,
}

impl Installer<SystemRunner, SystemProbe> {
    /// An installer over real processes and the real filesystem.
    pub fn from_env() -> Self {
        Self::new(Resolver::from_env(), SystemRunner, RawPlatform::current())
    }
}

impl<R: CommandRunner, P: FileProbe> Installer<R, P> {
    pub fn new(resolver: Resolver<P>, runner: R, platform: RawPlatform) -> Self {
        Self {
            resolver,
            runner,
            platform,
        }
    }

    pub fn resolver(&self) -> &Resolver<P> {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut Resolver<P> {
        &mut self.resolver
    }

    pub fn into_resolver(self) -> Resolver<P> {
        self.resolver
    }

    /// Make sure termpicker is installed.
    ///
    /// Returns `true` when a live executable is available afterwards. Every
    /// failure is reported through `on_notify` at [`Level::Error`]; no error
    /// escapes this call.
    ///
    /// [`Level::Error`]: super::Level::Error
    pub async fn install<F>(&mut self, on_notify: F) -> bool
    where
        F: Fn(Notification) + Send + Sync,
    {
        match self.try_install(&on_notify).await {
            Ok(_) => true,
            Err(e) => {
                emit(&on_notify, Notification::error(e.user_message()));
                false
            }
        }
    }

    /// Resolve the executable, installing it first if necessary.
    pub async fn path_or_install<F>(&mut self, on_notify: F) -> Option<PathBuf>
    where
        F: Fn(Notification) + Send + Sync,
    {
        if let Some(path) = self.resolver.path() {
            return Some(path);
        }
        if self.install(on_notify).await {
            self.resolver.path()
        } else {
            None
        }
    }

    /// Install and return the resulting path, or the error that ended the
    /// attempt.
    ///
    /// Package-manager failures are not returned: they are reported through
    /// `on_notify` as warnings and the release download is tried instead.
    pub async fn try_install<F>(&mut self, on_notify: &F) -> Result<PathBuf, InstallError>
    where
        F: Fn(Notification) + Send + Sync,
    {
        if let Some(path) = self.resolver.path() {
            debug!(path = %path.display(), "termpicker already installed");
            return Ok(path);
        }
        self.resolver.invalidate();

        if self.package_manager_available() {
            match self.install_with_package_manager().await {
                Ok(path) => {
                    emit(
                        on_notify,
                        Notification::info(format!("termpicker installed to {}", path.display())),
                    );
                    return Ok(path);
                }
                Err(e) => emit(
                    on_notify,
                    Notification::warn(format!(
                        "go install did not provide termpicker ({}); falling back to binary download",
                        e.user_message()
                    )),
                ),
            }
        }

        self.install_from_release(on_notify).await
    }

    fn package_manager_available(&self) -> bool {
        self.resolver
            .probe()
            .search_path(PACKAGE_MANAGER)
            .is_some()
    }

    async fn install_with_package_manager(&mut self) -> Result<PathBuf, InstallError> {
        let command = self.resolver.source().go_install_command();
        self.run(InstallStep::PackageManager, &command).await?;

        self.resolver.path().ok_or_else(|| InstallError::NotFound {
            binary: self.resolver.source().binary_name.clone(),
        })
    }

    async fn install_from_release<F>(&mut self, on_notify: &F) -> Result<PathBuf, InstallError>
    where
        F: Fn(Notification) + Send + Sync,
    {
        // Step 1: Pick the release artifact for this host
        let platform = PlatformIdentifier::from_raw(&self.platform).ok_or_else(|| {
            InstallError::UnsupportedPlatform {
                os: self.platform.os.clone(),
                arch: self.platform.arch.clone(),
            }
        })?;

        // Step 2: Create the local install directory
        let install_dir =
            self.resolver
                .local_install_dir()
                .ok_or_else(|| InstallError::Filesystem {
                    step: InstallStep::CreateDirectory,
                    message: "neither XDG_DATA_HOME nor HOME is set".to_string(),
                })?;
        self.resolver
            .probe()
            .create_dir_all(&install_dir)
            .map_err(|e| InstallError::Filesystem {
                step: InstallStep::CreateDirectory,
                message: format!("{}: {e}", install_dir.display()),
            })?;

        // Step 3: Build the download URL and temp archive path
        let source = self.resolver.source();
        let url = source.download_url(platform);
        let archive = self.resolver.environment().temp_dir().join(format!(
            "{}-{}-{}.tar.gz",
            source.binary_name,
            platform,
            std::process::id()
        ));
        let binary = install_dir.join(&source.binary_name);

        // Step 4: Download, dropping any partial archive on failure
        emit(
            on_notify,
            Notification::info(format!("Downloading termpicker for {platform}...")),
        );
        if let Err(e) = self
            .run(InstallStep::Download, &download_command(&url, &archive))
            .await
        {
            self.remove_archive(&archive);
            return Err(e);
        }

        // Step 5: Extract, then remove the archive either way
        let extracted = self
            .run(InstallStep::Extract, &extract_command(&archive, &install_dir))
            .await;
        self.remove_archive(&archive);
        extracted?;

        // Step 6: Mark executable; verification below catches a failure here
        if let Err(e) = self.resolver.probe().set_executable(&binary) {
            warn!(path = %binary.display(), error = %e, "could not mark termpicker executable");
        }

        // Step 7: Verify and cache
        if self.resolver.cache_if_live(&binary) {
            emit(
                on_notify,
                Notification::info(format!("termpicker installed to {}", binary.display())),
            );
            Ok(binary)
        } else {
            Err(InstallError::PostInstallVerificationFailure { path: binary })
        }
    }

    fn remove_archive(&self, archive: &Path) {
        if let Err(e) = self.resolver.probe().remove_file(archive) {
            debug!(path = %archive.display(), error = %e, "could not remove downloaded archive");
        }
    }

    /// Run a command, turning spawn failures and non-zero exits into errors.
    async fn run(
        &self,
        step: InstallStep,
        command: &StructuredCommand,
    ) -> Result<CommandOutput, InstallError> {
        debug!(%step, %command, "running install command");

        let output = self
            .runner
            .run(command)
            .await
            .map_err(|e| InstallError::ProcessFailure {
                step,
                message: format!("could not run {}: {e}", command.program),
                exit_code: None,
                output: None,
            })?;

        if !output.is_success() {
            let code = output
                .exit_code
                .map_or_else(|| "a signal".to_string(), |c| format!("code {c}"));
            return Err(InstallError::ProcessFailure {
                step,
                message: format!("`{}` exited with {code}", command.program),
                exit_code: output.exit_code,
                output: Some(output.output),
            });
        }

        Ok(output)
    }
}

fn download_command(url: &str, archive: &Path) -> StructuredCommand {
    StructuredCommand::new(
        "curl",
        [
            "-fsSL".to_string(),
            "-o".to_string(),
            archive.display().to_string(),
            url.to_string(),
        ],
    )
}

fn extract_command(archive: &Path, install_dir: &Path) -> StructuredCommand {
    StructuredCommand::new(
        "tar",
        [
            "-xzf".to_string(),
            archive.display().to_string(),
            "-C".to_string(),
            install_dir.display().to_string(),
        ],
    )
}
