//! Binary resolution with a revalidated per-instance cache.

use crate::resolution::{FileProbe, SearchStep, SystemProbe, DEFAULT_SEARCH_ORDER};
use crate::{BinarySource, Environment};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a resolved path was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundBy {
    /// The cached path from an earlier resolution was still live.
    Cache,
    /// A search step produced a live candidate.
    Search(SearchStep),
}

/// A live executable and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Path to the executable.
    pub path: PathBuf,
    /// Which lookup produced it.
    pub found_by: FoundBy,
}

/// Finds a live termpicker executable.
///
/// The resolver owns its cache, so independent instances never share state.
/// Every public call revalidates the cached path before returning it; a path
/// whose file was removed or lost its executable bit is dropped and the full
/// search runs again.
///
/// # Example
///
/// ```rust,no_run
/// use nvim_termpicker::Resolver;
///
/// let mut resolver = Resolver::from_env();
/// match resolver.path() {
///     Some(path) => println!("termpicker at {}", path.display()),
///     None => println!("termpicker not installed"),
/// }
/// ```
#[derive(Debug)]
pub struct Resolver<P> {
    probe: P,
    env: Environment,
    source: BinarySource,
    order: Vec<SearchStep>,
    cached: Option<PathBuf>,
}

impl Resolver<SystemProbe> {
    /// A resolver over the real filesystem, configured from the process
    /// environment and the upstream [`BinarySource`].
    pub fn from_env() -> Self {
        Self::new(SystemProbe, Environment::from_env(), BinarySource::default())
    }
}

impl<P: FileProbe> Resolver<P> {
    pub fn new(probe: P, env: Environment, source: BinarySource) -> Self {
        Self {
            probe,
            env,
            source,
            order: DEFAULT_SEARCH_ORDER.to_vec(),
            cached: None,
        }
    }

    /// Replace the search order. The cache is still consulted first.
    #[must_use]
    pub fn with_search_order(mut self, order: impl IntoIterator<Item = SearchStep>) -> Self {
        self.order = order.into_iter().collect();
        self
    }

    /// Whether a live executable can be found.
    pub fn exists(&mut self) -> bool {
        self.locate().is_some()
    }

    /// Path to a live executable, if any.
    pub fn path(&mut self) -> Option<PathBuf> {
        self.locate().map(|located| located.path)
    }

    /// Resolve and report which lookup produced the path.
    pub fn locate(&mut self) -> Option<Located> {
        if let Some(cached) = self.cached.take() {
            if self.probe.is_live(&cached) {
                self.cached = Some(cached.clone());
                return Some(Located {
                    path: cached,
                    found_by: FoundBy::Cache,
                });
            }
            debug!(path = %cached.display(), "cached termpicker path is stale");
        }

        for step in &self.order {
            let Some(candidate) = step.candidate(&self.probe, &self.env, &self.source) else {
                continue;
            };
            if self.probe.is_live(&candidate) {
                debug!(%step, path = %candidate.display(), "resolved termpicker");
                self.cached = Some(candidate.clone());
                return Some(Located {
                    path: candidate,
                    found_by: FoundBy::Search(*step),
                });
            }
        }

        debug!("termpicker not found in any search location");
        None
    }

    /// The cached path as last stored, without revalidation.
    pub fn cached(&self) -> Option<&Path> {
        self.cached.as_deref()
    }

    /// Drop the cached path.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Cache `path` if it passes the liveness check.
    pub(crate) fn cache_if_live(&mut self, path: &Path) -> bool {
        if self.probe.is_live(path) {
            self.cached = Some(path.to_path_buf());
            true
        } else {
            false
        }
    }

    /// Where the downloader places the executable.
    pub fn local_binary_path(&self) -> Option<PathBuf> {
        self.local_install_dir()
            .map(|dir| dir.join(&self.source.binary_name))
    }

    /// `<data-home>/nvim/<plugin>`.
    pub fn local_install_dir(&self) -> Option<PathBuf> {
        self.env.install_dir(&self.source.plugin_name)
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn source(&self) -> &BinarySource {
        &self.source
    }
}
