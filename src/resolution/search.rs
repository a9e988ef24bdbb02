//! Candidate locations for the termpicker executable.

use crate::resolution::FileProbe;
use crate::{BinarySource, Environment};
use std::path::PathBuf;

/// One place the resolver looks for the executable.
///
/// The resolver walks a list of these in order and stops at the first
/// candidate that passes the liveness check. Reordering or dropping steps
/// is a matter of passing a different list to
/// [`Resolver::with_search_order`](crate::Resolver::with_search_order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStep {
    /// The command search path (`which termpicker`).
    SystemPath,
    /// `$GOPATH/bin/termpicker`.
    GoPath,
    /// `~/go/bin/termpicker`, the Go toolchain default.
    HomeGoBin,
    /// `~/.local/bin/termpicker`.
    HomeLocalBin,
    /// `<data-home>/nvim/termpicker/termpicker`, where the downloader extracts to.
    LocalInstall,
}

/// The search order used by [`Resolver::new`](crate::Resolver::new).
pub const DEFAULT_SEARCH_ORDER: [SearchStep; 5] = [
    SearchStep::SystemPath,
    SearchStep::GoPath,
    SearchStep::HomeGoBin,
    SearchStep::HomeLocalBin,
    SearchStep::LocalInstall,
];

impl SearchStep {
    /// The path this step proposes, before any liveness check.
    ///
    /// `None` when the step does not apply (variable unset, PATH miss).
    pub fn candidate<P: FileProbe>(
        &self,
        probe: &P,
        env: &Environment,
        source: &BinarySource,
    ) -> Option<PathBuf> {
        let name = &source.binary_name;
        match self {
            Self::SystemPath => probe.search_path(name),
            Self::GoPath => env.gopath.as_ref().map(|root| root.join("bin").join(name)),
            Self::HomeGoBin => env.home_join("go/bin").map(|dir| dir.join(name)),
            Self::HomeLocalBin => env.home_join(".local/bin").map(|dir| dir.join(name)),
            Self::LocalInstall => env
                .install_dir(&source.plugin_name)
                .map(|dir| dir.join(name)),
        }
    }
}
