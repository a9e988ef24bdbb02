//! Resolution implementation submodule.
//!
//! This module contains the building blocks the [`Resolver`](crate::Resolver)
//! is assembled from:
//!
//! - `FileProbe`: the filesystem capability (PATH lookup, liveness, mkdir,
//!   chmod, remove), with `SystemProbe` as the real implementation
//! - `SearchStep`: one candidate location in the ordered search

mod probe;
mod search;

pub use probe::{FileProbe, SystemProbe};
pub use search::{SearchStep, DEFAULT_SEARCH_ORDER};
